//! Пошаговый покерный стол (Texas Hold'em без блайндов и сайд-потов).
//!
//! Слои:
//! - `domain` – карты, колода, фишки, игроки, стадии, конфиг стола;
//! - `eval` – оценка руки по кратностям рангов;
//! - `engine` – чистые редьюсеры раунда: ставки, переход стадий, расчёт банка;
//! - `bot` – политика ботов;
//! - `round` – владелец состояния, очередь шагов и асинхронный драйвер ботов;
//! - `infra` – RNG, id ботов, учёт итогов;
//! - `api` – команды, запросы и DTO для клиента.

pub mod api;
pub mod bot;
pub mod domain;
pub mod engine;
pub mod eval;
pub mod infra;
pub mod round;
