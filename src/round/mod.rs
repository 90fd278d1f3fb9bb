//! Управление раундом поверх чистого движка:
//! - `RoundController` – владелец состояния и единый вход для действий;
//! - `StepQueue` – очередь шагов (переход стадии, ход бота);
//! - `BotDriver` – асинхронные ходы ботов с паузой.

pub mod controller;
pub mod driver;
pub mod scheduler;

pub use controller::{BotStep, RoundController};
pub use driver::BotDriver;
pub use scheduler::{Step, StepQueue, TurnTicket};
