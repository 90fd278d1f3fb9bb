//! Движок раунда: ставки, переход стадий, расчёт банка.
//!
//! Все операции – чистые редьюсеры `(&GameState, ...) -> GameState`:
//!   - `start_round` – раздать карты и открыть PreFlop
//!   - `apply_action` – применить действие игрока и передать ход
//!   - `advance` – перейти на следующую стадию, если текущая завершена
//!   - `settle` – выбрать победителя и выплатить банк

pub mod actions;
pub mod betting;
pub mod errors;
pub mod game_loop;
pub mod hand_history;
pub mod positions;
pub mod pot;
pub mod settlement;
pub mod stage_advancer;
pub mod state;
pub mod validation;

pub use actions::{PlayerAction, PlayerActionKind};
pub use betting::{amount_to_call, BettingState};
pub use errors::{EngineError, Rejection};
pub use game_loop::{
    abandon_round, all_in, apply_action, call, fold, raise, start_round, start_round_with_deck,
};
pub use hand_history::{RoundEvent, RoundEventKind, RoundHistory};
pub use pot::Pot;
pub use settlement::{settle, Settlement};
pub use stage_advancer::{advance, is_stage_complete, AdvanceOutcome};
pub use state::GameState;

/// RNG интерфейс для движка и ботов.
/// Реализации – в infra (обёртки над `rand`).
pub trait RandomSource {
    fn shuffle<T>(&mut self, slice: &mut [T]);

    /// Равномерное число из [0, 1).
    fn next_unit(&mut self) -> f64;
}
