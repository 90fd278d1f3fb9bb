use crate::domain::SeatIndex;
use crate::engine::actions::{PlayerAction, PlayerActionKind};
use crate::engine::errors::{EngineError, Rejection};
use crate::engine::state::GameState;

/// Проверка, может ли игрок выполнить это действие при текущем состоянии раунда.
/// Возвращает место игрока.
pub fn validate_action(state: &GameState, action: &PlayerAction) -> Result<SeatIndex, EngineError> {
    if !state.stage.is_betting() {
        return Err(Rejection::NotBettingStage(state.stage).into());
    }

    if let Some(expected) = action.expected_turn {
        if expected != state.turn_counter {
            return Err(Rejection::StaleTurn {
                expected,
                actual: state.turn_counter,
            }
            .into());
        }
    }

    let seat = state
        .seat_of(&action.player_id)
        .ok_or_else(|| Rejection::UnknownPlayer(action.player_id.clone()))?;

    if state.players[seat].folded {
        return Err(Rejection::AlreadyFolded(action.player_id.clone()).into());
    }

    if state.contender_count() <= 1 {
        return Err(Rejection::RoundDecided.into());
    }

    if state.current_turn != seat {
        return Err(Rejection::NotPlayersTurn(action.player_id.clone()).into());
    }

    if let PlayerActionKind::Raise(amount) = action.kind {
        if amount.is_zero() {
            return Err(EngineError::MalformedAmount(amount));
        }
    }

    Ok(seat)
}
