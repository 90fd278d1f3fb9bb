use serde::{Deserialize, Serialize};

use crate::domain::{Chips, PlayerId};

/// Тип действия игрока.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum PlayerActionKind {
    Fold,
    /// Уравнять текущую ставку (или check, если доплачивать нечего).
    Call,
    /// Уравнять и добавить сверху указанную сумму.
    Raise(Chips),
    /// All-in – поставить весь стек.
    AllIn,
}

/// Конкретное действие игрока.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerAction {
    /// Какой игрок действует.
    pub player_id: PlayerId,
    /// Само действие.
    pub kind: PlayerActionKind,
    /// Номер хода, для которого отправлено действие (`GameState::turn_counter`).
    /// Защищает от повторной или запоздавшей отправки по сети.
    #[serde(default)]
    pub expected_turn: Option<u64>,
}

impl PlayerAction {
    pub fn new(player_id: PlayerId, kind: PlayerActionKind) -> Self {
        Self {
            player_id,
            kind,
            expected_turn: None,
        }
    }

    pub fn fold(player_id: PlayerId) -> Self {
        Self::new(player_id, PlayerActionKind::Fold)
    }

    pub fn call(player_id: PlayerId) -> Self {
        Self::new(player_id, PlayerActionKind::Call)
    }

    pub fn raise(player_id: PlayerId, amount: Chips) -> Self {
        Self::new(player_id, PlayerActionKind::Raise(amount))
    }

    pub fn all_in(player_id: PlayerId) -> Self {
        Self::new(player_id, PlayerActionKind::AllIn)
    }

    /// Привязать действие к конкретному ходу.
    pub fn for_turn(mut self, turn: u64) -> Self {
        self.expected_turn = Some(turn);
        self
    }
}
