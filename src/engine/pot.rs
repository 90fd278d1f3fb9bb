use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;

/// Банк: фишки, собранные с завершённых стадий.
///
/// Ставки текущей стадии лежат в `Player::stage_contribution` и сметаются сюда
/// при переходе стадии. Полный банк раунда = `collected` + ставки стадии.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pot {
    pub collected: Chips,
}

impl Pot {
    pub fn new() -> Self {
        Self {
            collected: Chips::ZERO,
        }
    }

    pub fn add(&mut self, amount: Chips) {
        self.collected += amount;
    }

    /// Забрать всё из банка (выплата победителю).
    pub fn take(&mut self) -> Chips {
        let amount = self.collected;
        self.collected = Chips::ZERO;
        amount
    }
}
