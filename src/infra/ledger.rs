use crate::domain::{Chips, PlayerId};
use crate::engine::Settlement;

/// Внешний учёт итогов раундов.
///
/// Движок ничего не хранит сам: итог (победитель, сумма) отдаётся сюда,
/// а долговременная запись (база, on-chain) – забота реализации.
pub trait SettlementLedger {
    fn record(&mut self, settlement: &Settlement);
}

/// Простая in-memory реализация для тестов и локального запуска.
#[derive(Debug, Default)]
pub struct InMemoryLedger {
    entries: Vec<Settlement>,
}

impl InMemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[Settlement] {
        &self.entries
    }

    /// Сколько всего выиграл игрок по записанным раундам.
    pub fn total_won(&self, player_id: &PlayerId) -> Chips {
        self.entries
            .iter()
            .filter(|s| &s.winner_id == player_id)
            .map(|s| s.amount)
            .sum()
    }
}

impl SettlementLedger for InMemoryLedger {
    fn record(&mut self, settlement: &Settlement) {
        self.entries.push(settlement.clone());
    }
}
