use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::chips::Chips;
use crate::domain::deck::DECK_SIZE;

/// Ошибки конфигурации стола.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Не удалось разобрать конфиг: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("min_players должен быть не меньше 2, получено {0}")]
    TooFewSeats(usize),

    #[error("max_players ({max}) меньше min_players ({min})")]
    SeatRange { min: usize, max: usize },

    #[error("max_players ({0}) не помещается в колоду")]
    TooManySeats(usize),

    #[error("Стартовый стек должен быть положительным")]
    ZeroStartingStack,
}

/// Конфиг стола: сколько мест, стартовый стек, поведение планировщика.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TableConfig {
    /// Максимальное количество игроков за столом.
    pub max_players: usize,
    /// Минимум игроков для старта раунда.
    pub min_players: usize,
    /// Стартовый стек; до него же восстанавливается обнулившийся игрок (ребай).
    pub starting_stack: Chips,
    /// Косметическая пауза перед ходом бота, мс.
    pub bot_delay_ms: u64,
    /// Планировщик сам рассчитывает завершённый раунд.
    pub auto_settle: bool,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            max_players: 4,
            min_players: 2,
            starting_stack: Chips(1000),
            bot_delay_ms: 1000,
            auto_settle: true,
        }
    }
}

impl TableConfig {
    /// Разобрать JSON; отсутствующие поля берутся из `Default`.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: TableConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_players < 2 {
            return Err(ConfigError::TooFewSeats(self.min_players));
        }
        if self.max_players < self.min_players {
            return Err(ConfigError::SeatRange {
                min: self.min_players,
                max: self.max_players,
            });
        }
        // 2 карты на игрока + 5 общих.
        if self.max_players * 2 + 5 > DECK_SIZE {
            return Err(ConfigError::TooManySeats(self.max_players));
        }
        if self.starting_stack.is_zero() {
            return Err(ConfigError::ZeroStartingStack);
        }
        Ok(())
    }
}
