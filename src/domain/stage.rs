use core::fmt;

use serde::{Deserialize, Serialize};

/// Стадия раунда. Порядок объявления = порядок прохождения.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Stage {
    Waiting,
    PreFlop,
    Flop,
    Turn,
    River,
    Showdown,
}

impl Stage {
    /// Следующая стадия. После Showdown раунд возвращается в Waiting.
    pub fn next(self) -> Stage {
        match self {
            Stage::Waiting => Stage::PreFlop,
            Stage::PreFlop => Stage::Flop,
            Stage::Flop => Stage::Turn,
            Stage::Turn => Stage::River,
            Stage::River => Stage::Showdown,
            Stage::Showdown => Stage::Waiting,
        }
    }

    /// Стадии, на которых принимаются ставки.
    pub fn is_betting(self) -> bool {
        match self {
            Stage::PreFlop | Stage::Flop | Stage::Turn | Stage::River => true,
            Stage::Waiting | Stage::Showdown => false,
        }
    }

    /// Сколько общих карт открыто на этой стадии.
    pub fn community_card_count(self) -> usize {
        match self {
            Stage::Waiting | Stage::PreFlop => 0,
            Stage::Flop => 3,
            Stage::Turn => 4,
            Stage::River | Stage::Showdown => 5,
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Stage::Waiting => "Waiting",
            Stage::PreFlop => "PreFlop",
            Stage::Flop => "Flop",
            Stage::Turn => "Turn",
            Stage::River => "River",
            Stage::Showdown => "Showdown",
        };
        f.write_str(s)
    }
}
