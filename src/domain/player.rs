use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;

/// Префикс id, по которому планировщик узнаёт место бота.
pub const BOT_ID_PREFIX: &str = "BOT_";

/// Идентификатор игрока: адрес кошелька/аккаунта или синтетический id бота.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct PlayerId(pub String);

impl PlayerId {
    pub fn new(id: impl Into<String>) -> Self {
        PlayerId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_bot(&self) -> bool {
        self.0.starts_with(BOT_ID_PREFIX)
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PlayerId {
    fn from(s: &str) -> Self {
        PlayerId(s.to_string())
    }
}

/// То, что лобби отдаёт движку при посадке: id, имя, стартовый стек.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerSeed {
    pub id: PlayerId,
    pub name: String,
    pub starting_chips: Chips,
}

impl PlayerSeed {
    pub fn new(id: impl Into<String>, name: impl Into<String>, starting_chips: Chips) -> Self {
        Self {
            id: PlayerId::new(id),
            name: name.into(),
            starting_chips,
        }
    }
}

/// Состояние игрока внутри раунда.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    /// Фишки перед игроком (ещё не поставленные).
    pub stack: Chips,
    /// Сколько поставлено на текущей стадии. Обнуляется на каждой новой стадии.
    pub stage_contribution: Chips,
    /// Сколько всего поставлено за раунд (нужно для возврата при отмене раунда).
    pub round_contribution: Chips,
    pub folded: bool,
    /// Участвует ли в текущем раунде. Сброс – при фолде.
    pub active: bool,
    /// Карманные карты: 0 или ровно 2.
    pub hole_cards: Vec<Card>,
}

impl Player {
    pub fn from_seed(seed: &PlayerSeed) -> Self {
        Self {
            id: seed.id.clone(),
            name: seed.name.clone(),
            stack: seed.starting_chips,
            stage_contribution: Chips::ZERO,
            round_contribution: Chips::ZERO,
            folded: false,
            active: true,
            hole_cards: Vec::new(),
        }
    }

    /// Ещё претендует на банк.
    pub fn is_contender(&self) -> bool {
        !self.folded
    }

    /// В олл-ине: не сфолдил и фишек не осталось.
    pub fn is_all_in(&self) -> bool {
        !self.folded && self.stack.is_zero()
    }

    pub fn is_bot(&self) -> bool {
        self.id.is_bot()
    }

    /// Перенести до `amount` фишек из стека в ставку. Возвращает сколько реально ушло.
    pub fn commit(&mut self, amount: Chips) -> Chips {
        let real = amount.min(self.stack);
        self.stack -= real;
        self.stage_contribution += real;
        self.round_contribution += real;
        real
    }
}
