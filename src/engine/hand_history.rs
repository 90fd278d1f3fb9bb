use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::stage::Stage;
use crate::domain::{PlayerId, SeatIndex};
use crate::engine::actions::PlayerActionKind;

/// Тип события в раунде.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum RoundEventKind {
    /// Новый раунд начался.
    RoundStarted {
        round_number: u64,
        dealer: SeatIndex,
    },

    /// Игрок получил карманные карты. Сами карты в историю не пишем – они приватные.
    HoleCardsDealt {
        seat: SeatIndex,
        count: usize,
    },

    /// Открыты общие карты.
    CommunityDealt {
        stage: Stage,
        cards: Vec<Card>,
    },

    /// Действие игрока.
    PlayerActed {
        player_id: PlayerId,
        seat: SeatIndex,
        action: PlayerActionKind,
        /// Сколько фишек реально ушло из стека.
        moved: Chips,
        new_stack: Chips,
        pot_after: Chips,
    },

    /// Переход на новую стадию.
    StageChanged {
        stage: Stage,
    },

    /// Выплата банка.
    PotAwarded {
        seat: SeatIndex,
        player_id: PlayerId,
        amount: Chips,
        hand_name: Option<String>,
    },

    /// Обнулившийся игрок восстановлен до стартового стека.
    Rebuy {
        player_id: PlayerId,
        amount: Chips,
    },

    /// Раунд отменён, ставки возвращены.
    RoundAbandoned,
}

/// Событие в раунде с порядковым номером.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct RoundEvent {
    pub index: u32,
    pub kind: RoundEventKind,
}

/// Полная история раунда.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct RoundHistory {
    pub events: Vec<RoundEvent>,
}

impl RoundHistory {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, kind: RoundEventKind) {
        let idx = self.events.len() as u32;
        self.events.push(RoundEvent { index: idx, kind });
    }

    pub fn last(&self) -> Option<&RoundEventKind> {
        self.events.last().map(|e| &e.kind)
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}
