use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::{PlayerId, SeatIndex, Stage};
use crate::engine::{RoundEvent, Settlement};

/// DTO игрока за столом.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerView {
    pub seat: SeatIndex,
    pub player_id: PlayerId,
    pub name: String,
    pub stack: Chips,
    /// Ставка на текущей стадии.
    pub stage_contribution: Chips,
    pub folded: bool,
    pub is_bot: bool,
    /// Сколько карманных карт на руках (видно всем).
    pub hole_card_count: usize,
    /// Сами карты – только для "героя" или на шоудауне у претендентов.
    pub hole_cards: Option<Vec<Card>>,
}

/// DTO стола глазами конкретного зрителя.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameView {
    pub stage: Stage,
    pub round_number: u64,
    /// Номер хода – его клиент кладёт в `PlayerAction::expected_turn`.
    pub turn_counter: u64,
    pub dealer_index: SeatIndex,
    /// Чей ход (только на стадиях ставок).
    pub current_turn: Option<SeatIndex>,
    pub current_bet: Chips,
    pub pot_total: Chips,
    pub community_cards: Vec<Card>,
    pub players: Vec<PlayerView>,
}

/// Ответ API на команду.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum CommandResponse {
    /// Успешно, без доп.данных.
    Ok,

    /// Раунд рассчитан (вручную или автоматически после действия).
    Settled(Settlement),
}

/// Ответ на запрос "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum QueryResponse {
    View(GameView),
    Settlements(Vec<Settlement>),
    History(Vec<RoundEvent>),
}
