use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::domain::{
    Card, Chips, Deck, Player, PlayerId, PlayerSeed, SeatIndex, Stage, TableConfig,
};
use crate::engine::betting::BettingState;
use crate::engine::errors::EngineError;
use crate::engine::hand_history::RoundHistory;
use crate::engine::pot::Pot;

/// Полное состояние раунда. Меняется только через редьюсеры движка,
/// каждый из которых возвращает новое значение.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct GameState {
    pub stage: Stage,
    /// Игроки в порядке мест.
    pub players: Vec<Player>,
    /// Чей сейчас ход.
    pub current_turn: SeatIndex,
    pub dealer_index: SeatIndex,
    pub betting: BettingState,
    pub pot: Pot,
    /// Открытые общие карты (0/3/4/5 в зависимости от стадии).
    pub community_cards: Vec<Card>,
    /// Остаток колоды после раздачи.
    pub deck: Deck,
    /// Сумма ребая для обнулившихся игроков.
    pub starting_stack: Chips,
    pub round_number: u64,
    /// Растёт на каждом изменении состояния; служит ключом идемпотентности хода.
    pub turn_counter: u64,
    pub history: RoundHistory,
}

impl GameState {
    /// Посадить игроков из лобби. Раунд ещё не начат (стадия Waiting).
    pub fn seat_players(seeds: &[PlayerSeed], config: &TableConfig) -> Result<Self, EngineError> {
        config.validate()?;

        if seeds.len() < config.min_players {
            return Err(EngineError::NotEnoughPlayers {
                found: seeds.len(),
                required: config.min_players,
            });
        }
        if seeds.len() > config.max_players {
            return Err(EngineError::TableFull(config.max_players));
        }

        let mut seen = HashSet::new();
        for seed in seeds {
            if !seen.insert(&seed.id) {
                return Err(EngineError::DuplicatePlayer(seed.id.clone()));
            }
            if seed.starting_chips.is_zero() {
                return Err(EngineError::EmptyStack(seed.id.clone()));
            }
        }

        let players: Vec<Player> = seeds.iter().map(Player::from_seed).collect();
        let first = 1 % players.len();

        Ok(Self {
            stage: Stage::Waiting,
            players,
            current_turn: first,
            dealer_index: 0,
            betting: BettingState::new(first),
            pot: Pot::new(),
            community_cards: Vec::new(),
            deck: Deck::from_cards(Vec::new()),
            starting_stack: config.starting_stack,
            round_number: 0,
            turn_counter: 0,
            history: RoundHistory::new(),
        })
    }

    /// Текущая ставка стадии.
    pub fn table_current_bet(&self) -> Chips {
        self.betting.current_bet
    }

    /// Полный банк раунда: собранное с прошлых стадий + ставки текущей.
    pub fn pot_total(&self) -> Chips {
        self.pot.collected + self.players.iter().map(|p| p.stage_contribution).sum::<Chips>()
    }

    /// Все фишки на столе: банк + стеки + ставки стадии.
    pub fn total_chips(&self) -> Chips {
        self.pot.collected
            + self
                .players
                .iter()
                .map(|p| p.stack + p.stage_contribution)
                .sum::<Chips>()
    }

    /// Не сфолдившие игроки вместе с их местами.
    pub fn contenders(&self) -> impl Iterator<Item = (SeatIndex, &Player)> {
        self.players
            .iter()
            .enumerate()
            .filter(|(_, p)| p.is_contender())
    }

    pub fn contender_count(&self) -> usize {
        self.contenders().count()
    }

    pub fn seat_of(&self, id: &PlayerId) -> Option<SeatIndex> {
        self.players.iter().position(|p| &p.id == id)
    }

    pub fn player(&self, id: &PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| &p.id == id)
    }

    /// Игрок, чей сейчас ход (только на стадиях ставок).
    pub fn current_player(&self) -> Option<&Player> {
        if self.stage.is_betting() {
            self.players.get(self.current_turn)
        } else {
            None
        }
    }

    /// Раунд можно рассчитывать: шоудаун или остался один претендент.
    pub fn is_resolved(&self) -> bool {
        match self.stage {
            Stage::Waiting => false,
            Stage::Showdown => true,
            _ => self.contender_count() <= 1,
        }
    }
}
