use serde::{Deserialize, Serialize};

use crate::domain::{PlayerId, Stage};
use crate::engine::GameState;
use crate::round::RoundController;

use super::dto::{GameView, PlayerView, QueryResponse};
use super::errors::ApiError;

/// Запросы "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Query {
    /// Состояние стола глазами игрока (`None` – наблюдатель).
    GetView { viewer: Option<PlayerId> },

    /// Итоги всех рассчитанных раундов.
    ListSettlements,

    /// Журнал событий текущего (или последнего) раунда.
    GetHistory,
}

pub fn execute_query(controller: &RoundController, query: &Query) -> Result<QueryResponse, ApiError> {
    match query {
        Query::GetView { viewer } => {
            let state = controller.state()?;
            Ok(QueryResponse::View(build_game_view(state, viewer.as_ref())))
        }
        Query::ListSettlements => Ok(QueryResponse::Settlements(
            controller.settlements().to_vec(),
        )),
        Query::GetHistory => {
            let state = controller.state()?;
            Ok(QueryResponse::History(state.history.events.clone()))
        }
    }
}

/// Собрать DTO стола для зрителя.
///
/// Чужие карманные карты скрыты; на шоудауне открываются карты претендентов.
pub fn build_game_view(state: &GameState, viewer: Option<&PlayerId>) -> GameView {
    let showdown = state.stage == Stage::Showdown;

    let players = state
        .players
        .iter()
        .enumerate()
        .map(|(seat, p)| {
            let is_hero = viewer == Some(&p.id);
            let show_cards = is_hero || (showdown && p.is_contender());

            PlayerView {
                seat,
                player_id: p.id.clone(),
                name: p.name.clone(),
                stack: p.stack,
                stage_contribution: p.stage_contribution,
                folded: p.folded,
                is_bot: p.is_bot(),
                hole_card_count: p.hole_cards.len(),
                hole_cards: show_cards.then(|| p.hole_cards.clone()),
            }
        })
        .collect();

    GameView {
        stage: state.stage,
        round_number: state.round_number,
        turn_counter: state.turn_counter,
        dealer_index: state.dealer_index,
        current_turn: state.current_player().map(|_| state.current_turn),
        current_bet: state.table_current_bet(),
        pot_total: state.pot_total(),
        community_cards: state.community_cards.clone(),
        players,
    }
}
