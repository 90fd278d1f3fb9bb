use log::info;
use serde::{Deserialize, Serialize};

use crate::domain::{Chips, Stage};
use crate::engine::betting::BettingState;
use crate::engine::game_loop::COMMUNITY_CARDS;
use crate::engine::hand_history::RoundEventKind;
use crate::engine::positions::first_to_act;
use crate::engine::state::GameState;

/// Что произошло при попытке перейти на следующую стадию.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum AdvanceOutcome {
    /// Стадия не завершена, состояние не изменилось.
    Pending,
    /// Открыта следующая стадия ставок.
    Dealt(Stage),
    /// Раунд дошёл до шоудауна (по порядку или через all-in).
    Showdown,
    /// Остался один претендент – сразу к расчёту банка, без открытия карт.
    ReadyToSettle,
}

/// Завершена ли текущая стадия ставок.
///
/// - один претендент или меньше – да, сразу;
/// - иначе все претенденты уравняли ставку (all-in не обязан) И ход вернулся
///   к месту, открывшему стадию (после рейза это место получает ещё один ход).
pub fn is_stage_complete(state: &GameState) -> bool {
    if !state.stage.is_betting() {
        return false;
    }

    if state.contender_count() <= 1 {
        return true;
    }

    let current_bet = state.betting.current_bet;
    let all_matched = state
        .contenders()
        .all(|(_, p)| p.stage_contribution == current_bet || p.stack.is_zero());

    all_matched && state.betting.is_cycle_complete(state.current_turn)
}

/// Перейти на следующую стадию, если текущая завершена.
pub fn advance(state: &GameState) -> (GameState, AdvanceOutcome) {
    if !is_stage_complete(state) {
        return (state.clone(), AdvanceOutcome::Pending);
    }

    if state.contender_count() <= 1 {
        return (state.clone(), AdvanceOutcome::ReadyToSettle);
    }

    let mut next = state.clone();
    sweep_contributions(&mut next);

    let has_all_in = next.contenders().any(|(_, p)| p.stack.is_zero());
    let target = if has_all_in {
        Stage::Showdown
    } else {
        next_stage(next.stage)
    };

    deal_community_up_to(&mut next, target);
    next.stage = target;
    next.turn_counter += 1;
    next.history.push(RoundEventKind::StageChanged { stage: target });

    let first = first_to_act(&next.players, next.dealer_index).unwrap_or(next.current_turn);
    next.betting = BettingState::new(first);
    next.current_turn = first;

    info!(
        "round {}: stage -> {}{} (board {} cards, pot {})",
        next.round_number,
        target,
        if has_all_in { " (all-in)" } else { "" },
        next.community_cards.len(),
        next.pot_total()
    );

    let outcome = if target == Stage::Showdown {
        AdvanceOutcome::Showdown
    } else {
        AdvanceOutcome::Dealt(target)
    };
    (next, outcome)
}

/// Исчерпывающий порядок стадий ставок.
fn next_stage(stage: Stage) -> Stage {
    match stage {
        Stage::PreFlop => Stage::Flop,
        Stage::Flop => Stage::Turn,
        Stage::Turn => Stage::River,
        Stage::River => Stage::Showdown,
        Stage::Showdown | Stage::Waiting => stage.next(),
    }
}

/// Ставки стадии уходят в банк, ставка стола обнуляется.
fn sweep_contributions(state: &mut GameState) {
    let mut swept = Chips::ZERO;
    for player in state.players.iter_mut() {
        swept += player.stage_contribution;
        player.stage_contribution = Chips::ZERO;
    }
    state.pot.add(swept);
    state.betting.current_bet = Chips::ZERO;
}

/// Довести число общих карт до положенного стадии.
fn deal_community_up_to(state: &mut GameState, stage: Stage) {
    let target = stage.community_card_count().min(COMMUNITY_CARDS);
    let missing = target.saturating_sub(state.community_cards.len());
    if missing == 0 {
        return;
    }

    let cards = state.deck.draw_n(missing);
    state.community_cards.extend_from_slice(&cards);
    state
        .history
        .push(RoundEventKind::CommunityDealt { stage, cards });
}
