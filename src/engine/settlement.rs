use log::info;
use serde::{Deserialize, Serialize};

use crate::domain::{Chips, Deck, PlayerId, SeatIndex, Stage};
use crate::engine::betting::BettingState;
use crate::engine::errors::{EngineError, Rejection};
use crate::engine::hand_history::RoundEventKind;
use crate::engine::positions::{first_to_act, next_dealer};
use crate::engine::state::GameState;
use crate::eval::{evaluate_best_hand, HandEvaluation};

/// Итог раунда для внешнего учёта (ledger).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Settlement {
    pub round_number: u64,
    pub winner_id: PlayerId,
    pub winner_name: String,
    /// Весь банк раунда.
    pub amount: Chips,
    /// Название руки победителя, если дошли до сравнения рук.
    pub hand_name: Option<String>,
    /// Кому после раунда восстановили стек.
    pub rebuys: Vec<PlayerId>,
}

/// Рассчитать раунд: выбрать победителя, отдать ему весь банк,
/// вернуть стол в Waiting и сдвинуть кнопку дилера.
///
/// `explicit_winner` – победитель, назначенный снаружи; он обязан быть претендентом.
/// Делёж банка не поддерживается: при равных рангах побеждает первый по месту.
pub fn settle(
    state: &GameState,
    explicit_winner: Option<&PlayerId>,
) -> Result<(GameState, Settlement), EngineError> {
    if !state.is_resolved() {
        return Err(Rejection::RoundNotResolvable(state.stage).into());
    }

    let (winner_seat, evaluation) = pick_winner(state, explicit_winner)?;

    let mut next = state.clone();
    // Банк целиком: собранное со стадий + ставки последней стадии.
    let mut amount = next.pot.take();
    for player in next.players.iter_mut() {
        amount += player.stage_contribution;
        player.stage_contribution = Chips::ZERO;
        player.round_contribution = Chips::ZERO;
    }

    let winner = &mut next.players[winner_seat];
    winner.stack += amount;
    let winner_id = winner.id.clone();
    let winner_name = winner.name.clone();
    let hand_name = evaluation.map(|e| e.name);

    next.history.push(RoundEventKind::PotAwarded {
        seat: winner_seat,
        player_id: winner_id.clone(),
        amount,
        hand_name: hand_name.clone(),
    });

    let mut rebuys = Vec::new();
    let starting_stack = next.starting_stack;
    for player in next.players.iter_mut() {
        player.folded = false;
        player.active = true;
        player.hole_cards.clear();
        if player.stack.is_zero() {
            player.stack = starting_stack;
            rebuys.push(player.id.clone());
            next.history.push(RoundEventKind::Rebuy {
                player_id: player.id.clone(),
                amount: starting_stack,
            });
        }
    }

    next.community_cards.clear();
    next.deck = Deck::from_cards(Vec::new());
    next.stage = Stage::Waiting;
    next.dealer_index = next_dealer(next.players.len(), next.dealer_index);
    let first = first_to_act(&next.players, next.dealer_index).unwrap_or(0);
    next.betting = BettingState::new(first);
    next.current_turn = first;
    next.turn_counter += 1;
    next.history.push(RoundEventKind::StageChanged {
        stage: Stage::Waiting,
    });

    info!(
        "round {} settled: {} ({}) wins {}{}",
        next.round_number,
        winner_name,
        winner_id,
        amount,
        hand_name
            .as_deref()
            .map(|h| format!(" with {h}"))
            .unwrap_or_default()
    );

    let settlement = Settlement {
        round_number: next.round_number,
        winner_id,
        winner_name,
        amount,
        hand_name,
        rebuys,
    };

    Ok((next, settlement))
}

/// Победитель и (если сравнивали руки) его оценка.
fn pick_winner(
    state: &GameState,
    explicit_winner: Option<&PlayerId>,
) -> Result<(SeatIndex, Option<HandEvaluation>), EngineError> {
    let contested = state.contender_count() > 1;
    let evaluate = |seat: SeatIndex| {
        let p = &state.players[seat];
        evaluate_best_hand(&p.hole_cards, &state.community_cards)
    };

    if let Some(id) = explicit_winner {
        let seat = state
            .seat_of(id)
            .ok_or_else(|| Rejection::UnknownPlayer(id.clone()))?;
        if !state.players[seat].is_contender() {
            return Err(Rejection::WinnerNotContender(id.clone()).into());
        }
        return Ok((seat, contested.then(|| evaluate(seat))));
    }

    if !contested {
        let (seat, _) = state
            .contenders()
            .next()
            .ok_or(Rejection::RoundNotResolvable(state.stage))?;
        return Ok((seat, None));
    }

    let mut best: Option<(SeatIndex, HandEvaluation)> = None;
    for (seat, _) in state.contenders() {
        let evaluation = evaluate(seat);
        let better = match &best {
            None => true,
            Some((_, current)) => evaluation.rank > current.rank,
        };
        if better {
            best = Some((seat, evaluation));
        }
    }

    best.map(|(seat, e)| (seat, Some(e)))
        .ok_or_else(|| Rejection::RoundNotResolvable(state.stage).into())
}
