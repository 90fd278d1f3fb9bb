//! Простая политика бота: решение по видимой информации и случайному броску.

use serde::{Deserialize, Serialize};

use crate::domain::{Card, Chips};
use crate::engine::{GameState, PlayerAction, PlayerActionKind, RandomSource};
use crate::eval::{evaluate_best_hand, HandRank};

/// Решение бота.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum BotDecision {
    Fold,
    Call,
    Raise,
}

/// Всё, что бот видит за столом.
#[derive(Clone, Copy, Debug)]
pub struct BotView<'a> {
    pub hole_cards: &'a [Card],
    /// Только открытые общие карты.
    pub community_cards: &'a [Card],
    /// Ставка стола на текущей стадии.
    pub current_bet: Chips,
    pub stack: Chips,
    pub pot_total: Chips,
}

impl BotView<'_> {
    /// Ранг руки бота по видимым картам (до флопа – неполная рука).
    pub fn hand_rank(&self) -> HandRank {
        evaluate_best_hand(self.hole_cards, self.community_cards).rank
    }
}

/// Решение по видимой информации. `draw` – равномерный бросок из [0, 1).
pub fn decide(view: &BotView<'_>, draw: f64) -> BotDecision {
    if view.community_cards.is_empty() {
        return decide_preflop(view.hole_cards, draw);
    }

    let rank = view.hand_rank().value();

    if rank >= 3 && draw > 0.3 {
        return BotDecision::Raise;
    }
    if rank >= 1 && draw > 0.4 {
        return BotDecision::Call;
    }

    let bet = view.current_bet.0 as f64;
    if view.current_bet.is_zero() || bet < view.stack.0 as f64 * 0.1 {
        return if draw > 0.8 {
            BotDecision::Fold
        } else {
            BotDecision::Call
        };
    }
    if bet < view.pot_total.0 as f64 * 0.3 && draw > 0.4 {
        return BotDecision::Call;
    }

    if draw > 0.6 {
        BotDecision::Fold
    } else {
        BotDecision::Call
    }
}

fn decide_preflop(hole: &[Card], draw: f64) -> BotDecision {
    let is_pair = matches!(hole, [a, b, ..] if a.rank == b.rank);
    if is_pair {
        return if draw > 0.4 {
            BotDecision::Raise
        } else {
            BotDecision::Call
        };
    }

    if hole.iter().any(|c| c.rank.is_face_or_ace()) {
        return if draw > 0.6 {
            BotDecision::Raise
        } else {
            BotDecision::Call
        };
    }

    if draw > 0.85 {
        BotDecision::Fold
    } else {
        BotDecision::Call
    }
}

/// Размер рейза: от 25% до 75% банка пропорционально рангу руки, не больше стека.
pub fn raise_amount(pot_total: Chips, stack: Chips, hand_rank: HandRank) -> Chips {
    let min_raise = pot_total.fraction_floor(0.25);
    let max_raise = pot_total.fraction_floor(0.75);
    let spread = (max_raise - min_raise).fraction_floor(f64::from(hand_rank.value()) / 10.0);
    (min_raise + spread).min(stack)
}

/// Действие для бота, чей сейчас ход. `None` – сейчас ходит не бот.
///
/// Рейз нулевого размера (пустой банк) превращается в call.
pub fn choose_action<R: RandomSource>(state: &GameState, rng: &mut R) -> Option<PlayerAction> {
    let bot = state.current_player().filter(|p| p.is_bot() && !p.folded)?;

    // В олл-ине выбирать нечего: только пропустить ход.
    if bot.is_all_in() {
        return Some(PlayerAction::call(bot.id.clone()).for_turn(state.turn_counter));
    }

    let view = BotView {
        hole_cards: &bot.hole_cards,
        community_cards: &state.community_cards,
        current_bet: state.table_current_bet(),
        stack: bot.stack,
        pot_total: state.pot_total(),
    };

    let kind = match decide(&view, rng.next_unit()) {
        BotDecision::Fold => PlayerActionKind::Fold,
        BotDecision::Call => PlayerActionKind::Call,
        BotDecision::Raise => {
            let amount = raise_amount(view.pot_total, view.stack, view.hand_rank());
            if amount.is_zero() {
                PlayerActionKind::Call
            } else {
                PlayerActionKind::Raise(amount)
            }
        }
    };

    Some(PlayerAction::new(bot.id.clone(), kind).for_turn(state.turn_counter))
}
