use log::{debug, info};

use crate::domain::deck::{deal_cards, generate_deck, shuffle_deck, Deck};
use crate::domain::{Chips, PlayerId, Stage};
use crate::engine::actions::{PlayerAction, PlayerActionKind};
use crate::engine::betting::{apply_all_in, apply_call, apply_fold, apply_raise, BettingState};
use crate::engine::errors::{EngineError, Rejection};
use crate::engine::hand_history::RoundEventKind;
use crate::engine::pot::Pot;
use crate::engine::positions::first_to_act;
use crate::engine::state::GameState;
use crate::engine::validation::validate_action;
use crate::engine::RandomSource;

/// Карманных карт на игрока.
pub const HOLE_CARDS: usize = 2;
/// Общих карт за раунд.
pub const COMMUNITY_CARDS: usize = 5;

/// Старт нового раунда с перемешанной колодой.
pub fn start_round<R: RandomSource>(state: &GameState, rng: &mut R) -> Result<GameState, EngineError> {
    let deck = shuffle_deck(&generate_deck(), rng);
    start_round_with_deck(state, deck)
}

/// Старт нового раунда с заданной колодой (верх колоды – начало вектора):
/// - раздаёт по 2 карты каждому по кругу;
/// - обнуляет ставки и флаги;
/// - первым ходит первый игрок слева от дилера.
pub fn start_round_with_deck(state: &GameState, mut deck: Deck) -> Result<GameState, EngineError> {
    if state.stage != Stage::Waiting {
        return Err(Rejection::RoundInProgress(state.stage).into());
    }

    let seats = state.players.len();
    let needed = seats * HOLE_CARDS + COMMUNITY_CARDS;
    if deck.len() < needed {
        return Err(EngineError::DeckExhausted {
            needed,
            available: deck.len(),
        });
    }

    let mut next = state.clone();
    let hands = deal_cards(&deck.cards, seats, HOLE_CARDS);
    deck.draw_n(seats * HOLE_CARDS);

    next.history.clear();
    next.round_number += 1;
    next.history.push(RoundEventKind::RoundStarted {
        round_number: next.round_number,
        dealer: next.dealer_index,
    });

    for (seat, (player, hand)) in next.players.iter_mut().zip(hands).enumerate() {
        player.stage_contribution = Chips::ZERO;
        player.round_contribution = Chips::ZERO;
        player.folded = false;
        player.active = true;
        player.hole_cards = hand;
        next.history.push(RoundEventKind::HoleCardsDealt {
            seat,
            count: player.hole_cards.len(),
        });
    }

    let first = first_to_act(&next.players, next.dealer_index).unwrap_or(0);
    next.stage = Stage::PreFlop;
    next.deck = deck;
    next.community_cards.clear();
    next.pot = Pot::new();
    next.betting = BettingState::new(first);
    next.current_turn = first;
    next.turn_counter += 1;

    info!(
        "round {} started: {} players, dealer seat {}, first to act seat {}",
        next.round_number, seats, next.dealer_index, first
    );

    Ok(next)
}

/// Применить действие игрока. При ошибке исходное состояние не тронуто,
/// при успехе возвращается новое состояние с переданным ходом.
///
/// Переход стадии здесь не делается – это работа `stage_advancer::advance`.
pub fn apply_action(state: &GameState, action: &PlayerAction) -> Result<GameState, EngineError> {
    let seat = validate_action(state, action)?;
    let mut next = state.clone();

    let moved = match action.kind {
        PlayerActionKind::Fold => apply_fold(&mut next, seat),
        PlayerActionKind::Call => apply_call(&mut next, seat),
        PlayerActionKind::Raise(amount) => apply_raise(&mut next, seat, amount),
        PlayerActionKind::AllIn => apply_all_in(&mut next, seat),
    };
    next.turn_counter += 1;

    let pot_after = next.pot_total();
    let player = &next.players[seat];
    debug!(
        "{} ({}) {:?}: moved {}, stack {}, table bet {}, pot {}",
        player.name,
        player.id,
        action.kind,
        moved,
        player.stack,
        next.betting.current_bet,
        pot_after
    );

    next.history.push(RoundEventKind::PlayerActed {
        player_id: player.id.clone(),
        seat,
        action: action.kind,
        moved,
        new_stack: player.stack,
        pot_after,
    });

    Ok(next)
}

pub fn fold(state: &GameState, player_id: &PlayerId) -> Result<GameState, EngineError> {
    apply_action(state, &PlayerAction::fold(player_id.clone()))
}

pub fn call(state: &GameState, player_id: &PlayerId) -> Result<GameState, EngineError> {
    apply_action(state, &PlayerAction::call(player_id.clone()))
}

pub fn raise(state: &GameState, player_id: &PlayerId, amount: Chips) -> Result<GameState, EngineError> {
    apply_action(state, &PlayerAction::raise(player_id.clone(), amount))
}

pub fn all_in(state: &GameState, player_id: &PlayerId) -> Result<GameState, EngineError> {
    apply_action(state, &PlayerAction::all_in(player_id.clone()))
}

/// Отменить идущий раунд: каждому вернуть всё, что он поставил за раунд.
/// Кнопка дилера не двигается.
pub fn abandon_round(state: &GameState) -> Result<GameState, EngineError> {
    if state.stage == Stage::Waiting {
        return Err(Rejection::RoundNotResolvable(state.stage).into());
    }

    let mut next = state.clone();
    for player in next.players.iter_mut() {
        player.stack += player.round_contribution;
        player.stage_contribution = Chips::ZERO;
        player.round_contribution = Chips::ZERO;
        player.folded = false;
        player.active = true;
        player.hole_cards.clear();
    }

    next.pot = Pot::new();
    next.community_cards.clear();
    next.deck = Deck::from_cards(Vec::new());
    next.stage = Stage::Waiting;
    let first = first_to_act(&next.players, next.dealer_index).unwrap_or(0);
    next.betting = BettingState::new(first);
    next.current_turn = first;
    next.turn_counter += 1;
    next.history.push(RoundEventKind::RoundAbandoned);

    info!("round {} abandoned, bets refunded", next.round_number);
    Ok(next)
}
