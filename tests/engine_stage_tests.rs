// tests/engine_stage_tests.rs

//! Завершение стадии и переход между стадиями.

use poker_round_engine::domain::{Chips, Deck, PlayerId, PlayerSeed, Stage, TableConfig};
use poker_round_engine::engine::{
    advance, call, fold, is_stage_complete, raise, start_round_with_deck, AdvanceOutcome,
    GameState,
};

fn started_table(stacks: &[(&str, u64)]) -> GameState {
    let seeds: Vec<PlayerSeed> = stacks
        .iter()
        .map(|(id, chips)| PlayerSeed::new(*id, *id, Chips(*chips)))
        .collect();
    let state = GameState::seat_players(&seeds, &TableConfig::default()).unwrap();
    start_round_with_deck(&state, Deck::standard_52()).unwrap()
}

fn id(s: &str) -> PlayerId {
    PlayerId::from(s)
}

/// Оба претендента чекают (первым ходит место 1).
fn check_around(s: &GameState, first: &str, second: &str) -> GameState {
    let s = call(s, &id(first)).unwrap();
    call(&s, &id(second)).unwrap()
}

#[test]
fn heads_up_raise_and_call_moves_to_flop() {
    // "a" сидит на месте 1 и ходит первым, "b" – дилер.
    let s = started_table(&[("b", 1000), ("a", 1000)]);

    let s = raise(&s, &id("a"), Chips(100)).unwrap();
    assert!(!is_stage_complete(&s));

    let s = call(&s, &id("b")).unwrap();
    assert_eq!(s.pot_total(), Chips(200));
    assert_eq!(s.player(&id("a")).unwrap().stage_contribution, Chips(100));
    assert_eq!(s.player(&id("b")).unwrap().stage_contribution, Chips(100));
    assert!(is_stage_complete(&s));

    let (s, outcome) = advance(&s);
    assert_eq!(outcome, AdvanceOutcome::Dealt(Stage::Flop));
    assert_eq!(s.stage, Stage::Flop);
    assert_eq!(s.community_cards.len(), 3);
    assert_eq!(s.pot_total(), Chips(200), "банк переживает смену стадии");
    assert_eq!(s.table_current_bet(), Chips::ZERO);
    for p in &s.players {
        assert_eq!(p.stage_contribution, Chips::ZERO);
    }
    assert_eq!(s.current_turn, 1, "после стадии первым снова ходит место слева от дилера");
}

#[test]
fn short_call_keeps_stage_open_until_others_match() {
    // Место 1 ставит 100, место 2 (50 фишек) отвечает всем стеком, место 0 ещё не ходило.
    let s = started_table(&[("c", 1000), ("b", 1000), ("a", 50)]);

    let s = raise(&s, &id("b"), Chips(100)).unwrap();
    let s = call(&s, &id("a")).unwrap();

    let a = s.player(&id("a")).unwrap();
    assert_eq!(a.stack, Chips::ZERO);
    assert_eq!(a.stage_contribution, Chips(50));
    assert_eq!(s.table_current_bet(), Chips(100));
    assert!(!is_stage_complete(&s));

    let (same, outcome) = advance(&s);
    assert_eq!(outcome, AdvanceOutcome::Pending);
    assert_eq!(same, s);

    // Как только "c" уравнивает, all-in "a" освобождён от требования.
    let s = call(&s, &id("c")).unwrap();
    assert!(is_stage_complete(&s));

    // All-in открывает все карты сразу.
    let (s, outcome) = advance(&s);
    assert_eq!(outcome, AdvanceOutcome::Showdown);
    assert_eq!(s.stage, Stage::Showdown);
    assert_eq!(s.community_cards.len(), 5);
    assert_eq!(s.pot_total(), Chips(250));
}

#[test]
fn three_players_one_folds_then_stage_advances() {
    let s = started_table(&[("a", 1000), ("b", 1000), ("c", 1000)]);

    let s = call(&s, &id("b")).unwrap();
    let s = fold(&s, &id("c")).unwrap();
    assert!(!is_stage_complete(&s));

    let s = call(&s, &id("a")).unwrap();
    assert_eq!(s.contender_count(), 2);
    assert!(is_stage_complete(&s));

    let (s, outcome) = advance(&s);
    assert_eq!(outcome, AdvanceOutcome::Dealt(Stage::Flop));
    assert_eq!(s.current_turn, 1);
}

#[test]
fn stage_complete_check_is_idempotent() {
    let s = started_table(&[("a", 1000), ("b", 1000)]);
    assert_eq!(is_stage_complete(&s), is_stage_complete(&s));

    let s = call(&s, &id("b")).unwrap();
    let first = is_stage_complete(&s);
    assert_eq!(first, is_stage_complete(&s));
    assert!(!first);

    let s = call(&s, &id("a")).unwrap();
    let first = is_stage_complete(&s);
    assert_eq!(first, is_stage_complete(&s));
    assert!(first);
}

#[test]
fn betting_just_opened_is_not_complete() {
    let s = started_table(&[("a", 1000), ("b", 1000)]);
    // Все ставки равны нулю, но никто ещё не ходил.
    assert!(!is_stage_complete(&s));
    assert_eq!(advance(&s).1, AdvanceOutcome::Pending);
}

#[test]
fn reraise_reopens_the_cycle() {
    let s = started_table(&[("a", 1000), ("b", 1000), ("c", 1000)]);

    let s = raise(&s, &id("b"), Chips(100)).unwrap();
    let s = call(&s, &id("c")).unwrap();
    let s = raise(&s, &id("a"), Chips(100)).unwrap();

    // b уравнивает, но c ещё должен ответить на рейз a.
    let s = call(&s, &id("b")).unwrap();
    assert!(!is_stage_complete(&s));

    // Ставки равны, но ход у a, а стадию открывал b.
    let s = call(&s, &id("c")).unwrap();
    assert!(!is_stage_complete(&s));

    let s = call(&s, &id("a")).unwrap();
    assert_eq!(s.current_turn, 1);
    assert!(is_stage_complete(&s));
    assert_eq!(s.pot_total(), Chips(600));
}

#[test]
fn raise_does_not_move_the_seat_that_opened_the_stage() {
    // "a" на месте 1 открывает стадию, "b" – дилер.
    let s = started_table(&[("b", 1000), ("a", 1000)]);

    let s = call(&s, &id("a")).unwrap();
    let s = raise(&s, &id("b"), Chips(100)).unwrap();
    let s = call(&s, &id("a")).unwrap();

    // Ставки уравнены, но ход у дилера: он получает ещё одно действие.
    assert_eq!(s.current_turn, 0);
    assert!(!is_stage_complete(&s));
    assert_eq!(advance(&s).1, AdvanceOutcome::Pending);

    let s = call(&s, &id("b")).unwrap();
    assert_eq!(s.current_turn, 1);
    assert!(is_stage_complete(&s));
    assert_eq!(advance(&s).1, AdvanceOutcome::Dealt(Stage::Flop));
}

#[test]
fn opener_folding_passes_the_anchor_on() {
    let s = started_table(&[("a", 1000), ("b", 1000), ("c", 1000)]);

    // b открывал стадию и сфолдил сразу: c ещё не ходил, стадия открыта.
    let s = fold(&s, &id("b")).unwrap();
    assert!(!is_stage_complete(&s));

    let s = call(&s, &id("c")).unwrap();
    let s = call(&s, &id("a")).unwrap();
    assert_eq!(s.current_turn, 2);
    assert!(is_stage_complete(&s));
}

#[test]
fn full_check_down_reaches_showdown() {
    let mut s = started_table(&[("a", 1000), ("b", 1000)]);

    for (expected_stage, board) in [
        (Stage::Flop, 3),
        (Stage::Turn, 4),
        (Stage::River, 5),
    ] {
        s = check_around(&s, "b", "a");
        let (next, outcome) = advance(&s);
        assert_eq!(outcome, AdvanceOutcome::Dealt(expected_stage));
        assert_eq!(next.community_cards.len(), board);
        s = next;
    }

    s = check_around(&s, "b", "a");
    let (s, outcome) = advance(&s);
    assert_eq!(outcome, AdvanceOutcome::Showdown);
    assert_eq!(s.stage, Stage::Showdown);
    assert_eq!(s.community_cards.len(), 5);
    assert!(s.is_resolved());

    // На шоудауне ставок нет и стадия больше не двигается.
    assert!(!is_stage_complete(&s));
    assert_eq!(advance(&s).1, AdvanceOutcome::Pending);
}

#[test]
fn single_survivor_goes_straight_to_settlement() {
    let s = started_table(&[("a", 1000), ("b", 1000)]);
    let s = raise(&s, &id("b"), Chips(100)).unwrap();
    let s = fold(&s, &id("a")).unwrap();

    assert!(is_stage_complete(&s));
    assert!(s.is_resolved());

    let (next, outcome) = advance(&s);
    assert_eq!(outcome, AdvanceOutcome::ReadyToSettle);
    assert_eq!(next.stage, Stage::PreFlop, "карты не открываются");
    assert!(next.community_cards.is_empty());
}

#[test]
fn advance_bumps_turn_counter() {
    let s = started_table(&[("a", 1000), ("b", 1000)]);
    let s = check_around(&s, "b", "a");
    let before = s.turn_counter;

    let (s, _) = advance(&s);
    assert_eq!(s.turn_counter, before + 1);
}
