/// Property-based tests for round invariants using proptest
///
/// Random action sequences are fed to the current player; rejected
/// actions are skipped. After every accepted transition the chip
/// total, bet bounds and board size must stay consistent.
use poker_round_engine::domain::{generate_deck, shuffle_deck, Chips, PlayerSeed, Stage, TableConfig};
use poker_round_engine::engine::{
    advance, apply_action, is_stage_complete, settle, start_round, GameState, PlayerAction,
    PlayerActionKind,
};
use poker_round_engine::infra::DeterministicRng;
use proptest::prelude::*;

// Strategy for a single action choice: kind + raise size
fn action_kind_strategy() -> impl Strategy<Value = PlayerActionKind> {
    prop_oneof![
        2 => Just(PlayerActionKind::Call),
        1 => Just(PlayerActionKind::Fold),
        2 => (1u64..400).prop_map(|n| PlayerActionKind::Raise(Chips(n))),
        1 => Just(PlayerActionKind::AllIn),
    ]
}

fn stacks_strategy() -> impl Strategy<Value = Vec<u64>> {
    prop::collection::vec(20u64..2000, 2..=4)
}

fn seated(stacks: &[u64]) -> GameState {
    let seeds: Vec<PlayerSeed> = stacks
        .iter()
        .enumerate()
        .map(|(i, chips)| PlayerSeed::new(format!("p{i}"), format!("P{i}"), Chips(*chips)))
        .collect();
    GameState::seat_players(&seeds, &TableConfig::default()).unwrap()
}

fn check_invariants(state: &GameState, initial: Chips) -> Result<(), TestCaseError> {
    prop_assert_eq!(state.total_chips(), initial, "chips created or destroyed");

    let bet = state.table_current_bet();
    for p in &state.players {
        prop_assert!(p.stage_contribution <= bet, "contribution above table bet");
    }

    prop_assert_eq!(
        state.community_cards.len(),
        state.stage.community_card_count(),
        "board size does not follow stage"
    );

    if state.stage.is_betting() && state.contender_count() > 1 {
        prop_assert!(
            !state.players[state.current_turn].folded,
            "turn points at a folded player"
        );
    }
    Ok(())
}

proptest! {
    #[test]
    fn chips_are_conserved_through_a_round(
        stacks in stacks_strategy(),
        seed in any::<u64>(),
        kinds in prop::collection::vec(action_kind_strategy(), 1..80),
    ) {
        let initial = Chips(stacks.iter().sum());
        let mut rng = DeterministicRng::from_u64(seed);
        let mut state = start_round(&seated(&stacks), &mut rng).unwrap();
        check_invariants(&state, initial)?;

        for kind in kinds {
            if state.is_resolved() {
                break;
            }
            let actor = state.players[state.current_turn].id.clone();
            let Ok(next) = apply_action(&state, &PlayerAction::new(actor, kind)) else {
                continue;
            };
            state = next;
            check_invariants(&state, initial)?;

            let before = is_stage_complete(&state);
            prop_assert_eq!(before, is_stage_complete(&state));

            let (advanced, _) = advance(&state);
            state = advanced;
            check_invariants(&state, initial)?;
        }

        if state.is_resolved() {
            let pot = state.pot_total();
            let (done, settlement) = settle(&state, None).unwrap();
            prop_assert_eq!(settlement.amount, pot);
            prop_assert_eq!(done.stage, Stage::Waiting);

            let rebuys = Chips(settlement.rebuys.len() as u64 * done.starting_stack.0);
            let stacks_after: Chips = done.players.iter().map(|p| p.stack).sum();
            prop_assert_eq!(stacks_after, initial + rebuys);
        }
    }

    #[test]
    fn shuffle_is_a_permutation(seed in any::<u64>()) {
        let deck = generate_deck();
        let shuffled = shuffle_deck(&deck, &mut DeterministicRng::from_u64(seed));

        let mut a = deck.cards.clone();
        let mut b = shuffled.cards;
        a.sort();
        b.sort();
        prop_assert_eq!(a, b);
    }
}
