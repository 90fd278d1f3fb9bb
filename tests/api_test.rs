// tests/api_test.rs

//! Внешний API: команды, запросы, скрытие карт, маппинг ошибок.

use poker_round_engine::api::{
    build_game_view, execute, execute_query, ApiError, Command, CommandResponse, Query,
    QueryResponse,
};
use poker_round_engine::domain::{Chips, PlayerId, PlayerSeed, Stage, TableConfig};
use poker_round_engine::engine::{PlayerAction, RoundEventKind};
use poker_round_engine::infra::DeterministicRng;
use poker_round_engine::round::RoundController;

fn id(s: &str) -> PlayerId {
    PlayerId::from(s)
}

fn seeds() -> Vec<PlayerSeed> {
    vec![
        PlayerSeed::new("alice", "Alice", Chips(1000)),
        PlayerSeed::new("bob", "Bob", Chips(1000)),
    ]
}

fn ready_controller(config: TableConfig) -> (RoundController, DeterministicRng) {
    let mut controller = RoundController::new(config).unwrap();
    let mut rng = DeterministicRng::from_u64(5);
    execute(&mut controller, Command::SeatPlayers { seeds: seeds() }, &mut rng).unwrap();
    execute(&mut controller, Command::StartRound, &mut rng).unwrap();
    (controller, rng)
}

#[test]
fn act_returns_settlement_when_round_ends() {
    let (mut controller, mut rng) = ready_controller(TableConfig::default());

    let response = execute(
        &mut controller,
        Command::Act(PlayerAction::raise(id("bob"), Chips(100))),
        &mut rng,
    )
    .unwrap();
    assert_eq!(response, CommandResponse::Ok);

    let response = execute(
        &mut controller,
        Command::Act(PlayerAction::fold(id("alice"))),
        &mut rng,
    )
    .unwrap();
    match response {
        CommandResponse::Settled(s) => {
            assert_eq!(s.winner_id, id("bob"));
            assert_eq!(s.amount, Chips(100));
        }
        other => panic!("ожидали Settled, получили {other:?}"),
    }
}

#[test]
fn explicit_settle_and_abandon_commands() {
    let config = TableConfig {
        auto_settle: false,
        ..TableConfig::default()
    };
    let (mut controller, mut rng) = ready_controller(config);

    // Раунд ещё идёт – рассчитывать рано.
    let err = execute(&mut controller, Command::Settle { winner: None }, &mut rng).unwrap_err();
    assert!(matches!(err, ApiError::Rejected(_)));

    let response = execute(&mut controller, Command::AbandonRound, &mut rng).unwrap();
    assert_eq!(response, CommandResponse::Ok);
    assert_eq!(controller.state().unwrap().stage, Stage::Waiting);

    execute(&mut controller, Command::StartRound, &mut rng).unwrap();
    let first = controller.state().unwrap().current_turn;
    let actor = controller.state().unwrap().players[first].id.clone();
    execute(&mut controller, Command::Act(PlayerAction::fold(actor)), &mut rng).unwrap();

    let response = execute(&mut controller, Command::Settle { winner: None }, &mut rng).unwrap();
    assert!(matches!(response, CommandResponse::Settled(_)));
}

#[test]
fn errors_are_mapped_for_clients() {
    let mut controller = RoundController::new(TableConfig::default()).unwrap();
    let mut rng = DeterministicRng::from_u64(1);

    let err = execute(&mut controller, Command::StartRound, &mut rng).unwrap_err();
    assert!(matches!(err, ApiError::NotReady(_)));

    let err = execute(
        &mut controller,
        Command::SeatPlayers {
            seeds: vec![PlayerSeed::new("alice", "Alice", Chips(1000))],
        },
        &mut rng,
    )
    .unwrap_err();
    assert!(matches!(err, ApiError::BadRequest(_)));

    let err = execute(
        &mut controller,
        Command::SeatPlayers {
            seeds: vec![
                PlayerSeed::new("alice", "Alice", Chips(1000)),
                PlayerSeed::new("bob", "Bob", Chips::ZERO),
            ],
        },
        &mut rng,
    )
    .unwrap_err();
    assert!(matches!(err, ApiError::BadRequest(_)));

    let (mut controller, mut rng) = ready_controller(TableConfig::default());
    let err = execute(
        &mut controller,
        Command::Act(PlayerAction::call(id("alice"))),
        &mut rng,
    )
    .unwrap_err();
    assert!(matches!(err, ApiError::Rejected(_)));

    let err = execute(
        &mut controller,
        Command::Act(PlayerAction::raise(id("bob"), Chips::ZERO)),
        &mut rng,
    )
    .unwrap_err();
    assert!(matches!(err, ApiError::BadRequest(_)));
}

#[test]
fn commands_parse_from_json() {
    let cmd = Command::from_json_str(r#""StartRound""#).unwrap();
    assert_eq!(cmd, Command::StartRound);

    let cmd = Command::from_json_str(
        r#"{ "Act": { "player_id": "bob", "kind": { "Raise": 150 }, "expected_turn": 3 } }"#,
    )
    .unwrap();
    assert_eq!(
        cmd,
        Command::Act(PlayerAction::raise(id("bob"), Chips(150)).for_turn(3))
    );

    // Токен хода не обязателен.
    let cmd = Command::from_json_str(r#"{ "Act": { "player_id": "bob", "kind": "Fold" } }"#).unwrap();
    assert_eq!(cmd, Command::Act(PlayerAction::fold(id("bob"))));

    let err = Command::from_json_str("{ nope").unwrap_err();
    assert!(matches!(err, ApiError::BadRequest(_)));
}

#[test]
fn view_hides_other_hole_cards() {
    let (controller, _) = ready_controller(TableConfig::default());
    let state = controller.state().unwrap();

    let view = build_game_view(state, Some(&id("alice")));
    assert_eq!(view.stage, Stage::PreFlop);
    assert_eq!(view.current_turn, Some(1));
    assert_eq!(view.turn_counter, state.turn_counter);

    let alice = &view.players[0];
    let bob = &view.players[1];
    assert_eq!(alice.hole_cards.as_ref().map(Vec::len), Some(2));
    assert_eq!(bob.hole_cards, None);
    assert_eq!(bob.hole_card_count, 2);

    let spectator = build_game_view(state, None);
    assert!(spectator.players.iter().all(|p| p.hole_cards.is_none()));
}

#[test]
fn showdown_reveals_contenders_only() {
    let config = TableConfig {
        auto_settle: false,
        max_players: 3,
        ..TableConfig::default()
    };
    let mut controller = RoundController::new(config).unwrap();
    let mut rng = DeterministicRng::from_u64(11);
    let mut roster = seeds();
    roster.push(PlayerSeed::new("carol", "Carol", Chips(1000)));
    controller.seat_players(&roster).unwrap();
    controller.start_round(&mut rng).unwrap();

    controller.submit(PlayerAction::fold(id("bob"))).unwrap();
    controller.submit(PlayerAction::all_in(id("carol"))).unwrap();
    controller.submit(PlayerAction::call(id("alice"))).unwrap();

    let state = controller.state().unwrap();
    assert_eq!(state.stage, Stage::Showdown);

    let view = build_game_view(state, None);
    assert_eq!(view.current_turn, None);
    assert!(view.players[0].hole_cards.is_some());
    assert!(view.players[1].hole_cards.is_none(), "сфолдившие карты не показывают");
    assert!(view.players[2].hole_cards.is_some());
}

#[test]
fn queries_read_without_mutation() {
    let (mut controller, mut rng) = ready_controller(TableConfig::default());
    execute(
        &mut controller,
        Command::Act(PlayerAction::fold(id("bob"))),
        &mut rng,
    )
    .unwrap();

    match execute_query(&controller, &Query::ListSettlements).unwrap() {
        QueryResponse::Settlements(list) => {
            assert_eq!(list.len(), 1);
            assert_eq!(list[0].winner_id, id("alice"));
        }
        other => panic!("ожидали Settlements, получили {other:?}"),
    }

    match execute_query(&controller, &Query::GetHistory).unwrap() {
        QueryResponse::History(events) => {
            assert!(matches!(
                events.first().map(|e| &e.kind),
                Some(RoundEventKind::RoundStarted { round_number: 1, .. })
            ));
            assert!(events
                .iter()
                .any(|e| matches!(e.kind, RoundEventKind::PotAwarded { .. })));
            // Индексы событий идут подряд.
            assert!(events.iter().enumerate().all(|(i, e)| e.index as usize == i));
        }
        other => panic!("ожидали History, получили {other:?}"),
    }

    match execute_query(&controller, &Query::GetView { viewer: None }).unwrap() {
        QueryResponse::View(view) => assert_eq!(view.stage, Stage::Waiting),
        other => panic!("ожидали View, получили {other:?}"),
    }

    let empty = RoundController::new(TableConfig::default()).unwrap();
    assert!(matches!(
        execute_query(&empty, &Query::GetHistory),
        Err(ApiError::NotReady(_))
    ));
}
