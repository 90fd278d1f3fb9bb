// src/bin/poker_dev_cli.rs

use std::env;
use std::sync::Arc;

use log::error;
use tokio::sync::Mutex;

use poker_round_engine::api::build_game_view;
use poker_round_engine::domain::{PlayerSeed, TableConfig};
use poker_round_engine::engine::{EngineError, GameState};
use poker_round_engine::infra::{DeterministicRng, IdGenerator, InMemoryLedger, SystemRng};
use poker_round_engine::round::{BotDriver, RoundController};

const DEFAULT_ROUNDS: u64 = 3;

/// Стол из одних ботов: N раундов через асинхронный драйвер.
///
/// Аргументы: `[rounds] [seed]`. Пауза ботов берётся из `BOT_DELAY_MS` (по умолчанию 0).
#[tokio::main(flavor = "current_thread")]
async fn main() {
    env_logger::builder().format_target(false).init();

    let mut args = env::args().skip(1);
    let rounds = args
        .next()
        .and_then(|a| a.parse().ok())
        .unwrap_or(DEFAULT_ROUNDS);
    let seed: Option<u64> = args.next().and_then(|a| a.parse().ok());

    let config = TableConfig {
        bot_delay_ms: env::var("BOT_DELAY_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(0),
        ..TableConfig::default()
    };

    println!("poker_dev_cli: стол из {} ботов, {} раундов", config.max_players, rounds);

    let result = match seed {
        Some(seed) => run(config, rounds, DeterministicRng::from_u64(seed)).await,
        None => run(config, rounds, SystemRng).await,
    };

    if let Err(err) = result {
        error!("simulation failed: {err}");
        std::process::exit(1);
    }
}

async fn run<R>(config: TableConfig, rounds: u64, mut rng: R) -> Result<(), EngineError>
where
    R: poker_round_engine::engine::RandomSource,
{
    let ids = IdGenerator::new();
    let seeds: Vec<PlayerSeed> = (0..config.max_players)
        .map(|n| {
            let id = ids.next_bot_id();
            PlayerSeed {
                name: format!("Bot {}", n + 1),
                id,
                starting_chips: config.starting_stack,
            }
        })
        .collect();

    let mut controller = RoundController::new(config)?.with_ledger(Box::new(InMemoryLedger::new()));
    controller.seat_players(&seeds)?;

    let controller = Arc::new(Mutex::new(controller));
    let driver = BotDriver::from_config(Arc::clone(&controller)).await;

    for _ in 0..rounds {
        controller.lock().await.start_round(&mut rng)?;
        debug_print_state(controller.lock().await.state()?);

        let acted = driver.run_until_idle(&mut rng).await?;

        let guard = controller.lock().await;
        println!("  ходов ботов: {acted}");
        if let Some(s) = guard.settlements().last() {
            println!(
                "  раунд {}: {} выигрывает {}{}",
                s.round_number,
                s.winner_name,
                s.amount,
                s.hand_name
                    .as_deref()
                    .map(|h| format!(" ({h})"))
                    .unwrap_or_default()
            );
        }
        debug_print_state(guard.state()?);
    }

    Ok(())
}

fn debug_print_state(state: &GameState) {
    let view = build_game_view(state, None);
    println!();
    println!(
        "=== раунд {} | стадия {} | банк {} | дилер {} ===",
        view.round_number, view.stage, view.pot_total, view.dealer_index
    );
    let board: Vec<String> = view.community_cards.iter().map(|c| c.symbol()).collect();
    println!("  борд: [{}]", board.join(" "));
    for p in &view.players {
        println!(
            "  #{} {:<8} стек {:>6} ставка {:>5}{}",
            p.seat,
            p.name,
            p.stack,
            p.stage_contribution,
            if p.folded { " (fold)" } else { "" }
        );
    }
}
