use serde::{Deserialize, Serialize};

use crate::domain::{PlayerId, PlayerSeed};
use crate::engine::{PlayerAction, RandomSource};
use crate::round::RoundController;

use super::dto::CommandResponse;
use super::errors::ApiError;

/// Команда верхнего уровня – всё, что меняет состояние стола.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Command {
    /// Посадить игроков из лобби (только между раундами).
    SeatPlayers { seeds: Vec<PlayerSeed> },

    /// Раздать карты и открыть PreFlop.
    StartRound,

    /// Действие игрока в раунде.
    Act(PlayerAction),

    /// Рассчитать раунд; `winner` – явно назначенный победитель.
    Settle { winner: Option<PlayerId> },

    /// Отменить раунд с возвратом ставок.
    AbandonRound,
}

impl Command {
    /// Разобрать команду из JSON (как её присылает клиент).
    pub fn from_json_str(raw: &str) -> Result<Self, ApiError> {
        Ok(serde_json::from_str(raw)?)
    }
}

/// Выполнить команду на контроллере стола.
///
/// Если действие привело к автоматическому расчёту раунда,
/// возвращается `CommandResponse::Settled`.
pub fn execute<R: RandomSource>(
    controller: &mut RoundController,
    command: Command,
    rng: &mut R,
) -> Result<CommandResponse, ApiError> {
    match command {
        Command::SeatPlayers { seeds } => {
            controller.seat_players(&seeds)?;
            Ok(CommandResponse::Ok)
        }
        Command::StartRound => {
            controller.start_round(rng)?;
            Ok(CommandResponse::Ok)
        }
        Command::Act(action) => {
            let settled_before = controller.settlements().len();
            controller.submit(action)?;
            Ok(controller.settlements()[settled_before..]
                .last()
                .cloned()
                .map_or(CommandResponse::Ok, CommandResponse::Settled))
        }
        Command::Settle { winner } => {
            let settlement = controller.settle(winner.as_ref())?;
            Ok(CommandResponse::Settled(settlement))
        }
        Command::AbandonRound => {
            controller.abandon_round()?;
            Ok(CommandResponse::Ok)
        }
    }
}
