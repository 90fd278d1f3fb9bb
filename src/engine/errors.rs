use crate::domain::{Chips, ConfigError, PlayerId, Stage};

use thiserror::Error;

/// Почему действие отклонено. Состояние раунда при этом не меняется.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Rejection {
    #[error("Сейчас не ход игрока {0}")]
    NotPlayersTurn(PlayerId),

    #[error("Игрок {0} не найден за столом")]
    UnknownPlayer(PlayerId),

    #[error("Игрок {0} уже сфолдил")]
    AlreadyFolded(PlayerId),

    #[error("На стадии {0} ставки не принимаются")]
    NotBettingStage(Stage),

    #[error("Устаревший ход: ожидался {expected}, текущий {actual}")]
    StaleTurn { expected: u64, actual: u64 },

    #[error("Раунд уже идёт (стадия {0})")]
    RoundInProgress(Stage),

    #[error("В раунде остался один претендент, ставки закрыты")]
    RoundDecided,

    #[error("Раунд ещё нельзя рассчитать (стадия {0})")]
    RoundNotResolvable(Stage),

    #[error("Игрок {0} не претендует на банк")]
    WinnerNotContender(PlayerId),
}

/// Ошибки движка.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Недопустимое действие: {0}")]
    InvalidAction(#[from] Rejection),

    #[error("Раунд не инициализирован")]
    InsufficientState,

    #[error("Некорректный размер рейза: {0}")]
    MalformedAmount(Chips),

    #[error("Недостаточно игроков: {found}, нужно минимум {required}")]
    NotEnoughPlayers { found: usize, required: usize },

    #[error("Стол заполнен: максимум {0} игроков")]
    TableFull(usize),

    #[error("Игрок {0} уже сидит за столом")]
    DuplicatePlayer(PlayerId),

    #[error("Игрок {0} садится без фишек")]
    EmptyStack(PlayerId),

    #[error("В колоде {available} карт, для раунда нужно {needed}")]
    DeckExhausted { needed: usize, available: usize },

    #[error(transparent)]
    Config(#[from] ConfigError),
}
