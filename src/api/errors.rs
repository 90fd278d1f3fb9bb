use serde::{Deserialize, Serialize};

use crate::engine::EngineError;

/// Ошибки внешнего API (то, что отдаём фронту / клиенту).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ApiError {
    /// Неправильные входные данные (битый JSON, размер рейза, состав стола).
    BadRequest(String),

    /// Действие отклонено правилами (не твой ход, устаревший ход и т.п.).
    Rejected(String),

    /// Стол ещё не готов: никого не посадили.
    NotReady(String),

    /// Внутренняя ошибка.
    Internal(String),
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        let message = err.to_string();
        match err {
            EngineError::InvalidAction(_) => ApiError::Rejected(message),
            EngineError::InsufficientState => ApiError::NotReady(message),
            EngineError::MalformedAmount(_)
            | EngineError::NotEnoughPlayers { .. }
            | EngineError::TableFull(_)
            | EngineError::DuplicatePlayer(_)
            | EngineError::EmptyStack(_)
            | EngineError::Config(_) => ApiError::BadRequest(message),
            EngineError::DeckExhausted { .. } => ApiError::Internal(message),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}
