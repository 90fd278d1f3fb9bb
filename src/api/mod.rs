//! Внешний API стола.
//!
//! Здесь описываются:
//! - команды (commands.rs): всё, что меняет состояние (посадка, старт, действие, расчёт);
//! - запросы (queries.rs): только чтение;
//! - DTO (dto.rs): представление стола для клиента, без чужих карманных карт;
//! - ошибки (errors.rs): то, что видит клиент.

pub mod commands;
pub mod dto;
pub mod errors;
pub mod queries;

pub use commands::*;
pub use dto::*;
pub use errors::*;
pub use queries::*;
