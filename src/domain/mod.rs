//! Доменная модель: карты, колода, фишки, игроки, стадии и конфиг стола.

pub mod card;
pub mod chips;
pub mod deck;
pub mod player;
pub mod stage;
pub mod table;

/// Индекс места в упорядоченном списке игроков раунда.
pub type SeatIndex = usize;

pub use card::*;
pub use chips::*;
pub use deck::*;
pub use player::*;
pub use stage::*;
pub use table::*;
