//! Инфраструктурный слой вокруг движка:
//! - генерация id ботов;
//! - RNG-реализации для движка и ботов;
//! - учёт итогов раундов (ledger).

pub mod ids;
pub mod ledger;
pub mod rng;

pub use ids::*;
pub use ledger::*;
pub use rng::*;
