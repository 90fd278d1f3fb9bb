//! Оценка силы руки.
//!
//! Основная функция:
//!   `evaluate_best_hand(hole, community) -> HandEvaluation`

pub mod evaluator;
pub mod hand_rank;

pub use evaluator::{evaluate_best_hand, evaluate_hand};
pub use hand_rank::{HandCategory, HandEvaluation, HandRank};
