//! Оценка силы покерных рук.
//!
//! Основные функции:
//!   `evaluate(cards, mode) -> Hand`
//!   `evaluate_omaha(hole, board, mode) -> Hand`
//!   `qualifies_eight_or_better(&hand)`

pub mod evaluator;
pub mod hand_rank;
pub mod lookup_tables;
pub mod mode;
pub mod ranking;

pub use evaluator::{eight_or_better, evaluate, evaluate_omaha, qualifies_eight_or_better};
pub use hand_rank::{describe, Hand, Ranking};
pub use mode::EvalMode;
pub use ranking::{Direction, Rankings};
