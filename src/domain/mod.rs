//! Доменная модель покера: карты, фишки, места, конфиг раздачи.

pub mod card;
pub mod chips;
pub mod deck;
pub mod hand;
pub mod seat;
pub mod seating;
pub mod table;

/// Индекс места за столом (0..num_seats-1).
pub type SeatIndex = u8;

// Удобные реэкспорты, чтобы в других модулях писать crate::domain::Card и т.п.
pub use card::*;
pub use chips::*;
pub use deck::*;
pub use hand::*;
pub use seat::*;
pub use seating::*;
pub use table::*;
