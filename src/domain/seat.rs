use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::SeatIndex;

/// Видимость карманной карты (в стаде часть карт открыта).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Visibility {
    Concealed,
    Exposed,
}

/// Карманная карта вместе с её видимостью.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HoleCard {
    pub card: Card,
    pub visibility: Visibility,
}

impl HoleCard {
    pub fn concealed(card: Card) -> Self {
        Self {
            card,
            visibility: Visibility::Concealed,
        }
    }

    pub fn exposed(card: Card) -> Self {
        Self {
            card,
            visibility: Visibility::Exposed,
        }
    }

    pub fn is_exposed(&self) -> bool {
        self.visibility == Visibility::Exposed
    }
}

/// Место в текущей раздаче.
///
/// Создаётся на старте раздачи. Фишки меняет только `Pot::contribute`,
/// флаги – машина состояний ставок.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Seat {
    pub position: SeatIndex,
    /// Фишки, ещё не поставленные в банк.
    pub stack: Chips,
    /// Сколько всего внесено в банк за раздачу.
    pub contributed: Chips,
    /// Сколько внесено на текущей улице (без анте).
    pub round_bet: Chips,
    pub acted: bool,
    pub folded: bool,
    pub all_in: bool,
    pub hole_cards: Vec<HoleCard>,
}

impl Seat {
    pub fn new(position: SeatIndex, stack: Chips) -> Self {
        Self {
            position,
            stack,
            contributed: Chips::ZERO,
            round_bet: Chips::ZERO,
            acted: false,
            folded: false,
            all_in: false,
            hole_cards: Vec::new(),
        }
    }

    /// Участвует в борьбе за банк (не сфолдил).
    pub fn is_contesting(&self) -> bool {
        !self.folded
    }

    /// Может ещё ставить на этой раздаче.
    pub fn is_active(&self) -> bool {
        !self.folded && !self.all_in
    }

    /// Должен сделать ход в текущем раунде.
    pub fn can_act(&self) -> bool {
        self.is_active() && !self.acted
    }

    pub fn cards(&self) -> Vec<Card> {
        self.hole_cards.iter().map(|h| h.card).collect()
    }

    pub fn exposed_cards(&self) -> Vec<Card> {
        self.hole_cards
            .iter()
            .filter(|h| h.is_exposed())
            .map(|h| h.card)
            .collect()
    }
}
