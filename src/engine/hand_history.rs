use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::hand::{Share, Street};
use crate::domain::seat::HoleCard;
use crate::domain::SeatIndex;
use crate::engine::actions::PlayerActionKind;
use crate::variant::Variant;

/// Вид обязательной ставки.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ForcedBetKind {
    Ante,
    SmallBlind,
    BigBlind,
    BringIn,
}

/// Тип события в раздаче.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum HandEventKind {
    /// Новая раздача началась.
    HandStarted {
        variant: Variant,
        button: SeatIndex,
        stacks: Vec<Chips>,
    },

    /// Анте, блайнд или bring-in (сумма – реально внесённая).
    ForcedBetPosted {
        seat: SeatIndex,
        kind: ForcedBetKind,
        amount: Chips,
    },

    /// Место получило карманные карты.
    HoleCardsDealt {
        seat: SeatIndex,
        cards: Vec<HoleCard>,
    },

    /// Открыты общие карты на борде.
    BoardDealt {
        street: Street,
        cards: Vec<Card>,
    },

    /// Действие игрока.
    PlayerActed {
        seat: SeatIndex,
        action: PlayerActionKind,
        paid: Chips,
        new_stack: Chips,
        pot_after: Chips,
    },

    /// Переход на новую улицу.
    StreetChanged {
        street: Street,
    },

    /// Шоудаун – открытие карт.
    ShowdownReveal {
        seat: SeatIndex,
        cards: Vec<Card>,
        high: Option<String>,
        low: Option<String>,
    },

    /// Выплата банка(ов).
    PotAwarded {
        seat: SeatIndex,
        amount: Chips,
        share: Share,
    },

    /// Раздача завершена.
    HandFinished {
        total_pot: Chips,
    },
}

/// Событие в раздаче с порядковым номером.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct HandEvent {
    pub index: u32,
    pub kind: HandEventKind,
}

/// Полная история раздачи.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct HandHistory {
    pub events: Vec<HandEvent>,
}

impl HandHistory {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, kind: HandEventKind) {
        let idx = self.events.len() as u32;
        self.events.push(HandEvent { index: idx, kind });
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
