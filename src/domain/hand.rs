use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::SeatIndex;

/// Улица раздачи.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Street {
    Preflop,
    Flop,
    Turn,
    River,
    ThirdStreet,
    FourthStreet,
    FifthStreet,
    SixthStreet,
    SeventhStreet,
}

impl fmt::Display for Street {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Street::Preflop => "preflop",
            Street::Flop => "flop",
            Street::Turn => "turn",
            Street::River => "river",
            Street::ThirdStreet => "third street",
            Street::FourthStreet => "fourth street",
            Street::FifthStreet => "fifth street",
            Street::SixthStreet => "sixth street",
            Street::SeventhStreet => "seventh street",
        };
        f.write_str(name)
    }
}

/// За что выплачена доля банка.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Share {
    WonHigh,
    WonLow,
    SplitHigh,
    SplitLow,
    WonUncontested,
}

/// Одна выплата из банка.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Payout {
    pub seat: SeatIndex,
    pub chips: Chips,
    pub share: Share,
}

/// Сумма выплат по всем записям.
pub fn total_paid(payouts: &[Payout]) -> Chips {
    payouts.iter().map(|p| p.chips).sum()
}

/// Итог завершённой раздачи.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandSummary {
    pub street_reached: Street,
    pub showdown: bool,
    pub board: Vec<Card>,
    pub total_pot: Chips,
    pub payouts: Vec<Payout>,
    /// Стеки всех мест после выплат, по индексу места.
    pub final_stacks: Vec<Chips>,
}

impl HandSummary {
    /// Сколько получило место (по всем банкам и долям).
    pub fn won_by(&self, seat: SeatIndex) -> Chips {
        self.payouts
            .iter()
            .filter(|p| p.seat == seat)
            .map(|p| p.chips)
            .sum()
    }
}
