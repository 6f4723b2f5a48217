//! Правила конкретных игр: что и когда раздаётся, какие обязательные
//! ставки, как из карт собирается рука.
//!
//! Машина ставок не проверяет вариант сама – она спрашивает `Variant`.

pub mod forced;

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::hand::Street;
use crate::eval::{evaluate, evaluate_omaha, qualifies_eight_or_better, EvalMode, Hand};

pub use forced::{fixed_bet_size, forced_bets, min_bet, round_start_seat, ForcedBets};

/// Поддерживаемые игры.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Variant {
    Holdem,
    OmahaHi,
    OmahaHiLo,
    Razz,
    StudHi,
    StudHiLo,
}

/// Кто забирает банк на шоудауне.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum WinType {
    High,
    Low,
    HighLow,
}

/// Сколько карт раздать на улице.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DealPlan {
    /// Закрытые карманные карты каждому месту.
    pub concealed: usize,
    /// Открытые карманные карты каждому месту.
    pub exposed: usize,
    /// Общие карты на борд.
    pub board: usize,
}

const BOARD_STREETS: [Street; 4] = [Street::Preflop, Street::Flop, Street::Turn, Street::River];

const STUD_STREETS: [Street; 5] = [
    Street::ThirdStreet,
    Street::FourthStreet,
    Street::FifthStreet,
    Street::SixthStreet,
    Street::SeventhStreet,
];

impl Variant {
    pub fn is_stud(self) -> bool {
        matches!(self, Variant::Razz | Variant::StudHi | Variant::StudHiLo)
    }

    pub fn win_type(self) -> WinType {
        match self {
            Variant::Holdem | Variant::OmahaHi | Variant::StudHi => WinType::High,
            Variant::Razz => WinType::Low,
            Variant::OmahaHiLo | Variant::StudHiLo => WinType::HighLow,
        }
    }

    pub fn max_seats(self) -> u8 {
        if self.is_stud() {
            8
        } else {
            10
        }
    }

    pub fn hole_cards(self) -> usize {
        match self {
            Variant::Holdem => 2,
            Variant::OmahaHi | Variant::OmahaHiLo => 4,
            Variant::Razz | Variant::StudHi | Variant::StudHiLo => 7,
        }
    }

    /// Улицы по порядку.
    pub fn streets(self) -> &'static [Street] {
        if self.is_stud() {
            &STUD_STREETS
        } else {
            &BOARD_STREETS
        }
    }

    pub fn first_street(self) -> Street {
        self.streets()[0]
    }

    pub fn next_street(self, street: Street) -> Option<Street> {
        let streets = self.streets();
        let pos = streets.iter().position(|s| *s == street)?;
        streets.get(pos + 1).copied()
    }

    pub fn is_final_street(self, street: Street) -> bool {
        self.next_street(street).is_none()
    }

    pub fn deal_plan(self, street: Street) -> DealPlan {
        match street {
            Street::Preflop => DealPlan {
                concealed: self.hole_cards(),
                ..DealPlan::default()
            },
            Street::Flop => DealPlan {
                board: 3,
                ..DealPlan::default()
            },
            Street::Turn | Street::River => DealPlan {
                board: 1,
                ..DealPlan::default()
            },
            Street::ThirdStreet => DealPlan {
                concealed: 2,
                exposed: 1,
                board: 0,
            },
            Street::FourthStreet | Street::FifthStreet | Street::SixthStreet => DealPlan {
                exposed: 1,
                ..DealPlan::default()
            },
            Street::SeventhStreet => DealPlan {
                concealed: 1,
                ..DealPlan::default()
            },
        }
    }

    /// Минимум карт, которого хватит на всю раздачу для `players` мест.
    ///
    /// В стаде на седьмой улице при нехватке колоды сдаётся одна общая карта.
    pub fn cards_needed(self, players: usize) -> usize {
        match self {
            Variant::Holdem | Variant::OmahaHi | Variant::OmahaHiLo => players * self.hole_cards() + 5,
            Variant::Razz | Variant::StudHi | Variant::StudHiLo => players * 6 + 1,
        }
    }

    /// Старшая рука места или None, если игра только на лоу.
    pub fn high_hand(self, hole: &[Card], board: &[Card]) -> Option<Hand> {
        match self {
            Variant::Holdem | Variant::StudHi | Variant::StudHiLo => {
                Some(evaluate(&joined(hole, board), EvalMode::HIGH))
            }
            Variant::OmahaHi | Variant::OmahaHiLo => Some(evaluate_omaha(hole, board, EvalMode::HIGH)),
            Variant::Razz => None,
        }
    }

    /// Лоу-рука места. В hi-lo играх – только квалифицированная (8 or better).
    pub fn low_hand(self, hole: &[Card], board: &[Card]) -> Option<Hand> {
        match self {
            Variant::Razz => Some(evaluate(&joined(hole, board), EvalMode::ACE_TO_FIVE_LOW)),
            Variant::StudHiLo => {
                let low = evaluate(&joined(hole, board), EvalMode::ACE_TO_FIVE_LOW);
                qualifies_eight_or_better(&low).then_some(low)
            }
            Variant::OmahaHiLo => {
                let low = evaluate_omaha(hole, board, EvalMode::ACE_TO_FIVE_LOW);
                qualifies_eight_or_better(&low).then_some(low)
            }
            Variant::Holdem | Variant::OmahaHi | Variant::StudHi => None,
        }
    }
}

fn joined(hole: &[Card], board: &[Card]) -> Vec<Card> {
    let mut all = Vec::with_capacity(hole.len() + board.len());
    all.extend_from_slice(hole);
    all.extend_from_slice(board);
    all
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Variant::Holdem => "Texas Hold'em",
            Variant::OmahaHi => "Omaha Hi",
            Variant::OmahaHiLo => "Omaha Hi/Lo",
            Variant::Razz => "Razz",
            Variant::StudHi => "Seven Card Stud",
            Variant::StudHiLo => "Seven Card Stud Hi/Lo",
        };
        f.write_str(name)
    }
}
