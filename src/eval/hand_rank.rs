use core::cmp::Ordering;
use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, RankOrdering};

use super::lookup_tables::{plural_name, singular_name};

/// Категория покерной руки по силе.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Ranking {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    RoyalFlush = 9,
}

impl fmt::Display for Ranking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Ranking::HighCard => "high card",
            Ranking::OnePair => "pair",
            Ranking::TwoPair => "two pair",
            Ranking::ThreeOfAKind => "three of a kind",
            Ranking::Straight => "straight",
            Ranking::Flush => "flush",
            Ranking::FullHouse => "full house",
            Ranking::FourOfAKind => "four of a kind",
            Ranking::StraightFlush => "straight flush",
            Ranking::RoyalFlush => "royal flush",
        };
        f.write_str(name)
    }
}

/// Оценённая 5-карточная рука.
///
/// `cards` – только настоящие карты в каноническом порядке
/// (сначала самая многочисленная группа, дальше по убыванию).
/// Пустые слоты неполной руки в `cards` не попадают, но занимают
/// позиции `key` со значением 0.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Hand {
    pub ranking: Ranking,
    pub cards: Vec<Card>,
    /// Значения рангов пяти позиций в порядке `ordering`.
    pub key: [u8; 5],
    pub ordering: RankOrdering,
    pub description: String,
}

impl Hand {
    /// Полный порядок: сначала категория, потом позиции по очереди.
    ///
    /// Обе руки должны быть построены в одном порядке рангов.
    pub fn compare(&self, other: &Hand) -> Ordering {
        debug_assert_eq!(
            self.ordering, other.ordering,
            "руки с разным порядком рангов сравнивать нельзя"
        );
        self.ranking
            .cmp(&other.ranking)
            .then_with(|| self.key.cmp(&other.key))
    }

    /// Рука неполная (меньше пяти настоящих карт).
    pub fn is_partial(&self) -> bool {
        self.cards.len() < 5
    }
}

impl PartialEq for Hand {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Equal
    }
}

impl Eq for Hand {}

impl PartialOrd for Hand {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Hand {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [", self.description)?;
        for (i, c) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{c}")?;
        }
        f.write_str("]")
    }
}

/// Человеческое описание руки по категории и каноническому порядку карт.
pub fn describe(ranking: Ranking, cards: &[Card]) -> String {
    let Some(first) = cards.first() else {
        return ranking.to_string();
    };
    let r0 = first.rank;
    match ranking {
        Ranking::HighCard => format!("high card {} high", singular_name(r0)),
        Ranking::OnePair => format!("pair of {}", plural_name(r0)),
        Ranking::TwoPair => match cards.get(2) {
            Some(second) => format!(
                "two pair {} and {}",
                plural_name(r0),
                plural_name(second.rank)
            ),
            None => format!("two pair {}", plural_name(r0)),
        },
        Ranking::ThreeOfAKind => format!("three of a kind {}", plural_name(r0)),
        Ranking::Straight => format!("straight {} high", singular_name(r0)),
        Ranking::Flush => format!("flush {} high", singular_name(r0)),
        Ranking::FullHouse => match cards.get(3) {
            Some(pair) => format!(
                "full house {} full of {}",
                plural_name(r0),
                plural_name(pair.rank)
            ),
            None => format!("full house {}", plural_name(r0)),
        },
        Ranking::FourOfAKind => format!("four of a kind {}", plural_name(r0)),
        Ranking::StraightFlush => format!("straight flush {} high", singular_name(r0)),
        Ranking::RoyalFlush => "royal flush".to_string(),
    }
}
