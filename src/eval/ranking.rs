use core::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::domain::SeatIndex;

use super::hand_rank::Hand;

/// Что считается лучшей рукой при раздаче банка.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Direction {
    /// Старшая рука выигрывает.
    High,
    /// Младшая рука выигрывает (лоу).
    Low,
}

/// Места, разложенные по ярусам силы: первый ярус – лучшие руки,
/// внутри яруса руки равны.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Rankings {
    pub tiers: Vec<Vec<SeatIndex>>,
}

impl Rankings {
    pub fn from_hands(hands: &[(SeatIndex, Hand)], direction: Direction) -> Self {
        let mut sorted: Vec<&(SeatIndex, Hand)> = hands.iter().collect();
        sorted.sort_by(|a, b| match direction {
            Direction::High => b.1.compare(&a.1),
            Direction::Low => a.1.compare(&b.1),
        });

        let mut tiers: Vec<Vec<SeatIndex>> = Vec::new();
        let mut prev: Option<&Hand> = None;
        for (seat, hand) in sorted {
            match prev {
                Some(p) if p.compare(hand) == Ordering::Equal => {
                    if let Some(last) = tiers.last_mut() {
                        last.push(*seat);
                    }
                }
                _ => tiers.push(vec![*seat]),
            }
            prev = Some(hand);
        }
        for tier in tiers.iter_mut() {
            tier.sort_unstable();
        }
        Self { tiers }
    }

    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }

    pub fn contains(&self, seat: SeatIndex) -> bool {
        self.tiers.iter().any(|t| t.contains(&seat))
    }

    /// Лучшие среди допущенных мест (могут делить банк).
    pub fn winners_among(&self, eligible: &[SeatIndex]) -> Vec<SeatIndex> {
        for tier in &self.tiers {
            let winners: Vec<SeatIndex> = tier
                .iter()
                .copied()
                .filter(|s| eligible.contains(s))
                .collect();
            if !winners.is_empty() {
                return winners;
            }
        }
        Vec::new()
    }
}
