use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::hand::{Payout, Share};
use crate::domain::seat::Seat;
use crate::domain::SeatIndex;
use crate::engine::payout::split_evenly;
use crate::engine::side_pots::{compute_side_pots, SidePot};
use crate::eval::Rankings;

/// Банк раздачи: сколько внесло каждое место и кто сфолдил.
///
/// Вклады копятся всю раздачу и не сбрасываются между улицами.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pot {
    contributions: BTreeMap<SeatIndex, Chips>,
    folded: BTreeSet<SeatIndex>,
    button: SeatIndex,
    num_seats: u8,
}

impl Pot {
    pub fn new(button: SeatIndex, num_seats: u8) -> Self {
        Self {
            contributions: BTreeMap::new(),
            folded: BTreeSet::new(),
            button,
            num_seats,
        }
    }

    /// Внести фишки со стека места. Больше стека внести нельзя:
    /// сумма урезается до стека и место уходит в all-in.
    /// Возвращает реально внесённое.
    pub fn contribute(&mut self, seat: &mut Seat, chips: Chips) -> Chips {
        let paid = chips.min(seat.stack);
        seat.stack -= paid;
        seat.contributed += paid;
        if seat.stack.is_zero() && !seat.folded {
            seat.all_in = true;
        }
        if !paid.is_zero() {
            *self
                .contributions
                .entry(seat.position)
                .or_insert(Chips::ZERO) += paid;
        }
        paid
    }

    /// Фолд: место теряет право на банк, его фишки остаются.
    pub fn fold(&mut self, seat: &mut Seat) {
        seat.folded = true;
        self.folded.insert(seat.position);
    }

    pub fn total(&self) -> Chips {
        self.contributions.values().copied().sum()
    }

    pub fn contribution(&self, seat: SeatIndex) -> Chips {
        self.contributions.get(&seat).copied().unwrap_or(Chips::ZERO)
    }

    pub fn is_folded(&self, seat: SeatIndex) -> bool {
        self.folded.contains(&seat)
    }

    pub fn side_pots(&self) -> Vec<SidePot> {
        compute_side_pots(&self.contributions, &self.folded)
    }

    /// Единственный оставшийся забирает всё без вскрытия.
    pub fn uncontested(&self, seat: SeatIndex) -> Payout {
        Payout {
            seat,
            chips: self.total(),
            share: Share::WonUncontested,
        }
    }

    /// Раздать банк по рангам рук.
    ///
    /// Каждый сайд-пот делится отдельно. Если есть и хай, и квалифицированное
    /// лоу среди допущенных к поту – хай получает большую половину.
    /// Без лоу (или если `low` нет) всё уходит хаю; в чисто лоу-игре – лоу.
    pub fn payout(&self, high: Option<&Rankings>, low: Option<&Rankings>) -> Vec<Payout> {
        let mut payouts: Vec<Payout> = Vec::new();

        for pot in self.side_pots() {
            // Все вложившиеся сфолдили: пот разыгрывают оставшиеся места.
            let eligible = if pot.eligible_seats.is_empty() {
                self.fallback_seats()
            } else {
                pot.eligible_seats.clone()
            };
            let eligible = &eligible;
            let mut high_winners = high.map(|r| r.winners_among(eligible)).unwrap_or_default();
            let low_winners = low.map(|r| r.winners_among(eligible)).unwrap_or_default();

            let (high_amount, low_amount) = match (high_winners.is_empty(), low_winners.is_empty()) {
                (false, false) => {
                    let low_half = Chips(pot.amount.0 / 2);
                    (pot.amount - low_half, low_half)
                }
                (true, false) => (Chips::ZERO, pot.amount),
                _ => (pot.amount, Chips::ZERO),
            };

            // Никто из допущенных не ранжирован: пот делят сами допущенные.
            if high_winners.is_empty() && !high_amount.is_zero() {
                high_winners = eligible.clone();
            }

            if !high_amount.is_zero() {
                let share = if high_winners.len() > 1 {
                    Share::SplitHigh
                } else {
                    Share::WonHigh
                };
                for (seat, chips) in split_evenly(high_amount, &high_winners, self.button, self.num_seats) {
                    push_payout(&mut payouts, seat, chips, share);
                }
            }

            if !low_amount.is_zero() {
                let share = if low_winners.len() > 1 {
                    Share::SplitLow
                } else {
                    Share::WonLow
                };
                for (seat, chips) in split_evenly(low_amount, &low_winners, self.button, self.num_seats) {
                    push_payout(&mut payouts, seat, chips, share);
                }
            }
        }

        payouts
    }

    /// Несфолдившие места стола, а если таких нет – все вложившиеся.
    fn fallback_seats(&self) -> Vec<SeatIndex> {
        let live: Vec<SeatIndex> = (0..self.num_seats)
            .filter(|seat| !self.folded.contains(seat))
            .collect();
        if live.is_empty() {
            self.contributions.keys().copied().collect()
        } else {
            live
        }
    }
}

/// Выплаты одному месту с одной долей складываются в одну запись.
fn push_payout(payouts: &mut Vec<Payout>, seat: SeatIndex, chips: Chips, share: Share) {
    if chips.is_zero() {
        return;
    }
    match payouts.iter_mut().find(|p| p.seat == seat && p.share == share) {
        Some(existing) => existing.chips += chips,
        None => payouts.push(Payout { seat, chips, share }),
    }
}
