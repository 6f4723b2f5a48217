use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::domain::{chips::Chips, SeatIndex};

/// Сайд-пот: часть банка, в которую участвуют только некоторые игроки.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SidePot {
    pub amount: Chips,
    pub eligible_seats: Vec<SeatIndex>,
}

/// Посчитать сайд-поты из сумм, которые внесли места.
///
/// Вход: contributions[seat] = сколько суммарно фишек поставило место (во всех улицах),
/// folded – сфолдившие места (их фишки остаются в банке, но права на него нет).
/// Выход: список side pots от младшего уровня к старшему; суммы дают ровно весь банк.
pub fn compute_side_pots(
    contributions: &BTreeMap<SeatIndex, Chips>,
    folded: &BTreeSet<SeatIndex>,
) -> Vec<SidePot> {
    // Снимок ненулевых вкладов: (seat, amount, сфолдил ли).
    let entries: Vec<(SeatIndex, Chips, bool)> = contributions
        .iter()
        .filter(|(_, chips)| !chips.is_zero())
        .map(|(seat, chips)| (*seat, *chips, folded.contains(seat)))
        .collect();

    if entries.is_empty() {
        return Vec::new();
    }

    // Уровни – различные вклады мест, которые ещё в игре.
    let levels: BTreeSet<Chips> = entries
        .iter()
        .filter(|(_, _, is_folded)| !is_folded)
        .map(|(_, chips, _)| *chips)
        .collect();

    if levels.is_empty() {
        let total = entries.iter().map(|(_, c, _)| *c).sum();
        return vec![SidePot {
            amount: total,
            eligible_seats: Vec::new(),
        }];
    }

    let mut pots = Vec::with_capacity(levels.len());
    let mut prev_level = Chips::ZERO;

    for &level in &levels {
        // Каждое место отдаёт в слой то, что внесло между prev_level и level.
        let amount: Chips = entries
            .iter()
            .map(|(_, contrib, _)| (*contrib).min(level).saturating_sub(prev_level))
            .sum();

        let eligible: Vec<SeatIndex> = entries
            .iter()
            .filter(|(_, contrib, is_folded)| !is_folded && *contrib >= level)
            .map(|(seat, _, _)| *seat)
            .collect();

        pots.push(SidePot {
            amount,
            eligible_seats: eligible,
        });
        prev_level = level;
    }

    // Мёртвые фишки сфолдивших выше старшего уровня – в последний пот.
    let overflow: Chips = entries
        .iter()
        .map(|(_, contrib, _)| contrib.saturating_sub(prev_level))
        .sum();
    if let Some(last) = pots.last_mut() {
        last.amount += overflow;
    }

    pots
}
