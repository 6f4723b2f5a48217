use core::cmp::Ordering;

use crate::domain::card::{Card, Rank, RankOrdering, Suit};

use super::hand_rank::{describe, Hand, Ranking};
use super::lookup_tables::{detect_straight, rank_to_bit, RankMask};
use super::mode::EvalMode;

/// Главная функция: лучшая (или, в low-режиме, младшая) 5-карточная
/// рука из произвольного набора карт.
///
/// Больше пяти карт – перебор всех C(n,5) подмножеств.
/// Меньше пяти – недостающие позиции заполняются пустыми слотами,
/// которые не образуют ни пар, ни стритов, ни флешей.
pub fn evaluate(cards: &[Card], mode: EvalMode) -> Hand {
    if cards.len() <= 5 {
        return evaluate_five(cards, mode);
    }

    let mut best: Option<Hand> = None;
    for idx in combinations(cards.len(), 5) {
        let five: Vec<Card> = idx.iter().map(|&i| cards[i]).collect();
        best = Some(pick(best, evaluate_five(&five, mode), mode));
    }
    best.unwrap_or_else(|| evaluate_five(&[], mode))
}

/// Omaha: ровно две карманные и три карты борда.
///
/// Перебираются все C(hole,2) × C(board,3) сочетания. Пока борд не
/// открыт полностью, берётся сколько есть (с пустыми слотами).
pub fn evaluate_omaha(hole: &[Card], board: &[Card], mode: EvalMode) -> Hand {
    let from_hole = hole.len().min(2);
    let from_board = board.len().min(3);

    let mut best: Option<Hand> = None;
    for hi in combinations(hole.len(), from_hole) {
        for bi in combinations(board.len(), from_board) {
            let mut five = Vec::with_capacity(5);
            five.extend(hi.iter().map(|&i| hole[i]));
            five.extend(bi.iter().map(|&i| board[i]));
            best = Some(pick(best, evaluate_five(&five, mode), mode));
        }
    }
    best.unwrap_or_else(|| evaluate_five(&[], mode))
}

/// Эталон квалификации "eight or better": 8-7-6-5-4 в ace-to-five low.
pub fn eight_or_better() -> Hand {
    let reference = [
        Card::new(Rank::Eight, Suit::Spades),
        Card::new(Rank::Seven, Suit::Hearts),
        Card::new(Rank::Six, Suit::Diamonds),
        Card::new(Rank::Five, Suit::Clubs),
        Card::new(Rank::Four, Suit::Spades),
    ];
    evaluate_five(&reference, EvalMode::ACE_TO_FIVE_LOW)
}

/// Лоу проходит, если он не хуже 8-7-6-5-4.
/// Неполные руки и руки с ace-high порядком не квалифицируются.
pub fn qualifies_eight_or_better(hand: &Hand) -> bool {
    hand.ordering == RankOrdering::AceLow
        && !hand.is_partial()
        && hand.compare(&eight_or_better()) != Ordering::Greater
}

/// Оставить лучшую руку по направлению режима.
fn pick(best: Option<Hand>, candidate: Hand, mode: EvalMode) -> Hand {
    match best {
        None => candidate,
        Some(current) => {
            let better = if mode.low {
                candidate.compare(&current) == Ordering::Less
            } else {
                candidate.compare(&current) == Ordering::Greater
            };
            if better {
                candidate
            } else {
                current
            }
        }
    }
}

/// Оценка не более чем пяти карт.
fn evaluate_five(cards: &[Card], mode: EvalMode) -> Hand {
    let ordering = mode.ordering();
    let cards = &cards[..cards.len().min(5)];

    // Группы одного ранга: (значение ранга, карты).
    let mut groups: Vec<(u8, Vec<Card>)> = Vec::with_capacity(5);
    let mut rank_mask: RankMask = 0;
    for &card in cards {
        rank_mask |= rank_to_bit(card.rank);
        let value = card.rank.value(ordering);
        match groups.iter_mut().find(|(v, _)| *v == value) {
            Some((_, group)) => group.push(card),
            None => groups.push((value, vec![card])),
        }
    }
    for (_, group) in groups.iter_mut() {
        group.sort_by(|a, b| b.suit.cmp(&a.suit));
    }

    // Сначала по количеству (desc), затем по рангу (desc).
    groups.sort_by(|a, b| b.1.len().cmp(&a.1.len()).then_with(|| b.0.cmp(&a.0)));

    // pattern: например [4,1], [3,2], [2,2,1]; пустые слоты считаются одиночками
    let blanks = 5 - cards.len();
    let mut pattern: Vec<usize> = groups.iter().map(|(_, g)| g.len()).collect();
    pattern.extend(std::iter::repeat(1).take(blanks));

    let complete = cards.len() == 5;
    let is_flush = complete
        && !mode.ignore_flushes
        && cards.iter().all(|c| c.suit == cards[0].suit);
    let straight_high = if complete && !mode.ignore_straights {
        detect_straight(rank_mask)
    } else {
        None
    };

    let ranking = match (straight_high, is_flush) {
        (Some(Rank::Ace), true) => Ranking::RoyalFlush,
        (Some(_), true) => Ranking::StraightFlush,
        _ if pattern == [4, 1] => Ranking::FourOfAKind,
        _ if pattern == [3, 2] => Ranking::FullHouse,
        (_, true) => Ranking::Flush,
        (Some(_), false) => Ranking::Straight,
        _ if pattern == [3, 1, 1] => Ranking::ThreeOfAKind,
        _ if pattern == [2, 2, 1] => Ranking::TwoPair,
        _ if pattern == [2, 1, 1, 1] => Ranking::OnePair,
        _ => Ranking::HighCard,
    };

    let (arranged, key) = match straight_high {
        Some(high) => straight_arrangement(cards, high),
        None => {
            let arranged: Vec<Card> = groups.iter().flat_map(|(_, g)| g.iter().copied()).collect();
            let mut key = [0u8; 5];
            let values = groups.iter().flat_map(|(v, g)| std::iter::repeat(*v).take(g.len()));
            for (slot, v) in key.iter_mut().zip(values) {
                *slot = v;
            }
            (arranged, key)
        }
    };

    let description = describe(ranking, &arranged);
    Hand {
        ranking,
        cards: arranged,
        key,
        ordering,
        description,
    }
}

/// Карты стрита от старшей к младшей; в wheel туз уходит в конец.
fn straight_arrangement(cards: &[Card], high: Rank) -> (Vec<Card>, [u8; 5]) {
    let mut arranged = cards.to_vec();
    arranged.sort_by(|a, b| b.rank.cmp(&a.rank));
    if high == Rank::Five {
        arranged.rotate_left(1);
    }

    let top = high as u8;
    let key = [top, top - 1, top - 2, top - 3, top - 4];
    (arranged, key)
}

/// Все сочетания индексов C(n,k) в лексикографическом порядке.
pub(crate) fn combinations(n: usize, k: usize) -> Vec<Vec<usize>> {
    let mut out = Vec::new();
    if k > n {
        return out;
    }
    let mut idx: Vec<usize> = (0..k).collect();
    loop {
        out.push(idx.clone());

        // Самая правая позиция, которую ещё можно сдвинуть.
        let Some(i) = (0..k).rev().find(|&i| idx[i] != i + n - k) else {
            return out;
        };
        idx[i] += 1;
        for j in (i + 1)..k {
            idx[j] = idx[j - 1] + 1;
        }
    }
}
