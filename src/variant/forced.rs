use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, RankOrdering, Suit};
use crate::domain::chips::Chips;
use crate::domain::hand::Street;
use crate::domain::seat::Seat;
use crate::domain::table::{HandConfig, Limit};
use crate::domain::SeatIndex;
use crate::engine::positions::{clockwise_after, clockwise_from, next_seat};
use crate::eval::{evaluate, EvalMode, Hand};

use super::Variant;

/// Обязательные ставки улицы: кто и сколько должен поставить.
///
/// Суммы – запрошенные; если стека не хватает, место ставит что есть.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ForcedBets {
    pub antes: Vec<(SeatIndex, Chips)>,
    pub small_blind: Option<(SeatIndex, Chips)>,
    pub big_blind: Option<(SeatIndex, Chips)>,
    pub bring_in: Option<(SeatIndex, Chips)>,
}

/// Обязательные ставки для улицы.
///
/// Анте – со всех на первой улице. Блайнды – в играх с бордом
/// (хедз-ап: баттон ставит малый). Bring-in – в стаде на третьей улице.
pub fn forced_bets(config: &HandConfig, street: Street, seats: &[Seat]) -> ForcedBets {
    let mut forced = ForcedBets::default();
    if street != config.variant.first_street() {
        return forced;
    }

    let order: Vec<SeatIndex> = clockwise_from(config.button, config.num_seats)
        .into_iter()
        .filter(|&s| is_dealt_in(seats, s))
        .collect();

    if !config.stakes.ante.is_zero() {
        forced.antes = order.iter().map(|&s| (s, config.stakes.ante)).collect();
    }

    if config.variant.is_stud() {
        if let Some(seat) = bring_in_seat(config, seats) {
            forced.bring_in = Some((seat, bring_in_amount(config)));
        }
        return forced;
    }

    // места после баттона; пустой баттон блайнды не ставит
    let after_button: Vec<SeatIndex> = clockwise_after(config.button, config.num_seats)
        .into_iter()
        .filter(|&s| is_dealt_in(seats, s))
        .collect();
    let button_dealt_in = is_dealt_in(seats, config.button);

    let (sb, bb) = blind_amounts(config);
    let (sb_seat, bb_seat) = match after_button.as_slice() {
        [] | [_] => return forced,
        [other, button] if button_dealt_in => (*button, *other),
        [first, second, ..] => (*first, *second),
    };
    forced.small_blind = Some((sb_seat, sb));
    forced.big_blind = Some((bb_seat, bb));
    forced
}

/// Размеры блайндов. В fixed-limit – половины ставок.
pub fn blind_amounts(config: &HandConfig) -> (Chips, Chips) {
    let stakes = &config.stakes;
    match config.limit {
        Limit::FixedLimit => (stakes.small_bet.half_at_least_one(), stakes.big_bet.half_at_least_one()),
        Limit::NoLimit | Limit::PotLimit => (stakes.small_bet, stakes.big_bet),
    }
}

pub fn bring_in_amount(config: &HandConfig) -> Chips {
    match config.limit {
        Limit::FixedLimit => config.stakes.small_bet.half_at_least_one(),
        Limit::NoLimit | Limit::PotLimit => config.stakes.small_bet,
    }
}

/// Минимальная ставка для no-limit / pot-limit.
pub fn min_bet(config: &HandConfig) -> Chips {
    if config.variant.is_stud() {
        config.stakes.small_bet
    } else {
        blind_amounts(config).1
    }
}

/// Фиксированный размер ставки улицы (fixed-limit).
pub fn fixed_bet_size(config: &HandConfig, street: Street) -> Chips {
    match street {
        Street::Preflop | Street::Flop | Street::ThirdStreet | Street::FourthStreet => config.stakes.small_bet,
        Street::Turn | Street::River | Street::FifthStreet | Street::SixthStreet | Street::SeventhStreet => {
            config.stakes.big_bet
        }
    }
}

/// С какого места начинать поиск первого ходящего на улице.
///
/// Префлоп – после большого блайнда, дальше – после баттона.
/// Стад: третья улица – после bring-in, дальше – лучшая открытая рука.
pub fn round_start_seat(config: &HandConfig, street: Street, seats: &[Seat], forced: &ForcedBets) -> SeatIndex {
    let after_button = next_seat(config.button, config.num_seats);
    if !config.variant.is_stud() {
        return match (street, forced.big_blind) {
            (Street::Preflop, Some((bb, _))) => next_seat(bb, config.num_seats),
            _ => after_button,
        };
    }

    if street == Street::ThirdStreet {
        if let Some((seat, _)) = forced.bring_in {
            return next_seat(seat, config.num_seats);
        }
        return after_button;
    }

    best_exposed_seat(config, seats).unwrap_or(after_button)
}

/// Место, которое ставит bring-in: младшая открытая карта
/// (в Razz – старшая, туз младший). Ничью решает масть.
fn bring_in_seat(config: &HandConfig, seats: &[Seat]) -> Option<SeatIndex> {
    let up_cards = seats
        .iter()
        .filter(|s| s.is_contesting())
        .filter_map(|s| s.exposed_cards().first().map(|c| (s.position, *c)));

    match config.variant {
        Variant::Razz => up_cards
            .max_by_key(|(_, c)| razz_key(c))
            .map(|(seat, _)| seat),
        _ => up_cards.min_by_key(|(_, c)| *c).map(|(seat, _)| seat),
    }
}

fn razz_key(card: &Card) -> (u8, Suit) {
    (card.rank.value(RankOrdering::AceLow), card.suit)
}

/// Лучшая открытая рука (Razz – лучшее лоу). При равенстве – ближайшее
/// по часовой место после баттона.
fn best_exposed_seat(config: &HandConfig, seats: &[Seat]) -> Option<SeatIndex> {
    let mode = match config.variant {
        Variant::Razz => EvalMode::ACE_TO_FIVE_LOW,
        _ => EvalMode::HIGH,
    };

    let mut best: Option<(SeatIndex, Hand)> = None;
    for seat_idx in clockwise_after(config.button, config.num_seats) {
        let Some(seat) = seats.get(seat_idx as usize) else {
            continue;
        };
        if !seat.is_contesting() {
            continue;
        }
        let hand = evaluate(&seat.exposed_cards(), mode);
        let better = match &best {
            None => true,
            Some((_, current)) if mode.low => hand.compare(current).is_lt(),
            Some((_, current)) => hand.compare(current).is_gt(),
        };
        if better {
            best = Some((seat_idx, hand));
        }
    }
    best.map(|(seat, _)| seat)
}

fn is_dealt_in(seats: &[Seat], seat: SeatIndex) -> bool {
    seats
        .get(seat as usize)
        .map_or(false, |s| s.is_contesting())
}
