//! Тесты выплат банка.
//!
//! Проверяем:
//! - раздачу каждого сайд-пота своим победителям;
//! - закон остатка (лишние фишки – по часовой от баттона);
//! - деление hi/lo (хаю – большая половина, без лоу всё хаю);
//! - uncontested;
//! - сохранение фишек: сумма выплат == сумма вкладов.

use poker_rules::domain::card::parse_cards;
use poker_rules::domain::hand::{total_paid, Payout, Share};
use poker_rules::domain::{chips::Chips, seat::Seat, SeatIndex};
use poker_rules::engine::Pot;
use poker_rules::eval::{evaluate, Direction, EvalMode, Rankings};
use poker_rules::infra::DeterministicRng;

/// Банк, где каждое место внесло указанную сумму.
fn pot_with(button: SeatIndex, contributions: &[u64]) -> (Pot, Vec<Seat>) {
    let n = contributions.len() as u8;
    let mut pot = Pot::new(button, n);
    let mut seats: Vec<Seat> = contributions
        .iter()
        .enumerate()
        .map(|(i, c)| Seat::new(i as SeatIndex, Chips(*c + 1000)))
        .collect();
    for (seat, c) in seats.iter_mut().zip(contributions) {
        pot.contribute(seat, Chips(*c));
    }
    (pot, seats)
}

fn tiers(t: &[&[SeatIndex]]) -> Rankings {
    Rankings {
        tiers: t.iter().map(|tier| tier.to_vec()).collect(),
    }
}

fn won(payouts: &[Payout], seat: SeatIndex) -> u64 {
    payouts.iter().filter(|p| p.seat == seat).map(|p| p.chips.0).sum()
}

// ===== SINGLE WINNER / SPLIT =====

#[test]
fn single_winner_takes_everything() {
    let (pot, _) = pot_with(0, &[50, 50, 50]);
    let payouts = pot.payout(Some(&tiers(&[&[1], &[0, 2]])), None);

    assert_eq!(
        payouts,
        vec![Payout {
            seat: 1,
            chips: Chips(150),
            share: Share::WonHigh,
        }]
    );
}

#[test]
fn split_pot_remainder_goes_clockwise_after_button() {
    // 3 победителя делят 100: база 33, остаток 1
    let (pot, _) = pot_with(1, &[25, 25, 25, 25]);
    let payouts = pot.payout(Some(&tiers(&[&[0, 1, 3]])), None);

    // от баттона 1 по часовой: 2, 3, 0, 1 → лишняя фишка месту 3
    assert_eq!(won(&payouts, 3), 34);
    assert_eq!(won(&payouts, 0), 33);
    assert_eq!(won(&payouts, 1), 33);
    assert!(payouts.iter().all(|p| p.share == Share::SplitHigh));
    assert_eq!(total_paid(&payouts), Chips(100));
}

#[test]
fn remainder_law_for_random_splits() {
    let mut rng = DeterministicRng::from_u64(5);

    for _ in 0..200 {
        let n = 2 + rng.below(8) as u8;
        let button = rng.below(n as u64) as SeatIndex;
        let each = 1 + rng.below(50);
        let (pot, _) = pot_with(button, &vec![each; n as usize]);
        let amount = each * n as u64;

        let mut winners: Vec<SeatIndex> = (0..n).filter(|_| rng.below(2) == 0).collect();
        if winners.is_empty() {
            winners.push(0);
        }
        let payouts = pot.payout(Some(&tiers(&[&winners])), None);

        let k = winners.len() as u64;
        let r = (amount % k) as usize;
        let base = amount / k;

        // победители в порядке по часовой, начиная после баттона
        let mut ordered = winners.clone();
        ordered.sort_by_key(|&s| (s as usize + n as usize - button as usize - 1) % n as usize);

        for (i, seat) in ordered.iter().enumerate() {
            let expected = base + if i < r { 1 } else { 0 };
            assert_eq!(won(&payouts, *seat), expected, "Место {seat}, баттон {button}");
        }
        assert_eq!(total_paid(&payouts).0, amount);
    }
}

// ===== SIDE POTS =====

#[test]
fn short_stack_winner_only_takes_main_pot() {
    // 0 внёс 10, 1 – 20, 2 – 30. Лучшая рука у 0, потом 1, потом 2.
    let (pot, _) = pot_with(2, &[10, 20, 30]);
    let payouts = pot.payout(Some(&tiers(&[&[0], &[1], &[2]])), None);

    assert_eq!(won(&payouts, 0), 30);
    assert_eq!(won(&payouts, 1), 20);
    assert_eq!(won(&payouts, 2), 10, "Излишек возвращается единственному претенденту");
    assert_eq!(total_paid(&payouts), Chips(60));
}

#[test]
fn folded_seat_never_wins_even_with_best_ranking() {
    let (mut pot, mut seats) = pot_with(0, &[20, 20, 20]);
    pot.fold(&mut seats[1]);

    let payouts = pot.payout(Some(&tiers(&[&[1], &[2], &[0]])), None);
    assert_eq!(won(&payouts, 1), 0);
    assert_eq!(won(&payouts, 2), 60);
}

#[test]
fn dead_money_goes_to_live_seat_when_all_contributors_folded() {
    // вложилось только место 0, и оно сфолдило; место 1 в игре без вклада
    let (mut pot, mut seats) = pot_with(0, &[10, 0]);
    pot.fold(&mut seats[0]);

    let pots = pot.side_pots();
    assert_eq!(pots.len(), 1);
    assert!(pots[0].eligible_seats.is_empty());

    let payouts = pot.payout(Some(&tiers(&[&[1]])), None);
    assert_eq!(total_paid(&payouts), pot.total(), "Фишки не должны пропадать");
    assert_eq!(won(&payouts, 1), 10);
}

#[test]
fn dead_money_split_when_no_live_seat_is_ranked() {
    let (mut pot, mut seats) = pot_with(0, &[9, 0, 0]);
    pot.fold(&mut seats[0]);

    let payouts = pot.payout(Some(&Rankings::default()), None);
    assert_eq!(total_paid(&payouts), Chips(9));
    assert_eq!(won(&payouts, 1), 5, "Лишняя фишка – первому после баттона");
    assert_eq!(won(&payouts, 2), 4);
}

// ===== HIGH / LOW =====

#[test]
fn hi_lo_split_gives_odd_chip_to_high() {
    let (pot, _) = pot_with(0, &[11, 10, 0]);
    // банк 21: хай 11, лоу 10
    let payouts = pot.payout(Some(&tiers(&[&[0], &[1]])), Some(&tiers(&[&[1]])));

    assert!(payouts.contains(&Payout {
        seat: 0,
        chips: Chips(11),
        share: Share::WonHigh,
    }));
    assert!(payouts.contains(&Payout {
        seat: 1,
        chips: Chips(10),
        share: Share::WonLow,
    }));
}

#[test]
fn no_qualifying_low_rolls_to_high() {
    let (pot, _) = pot_with(0, &[30, 30]);
    let payouts = pot.payout(Some(&tiers(&[&[1], &[0]])), Some(&Rankings::default()));

    assert_eq!(
        payouts,
        vec![Payout {
            seat: 1,
            chips: Chips(60),
            share: Share::WonHigh,
        }]
    );
}

#[test]
fn scoop_high_and_low() {
    let (pot, _) = pot_with(0, &[15, 15]);
    let payouts = pot.payout(Some(&tiers(&[&[0], &[1]])), Some(&tiers(&[&[0]])));

    assert_eq!(won(&payouts, 0), 30);
    assert_eq!(won(&payouts, 1), 0);
}

#[test]
fn split_low_between_two_seats() {
    let (pot, _) = pot_with(2, &[20, 20, 20]);
    // хай 30 у места 2; лоу 30 делят 0 и 1
    let payouts = pot.payout(Some(&tiers(&[&[2], &[0, 1]])), Some(&tiers(&[&[0, 1], &[2]])));

    assert_eq!(won(&payouts, 2), 30);
    assert_eq!(won(&payouts, 0), 15);
    assert_eq!(won(&payouts, 1), 15);
    assert!(payouts.iter().any(|p| p.share == Share::SplitLow));
}

#[test]
fn low_only_game_pays_low_winners() {
    let (pot, _) = pot_with(0, &[5, 5, 5]);
    let payouts = pot.payout(None, Some(&tiers(&[&[2], &[0], &[1]])));

    assert_eq!(
        payouts,
        vec![Payout {
            seat: 2,
            chips: Chips(15),
            share: Share::WonLow,
        }]
    );
}

#[test]
fn rankings_from_real_hands() {
    let hands = vec![
        (0, evaluate(&parse_cards("A♠ A♦ 7♣ 4♥ 2♠").unwrap(), EvalMode::HIGH)),
        (1, evaluate(&parse_cards("K♠ K♦ 7♦ 4♣ 2♦").unwrap(), EvalMode::HIGH)),
        (2, evaluate(&parse_cards("A♣ A♥ 7♥ 4♦ 2♣").unwrap(), EvalMode::HIGH)),
    ];

    let high = Rankings::from_hands(&hands, Direction::High);
    assert_eq!(high.tiers, vec![vec![0, 2], vec![1]]);
    assert_eq!(high.winners_among(&[1, 2]), vec![2]);

    let low = Rankings::from_hands(&hands, Direction::Low);
    assert_eq!(low.tiers[0], vec![1]);
}

// ===== UNCONTESTED =====

#[test]
fn uncontested_takes_whole_pot() {
    let (pot, _) = pot_with(0, &[1, 2, 0]);
    assert_eq!(
        pot.uncontested(1),
        Payout {
            seat: 1,
            chips: Chips(3),
            share: Share::WonUncontested,
        }
    );
}
