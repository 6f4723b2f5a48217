//! Action tests для poker-rules.
//!
//! Проверяем:
//! - набор допустимых действий в зависимости от долга и стека;
//! - сброс acted после повышения ставки;
//! - опцию большого блайнда;
//! - границы ставок no-limit / pot-limit / fixed-limit;
//! - all-in на остаток ниже минимального рейза.

use poker_rules::domain::{
    chips::Chips,
    deck::{Deck, FixedDealer},
    hand::Street,
    table::{HandConfig, Limit, Stakes},
    SeatIndex,
};
use poker_rules::engine::{
    ActionType, EngineError, HandEngine, HandStatus, PlayerAction, PlayerActionKind,
};
use poker_rules::variant::Variant;

fn config(limit: Limit, small: u64, big: u64, seats: u8, button: SeatIndex) -> HandConfig {
    HandConfig::new(
        Variant::Holdem,
        limit,
        Stakes::new(Chips(small), Chips(big), Chips(0)),
        seats,
        button,
    )
}

fn engine_with(config: HandConfig, stacks: &[u64]) -> HandEngine<FixedDealer> {
    let stacks: Vec<Chips> = stacks.iter().map(|s| Chips(*s)).collect();
    HandEngine::start(config, &stacks, FixedDealer::new(Deck::standard_52().cards))
        .expect("раздача должна стартовать")
}

fn act(engine: &mut HandEngine<FixedDealer>, seat: SeatIndex, kind: PlayerActionKind) -> HandStatus {
    engine
        .apply_action(PlayerAction::new(seat, kind))
        .unwrap_or_else(|e| panic!("действие {kind:?} места {seat} отклонено: {e}"))
}

// ===== LEGAL ACTIONS =====

#[test]
fn facing_a_bet_with_chips_behind() {
    let engine = engine_with(config(Limit::NoLimit, 1, 2, 3, 0), &[100, 100, 100]);

    assert_eq!(engine.current_actor, Some(0), "Первым ходит место после BB");
    assert_eq!(
        engine.legal_actions(),
        vec![ActionType::Fold, ActionType::Call, ActionType::Raise, ActionType::AllIn]
    );
    let ctx = engine.action_context().unwrap();
    assert_eq!(ctx.owed, Chips(2));
    assert_eq!(ctx.pot, Chips(3));
    assert_eq!(ctx.min_increment, Chips(2));
    assert_eq!(ctx.max_increment, Chips(98));
}

#[test]
fn owing_whole_stack_leaves_fold_or_call() {
    let engine = engine_with(config(Limit::NoLimit, 1, 2, 3, 0), &[2, 100, 100]);
    assert_eq!(engine.legal_actions(), vec![ActionType::Fold, ActionType::Call]);
}

#[test]
fn big_blind_keeps_option_after_calls() {
    let mut engine = engine_with(config(Limit::NoLimit, 1, 2, 3, 0), &[100, 100, 100]);

    act(&mut engine, 0, PlayerActionKind::Call);
    act(&mut engine, 1, PlayerActionKind::Call);

    assert_eq!(engine.current_actor, Some(2));
    assert_eq!(
        engine.legal_actions(),
        vec![ActionType::Fold, ActionType::Check, ActionType::Bet, ActionType::AllIn]
    );
    assert_eq!(engine.street(), Street::Preflop);
}

#[test]
fn heads_up_button_posts_small_blind_and_acts_first() {
    let engine = engine_with(config(Limit::NoLimit, 1, 2, 2, 0), &[100, 100]);

    assert_eq!(engine.seats[0].round_bet, Chips(1), "Баттон ставит малый блайнд");
    assert_eq!(engine.seats[1].round_bet, Chips(2));
    assert_eq!(engine.current_actor, Some(0));
}

#[test]
fn raise_reopens_action_for_players_who_acted() {
    let mut engine = engine_with(config(Limit::NoLimit, 1, 2, 3, 0), &[100, 100, 100]);

    act(&mut engine, 0, PlayerActionKind::Call);
    act(&mut engine, 1, PlayerActionKind::Raise(Chips(2)));
    assert_eq!(engine.betting.current_bet, Chips(4));
    act(&mut engine, 2, PlayerActionKind::Call);

    assert_eq!(engine.current_actor, Some(0), "После рейза место 0 должно ответить");
    assert_eq!(engine.action_context().unwrap().owed, Chips(2));

    act(&mut engine, 0, PlayerActionKind::Call);
    assert_eq!(engine.street(), Street::Flop);
    assert_eq!(engine.board.len(), 3);
    assert_eq!(engine.pot.total(), Chips(12));
}

#[test]
fn check_and_call_do_not_reset_other_seats() {
    let mut engine = engine_with(config(Limit::NoLimit, 1, 2, 3, 0), &[100, 100, 100]);
    act(&mut engine, 0, PlayerActionKind::Call);
    act(&mut engine, 1, PlayerActionKind::Call);
    act(&mut engine, 2, PlayerActionKind::Check);

    // флоп: ходит первое место после баттона
    assert_eq!(engine.current_actor, Some(1));
    act(&mut engine, 1, PlayerActionKind::Check);
    act(&mut engine, 2, PlayerActionKind::Check);
    assert!(engine.seats[1].acted);
    assert_eq!(engine.current_actor, Some(0));
}

// ===== NO LIMIT =====

#[test]
fn no_limit_min_raise_follows_last_raise() {
    let mut engine = engine_with(config(Limit::NoLimit, 1, 2, 3, 0), &[100, 100, 100]);

    act(&mut engine, 0, PlayerActionKind::Raise(Chips(6)));
    assert_eq!(engine.betting.last_raise, Chips(6));

    let err = engine
        .apply_action(PlayerAction::new(1, PlayerActionKind::Raise(Chips(5))))
        .unwrap_err();
    assert_eq!(
        err,
        EngineError::InvalidRaiseAmount {
            amount: Chips(5),
            min: Chips(6),
            max: Chips(92),
        }
    );
    act(&mut engine, 1, PlayerActionKind::Raise(Chips(6)));
}

#[test]
fn all_in_short_of_min_raise_is_accepted() {
    let mut engine = engine_with(config(Limit::NoLimit, 1, 2, 3, 0), &[3, 100, 100]);

    // долг 2, после колла остаётся 1 – меньше минимума, но это весь стек
    act(&mut engine, 0, PlayerActionKind::Raise(Chips(1)));
    assert!(engine.seats[0].all_in);
    assert_eq!(engine.betting.current_bet, Chips(3));
    assert_eq!(engine.betting.last_raise, Chips(2), "Неполный рейз не меняет минимум");
}

#[test]
fn bet_below_minimum_is_rejected() {
    let mut engine = engine_with(config(Limit::NoLimit, 5, 10, 2, 0), &[200, 200]);
    act(&mut engine, 0, PlayerActionKind::Call);
    act(&mut engine, 1, PlayerActionKind::Check);

    assert_eq!(engine.current_actor, Some(1));
    let err = engine
        .apply_action(PlayerAction::new(1, PlayerActionKind::Bet(Chips(5))))
        .unwrap_err();
    assert!(matches!(err, EngineError::InvalidBetAmount { min: Chips(10), .. }));
    act(&mut engine, 1, PlayerActionKind::Bet(Chips(10)));
}

// ===== POT LIMIT =====

#[test]
fn pot_limit_caps_raise_at_pot_after_call() {
    let mut engine = engine_with(config(Limit::PotLimit, 1, 2, 3, 0), &[100, 100, 100]);

    // банк 3, долг 2 → максимум повышения 5
    assert_eq!(engine.action_context().unwrap().max_increment, Chips(5));

    let err = engine
        .apply_action(PlayerAction::new(0, PlayerActionKind::Raise(Chips(6))))
        .unwrap_err();
    assert!(matches!(err, EngineError::InvalidRaiseAmount { max: Chips(5), .. }));

    let all_in = engine
        .apply_action(PlayerAction::new(0, PlayerActionKind::AllIn))
        .unwrap_err();
    assert!(matches!(all_in, EngineError::InvalidRaiseAmount { amount: Chips(98), .. }));

    act(&mut engine, 0, PlayerActionKind::Raise(Chips(5)));
    assert_eq!(engine.betting.current_bet, Chips(7));
}

// ===== FIXED LIMIT =====

#[test]
fn fixed_limit_halves_blinds_and_fixes_sizes() {
    let mut engine = engine_with(config(Limit::FixedLimit, 2, 4, 3, 0), &[100, 100, 100]);

    assert_eq!(engine.seats[1].round_bet, Chips(1));
    assert_eq!(engine.seats[2].round_bet, Chips(2));

    let err = engine
        .apply_action(PlayerAction::new(0, PlayerActionKind::Raise(Chips(3))))
        .unwrap_err();
    assert_eq!(
        err,
        EngineError::InvalidRaiseAmount {
            amount: Chips(3),
            min: Chips(2),
            max: Chips(2),
        }
    );

    act(&mut engine, 0, PlayerActionKind::Raise(Chips(2)));
    act(&mut engine, 1, PlayerActionKind::Call);
    act(&mut engine, 2, PlayerActionKind::Call);

    // флоп – малая ставка, тёрн – большая
    assert_eq!(engine.street(), Street::Flop);
    assert_eq!(engine.action_context().unwrap().min_increment, Chips(2));
    for seat in [1, 2, 0] {
        act(&mut engine, seat, PlayerActionKind::Check);
    }
    assert_eq!(engine.street(), Street::Turn);
    let ctx = engine.action_context().unwrap();
    assert_eq!((ctx.min_increment, ctx.max_increment), (Chips(4), Chips(4)));
}

#[test]
fn empty_button_seat_blinds_in_engine() {
    let mut engine = engine_with(config(Limit::NoLimit, 1, 2, 4, 0), &[0, 100, 100, 100]);

    assert_eq!(engine.seats[1].round_bet, Chips(1), "SB – первое место после баттона");
    assert_eq!(engine.seats[2].round_bet, Chips(2));
    assert_eq!(engine.current_actor, Some(3));

    act(&mut engine, 3, PlayerActionKind::Call);
    act(&mut engine, 1, PlayerActionKind::Call);
    act(&mut engine, 2, PlayerActionKind::Check);
    assert_eq!(engine.street(), Street::Flop);
    assert_eq!(engine.current_actor, Some(1));
}

#[test]
fn fixed_limit_stud_completion_reaches_small_bet() {
    use poker_rules::domain::card::parse_cards;

    let config = HandConfig::new(
        Variant::StudHi,
        Limit::FixedLimit,
        Stakes::new(Chips(2), Chips(4), Chips(0)),
        3,
        0,
    );
    // открытые: место 1 – Kc, место 2 – 5d, место 0 – 2h (bring-in)
    let mut cards = parse_cards("As Ks Qs Ad Kd Qd Kc 5d 2h").unwrap();
    let rest: Vec<_> = Deck::standard_52().cards.into_iter().filter(|c| !cards.contains(c)).collect();
    cards.extend(rest);
    let mut engine = HandEngine::start(config, &[Chips(100); 3], FixedDealer::new(cards)).unwrap();

    assert_eq!(engine.betting.current_bet, Chips(1));
    let ctx = engine.action_context().unwrap();
    assert_eq!((ctx.min_increment, ctx.max_increment), (Chips(1), Chips(1)));

    let err = engine
        .apply_action(PlayerAction::new(1, PlayerActionKind::Raise(Chips(2))))
        .unwrap_err();
    assert!(matches!(err, EngineError::InvalidRaiseAmount { min: Chips(1), max: Chips(1), .. }));

    act(&mut engine, 1, PlayerActionKind::Raise(Chips(1)));
    assert_eq!(engine.betting.current_bet, Chips(2), "Дополнение до малой ставки");

    // следующий рейз – на полную малую ставку
    let ctx = engine.action_context().unwrap();
    assert_eq!((ctx.min_increment, ctx.max_increment), (Chips(2), Chips(2)));
}
