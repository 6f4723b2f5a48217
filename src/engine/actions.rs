use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::hand::Street;
use crate::domain::seat::HoleCard;
use crate::domain::SeatIndex;

/// Тип действия без суммы – то, что перечисляется в списке допустимых.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ActionType {
    Fold,
    Check,
    Call,
    Bet,
    Raise,
    AllIn,
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ActionType::Fold => "fold",
            ActionType::Check => "check",
            ActionType::Call => "call",
            ActionType::Bet => "bet",
            ActionType::Raise => "raise",
            ActionType::AllIn => "all-in",
        };
        f.write_str(name)
    }
}

/// Действие игрока.
///
/// Суммы в `Bet` и `Raise` – фишки сверх колла:
/// `Raise(x)` ставит долг по коллу плюс `x`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum PlayerActionKind {
    Fold,
    Check,
    Call,
    /// Bet, когда доплачивать нечего.
    Bet(Chips),
    /// Raise существующей ставки.
    Raise(Chips),
    /// All-in – поставить весь стек.
    AllIn,
}

impl PlayerActionKind {
    pub fn action_type(&self) -> ActionType {
        match self {
            PlayerActionKind::Fold => ActionType::Fold,
            PlayerActionKind::Check => ActionType::Check,
            PlayerActionKind::Call => ActionType::Call,
            PlayerActionKind::Bet(_) => ActionType::Bet,
            PlayerActionKind::Raise(_) => ActionType::Raise,
            PlayerActionKind::AllIn => ActionType::AllIn,
        }
    }
}

/// Конкретное действие игрока.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerAction {
    /// В каком месте он сидит (0..num_seats-1).
    pub seat: SeatIndex,
    /// Само действие.
    pub kind: PlayerActionKind,
}

impl PlayerAction {
    pub fn new(seat: SeatIndex, kind: PlayerActionKind) -> Self {
        Self { seat, kind }
    }
}

/// Что видит ходящее место.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActionContext {
    pub seat: SeatIndex,
    pub street: Street,
    pub stack: Chips,
    /// Сколько нужно доплатить до колла.
    pub owed: Chips,
    /// Наибольшая ставка на улице.
    pub current_bet: Chips,
    pub pot: Chips,
    /// Границы ставки/рейза сверх колла по правилам лимита.
    pub min_increment: Chips,
    pub max_increment: Chips,
    pub hole_cards: Vec<HoleCard>,
    pub board: Vec<Card>,
}

/// Внешний игрок. Вызов блокирующий; движок не повторяет запрос,
/// если ответ недопустим, а возвращает ошибку.
pub trait Actor {
    fn act(&mut self, legal: &[ActionType], ctx: &ActionContext) -> PlayerActionKind;
}

impl<F> Actor for F
where
    F: FnMut(&[ActionType], &ActionContext) -> PlayerActionKind,
{
    fn act(&mut self, legal: &[ActionType], ctx: &ActionContext) -> PlayerActionKind {
        self(legal, ctx)
    }
}
