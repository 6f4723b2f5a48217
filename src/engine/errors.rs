use crate::domain::card::ParseCardError;
use crate::domain::chips::Chips;
use crate::domain::seating::PlayerId;
use crate::domain::SeatIndex;
use crate::engine::actions::ActionType;

use thiserror::Error;

/// Ошибки движка покера.
///
/// Любая ошибка означает отклонённую операцию: состояние раздачи не менялось.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("Действие {action} сейчас недопустимо, допустимы: {legal:?}")]
    InvalidAction {
        action: ActionType,
        legal: Vec<ActionType>,
    },

    #[error("Недопустимый размер ставки {amount}: допустимо от {min} до {max}")]
    InvalidBetAmount { amount: Chips, min: Chips, max: Chips },

    #[error("Недопустимый размер рейза {amount}: допустимо от {min} до {max}")]
    InvalidRaiseAmount { amount: Chips, min: Chips, max: Chips },

    #[error("Недостаточно игроков для раздачи: {0}, нужно хотя бы 2")]
    InsufficientPlayers(usize),

    #[error("Место {0} не существует за столом")]
    InvalidSeat(SeatIndex),

    #[error("Место {0} уже занято")]
    SeatOccupied(SeatIndex),

    #[error("Игрок {0} уже сидит за столом")]
    AlreadySeated(PlayerId),

    #[error("Недопустимый бай-ин {amount}: допустимо от {min} до {max}")]
    InvalidBuyIn { amount: Chips, min: Chips, max: Chips },

    #[error("Не удалось разобрать карту: {0}")]
    MalformedCardText(#[from] ParseCardError),

    #[error("Сейчас не ход места {0}")]
    NotPlayersTurn(SeatIndex),

    #[error("Раздача уже завершена")]
    HandComplete,

    #[error("В колоде не хватает карт: нужно {needed}, осталось {available}")]
    DeckExhausted { needed: usize, available: usize },

    #[error("Некорректный конфиг: {0}")]
    InvalidConfig(String),

    #[error("Внутренняя ошибка: {0}")]
    Internal(&'static str),
}
