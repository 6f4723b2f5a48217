use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::hand::Street;
use crate::domain::seat::Seat;
use crate::domain::SeatIndex;

/// Состояние раунда ставок (на конкретной улице).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct BettingState {
    /// Текущая целевая ставка, до которой должны дотянуться игроки (BB, bet, raise).
    pub current_bet: Chips,
    /// Последний полный размер повышения; минимум следующего рейза.
    pub last_raise: Chips,
    /// Seat последнего агрессора (bet/raise/all-in).
    pub last_aggressor: Option<SeatIndex>,
    /// Улица, к которой относится этот раунд.
    pub street: Street,
}

impl BettingState {
    pub fn new(street: Street, min_bet: Chips) -> Self {
        Self {
            current_bet: Chips::ZERO,
            last_raise: min_bet,
            last_aggressor: None,
            street,
        }
    }

    /// Сколько месту нужно доплатить до колла.
    pub fn owed(&self, seat: &Seat) -> Chips {
        self.current_bet.saturating_sub(seat.round_bet)
    }

    /// Учесть новую ставку места. Возвращает true, если ставка выросла
    /// (остальные должны ответить).
    pub fn on_contribution(&mut self, seat: SeatIndex, round_bet: Chips) -> bool {
        if round_bet <= self.current_bet {
            return false;
        }
        let increment = round_bet - self.current_bet;
        if increment >= self.last_raise {
            self.last_raise = increment;
        }
        self.current_bet = round_bet;
        self.last_aggressor = Some(seat);
        true
    }
}
