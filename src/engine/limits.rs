use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::seat::Seat;
use crate::domain::table::{HandConfig, Limit};
use crate::engine::betting::BettingState;
use crate::variant::{fixed_bet_size, min_bet};

/// Допустимый размер ставки/рейза сверх колла.
///
/// Сумма, ровно уводящая место в all-in, допустима и ниже `min`,
/// но никогда выше `max`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct IncrementBounds {
    pub min: Chips,
    pub max: Chips,
    /// Весь стек после колла.
    pub all_in: Chips,
}

impl IncrementBounds {
    pub fn allows(&self, increment: Chips) -> bool {
        if increment.is_zero() || increment > self.max {
            return false;
        }
        increment >= self.min || increment == self.all_in
    }
}

/// Границы повышения для места по правилам лимита.
pub fn increment_bounds(config: &HandConfig, betting: &BettingState, seat: &Seat, pot_total: Chips) -> IncrementBounds {
    let owed = betting.owed(seat);
    let all_in = seat.stack.saturating_sub(owed);

    let (min, limit_max) = match config.limit {
        Limit::NoLimit => (betting.last_raise.max(min_bet(config)), all_in),
        Limit::PotLimit => (betting.last_raise.max(min_bet(config)), pot_total + owed),
        Limit::FixedLimit => {
            let size = fixed_bet_size(config, betting.street);
            // в стаде bring-in дополняется ровно до малой ставки
            let step = if config.variant.is_stud() && betting.current_bet < size {
                size - betting.current_bet
            } else {
                size
            };
            (step, step)
        }
    };

    let max = limit_max.min(all_in);
    IncrementBounds {
        min: min.min(max),
        max,
        all_in,
    }
}
