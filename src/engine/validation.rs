use crate::domain::chips::Chips;
use crate::domain::seat::Seat;
use crate::domain::table::HandConfig;
use crate::engine::actions::{ActionType, PlayerActionKind};
use crate::engine::betting::BettingState;
use crate::engine::errors::EngineError;
use crate::engine::limits::increment_bounds;

/// Допустимые действия места при текущем состоянии ставок.
pub fn legal_actions(seat: &Seat, betting: &BettingState) -> Vec<ActionType> {
    if !seat.can_act() {
        return Vec::new();
    }

    let owed = betting.owed(seat);
    if owed.is_zero() {
        vec![ActionType::Fold, ActionType::Check, ActionType::Bet, ActionType::AllIn]
    } else if owed >= seat.stack {
        // call здесь – это all-in на остаток
        vec![ActionType::Fold, ActionType::Call]
    } else {
        vec![ActionType::Fold, ActionType::Call, ActionType::Raise, ActionType::AllIn]
    }
}

/// Проверка, может ли место выполнить это действие. Ничего не меняет.
pub fn validate_action(
    config: &HandConfig,
    seat: &Seat,
    action: &PlayerActionKind,
    betting: &BettingState,
    pot_total: Chips,
) -> Result<(), EngineError> {
    let legal = legal_actions(seat, betting);
    if !legal.contains(&action.action_type()) {
        return Err(EngineError::InvalidAction {
            action: action.action_type(),
            legal,
        });
    }

    let bounds = increment_bounds(config, betting, seat, pot_total);
    let out_of_range = |amount: Chips, is_raise: bool| {
        if is_raise {
            EngineError::InvalidRaiseAmount {
                amount,
                min: bounds.min,
                max: bounds.max,
            }
        } else {
            EngineError::InvalidBetAmount {
                amount,
                min: bounds.min,
                max: bounds.max,
            }
        }
    };

    match action {
        PlayerActionKind::Fold | PlayerActionKind::Check | PlayerActionKind::Call => Ok(()),

        PlayerActionKind::Bet(amount) => {
            if bounds.allows(*amount) {
                Ok(())
            } else {
                Err(out_of_range(*amount, false))
            }
        }

        PlayerActionKind::Raise(amount) => {
            if bounds.allows(*amount) {
                Ok(())
            } else {
                Err(out_of_range(*amount, true))
            }
        }

        PlayerActionKind::AllIn => {
            // all-in не может нарушить максимум pot-limit / fixed-limit
            if bounds.all_in <= bounds.max {
                Ok(())
            } else {
                let is_raise = !betting.owed(seat).is_zero();
                Err(out_of_range(bounds.all_in, is_raise))
            }
        }
    }
}
