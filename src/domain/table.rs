use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::SeatIndex;
use crate::engine::errors::EngineError;
use crate::variant::Variant;

/// Тип лимита ставок.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Limit {
    NoLimit,
    PotLimit,
    FixedLimit,
}

/// Стейки: малая и большая ставка плюс анте.
///
/// В no-limit / pot-limit малая и большая ставки – это SB/BB.
/// В fixed-limit – размеры ставок на ранних и поздних улицах,
/// блайнды тогда равны их половинам.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Stakes {
    pub small_bet: Chips,
    pub big_bet: Chips,
    #[serde(default)]
    pub ante: Chips,
}

impl Stakes {
    pub fn new(small_bet: Chips, big_bet: Chips, ante: Chips) -> Self {
        Self {
            small_bet,
            big_bet,
            ante,
        }
    }
}

/// Конфиг одной раздачи.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandConfig {
    pub variant: Variant,
    pub limit: Limit,
    pub stakes: Stakes,
    pub num_seats: u8,
    pub button: SeatIndex,
}

impl HandConfig {
    pub fn new(variant: Variant, limit: Limit, stakes: Stakes, num_seats: u8, button: SeatIndex) -> Self {
        Self {
            variant,
            limit,
            stakes,
            num_seats,
            button,
        }
    }

    /// Прочитать конфиг из JSON и сразу проверить его.
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        let config: HandConfig =
            serde_json::from_str(json).map_err(|e| EngineError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, EngineError> {
        serde_json::to_string(self).map_err(|e| EngineError::InvalidConfig(e.to_string()))
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        let max = self.variant.max_seats();
        if self.num_seats < 2 || self.num_seats > max {
            return Err(EngineError::InvalidConfig(format!(
                "HandConfig: num_seats = {}, допустимо 2..={} для {}",
                self.num_seats, max, self.variant
            )));
        }
        if self.button >= self.num_seats {
            return Err(EngineError::InvalidConfig(format!(
                "HandConfig: button = {} вне стола из {} мест",
                self.button, self.num_seats
            )));
        }
        if self.stakes.small_bet.is_zero() {
            return Err(EngineError::InvalidConfig("HandConfig: small_bet = 0".into()));
        }
        if self.stakes.big_bet < self.stakes.small_bet {
            return Err(EngineError::InvalidConfig(format!(
                "HandConfig: big_bet ({}) < small_bet ({})",
                self.stakes.big_bet, self.stakes.small_bet
            )));
        }
        Ok(())
    }
}
