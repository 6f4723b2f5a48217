use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::SeatIndex;
use crate::engine::errors::EngineError;

pub type PlayerId = u64;

/// Игрок, сидящий за столом между раздачами.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeatedPlayer {
    pub player_id: PlayerId,
    pub stack: Chips,
}

/// Рассадка и бай-ины. Живёт вне раздачи и отдаёт движку стеки по местам.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Seating {
    pub seats: Vec<Option<SeatedPlayer>>,
    pub min_buy_in: Chips,
    pub max_buy_in: Chips,
}

impl Seating {
    pub fn new(num_seats: u8, min_buy_in: Chips, max_buy_in: Chips) -> Self {
        Self {
            seats: vec![None; num_seats as usize],
            min_buy_in,
            max_buy_in,
        }
    }

    /// Посадить игрока на место с бай-ином.
    pub fn sit(&mut self, player_id: PlayerId, seat: SeatIndex, buy_in: Chips) -> Result<(), EngineError> {
        let idx = seat as usize;
        if idx >= self.seats.len() {
            return Err(EngineError::InvalidSeat(seat));
        }
        if self.seats[idx].is_some() {
            return Err(EngineError::SeatOccupied(seat));
        }
        if self.seat_of(player_id).is_some() {
            return Err(EngineError::AlreadySeated(player_id));
        }
        if buy_in < self.min_buy_in || buy_in > self.max_buy_in {
            return Err(EngineError::InvalidBuyIn {
                amount: buy_in,
                min: self.min_buy_in,
                max: self.max_buy_in,
            });
        }

        self.seats[idx] = Some(SeatedPlayer {
            player_id,
            stack: buy_in,
        });
        Ok(())
    }

    /// Встать из-за стола. Возвращает игрока с его стеком.
    pub fn stand(&mut self, seat: SeatIndex) -> Result<SeatedPlayer, EngineError> {
        self.seats
            .get_mut(seat as usize)
            .ok_or(EngineError::InvalidSeat(seat))?
            .take()
            .ok_or(EngineError::InvalidSeat(seat))
    }

    pub fn seat_of(&self, player_id: PlayerId) -> Option<SeatIndex> {
        self.seats
            .iter()
            .position(|s| s.as_ref().map_or(false, |p| p.player_id == player_id))
            .map(|i| i as SeatIndex)
    }

    pub fn seated_count(&self) -> usize {
        self.seats.iter().filter(|s| s.is_some()).count()
    }

    /// Стеки по местам для `HandEngine::start` (пустое место = 0 фишек).
    pub fn stacks(&self) -> Vec<Chips> {
        self.seats
            .iter()
            .map(|s| s.as_ref().map_or(Chips::ZERO, |p| p.stack))
            .collect()
    }

    /// Записать стеки после раздачи.
    pub fn apply_stacks(&mut self, stacks: &[Chips]) {
        for (slot, stack) in self.seats.iter_mut().zip(stacks) {
            if let Some(p) = slot.as_mut() {
                p.stack = *stack;
            }
        }
    }
}
