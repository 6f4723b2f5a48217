//! Покерный движок: банк, сайд-поты, выплаты, машина состояний ставок.
//!
//! Высокоуровневый объект: `HandEngine`
//! Основные операции:
//!   - `HandEngine::start` – запустить новую раздачу
//!   - `HandEngine::apply_action` – применить действие игрока
//!   - `HandEngine::step` – спросить `Actor` и применить его ответ

pub mod actions;
pub mod betting;
pub mod errors;
pub mod game_loop;
pub mod hand_history;
pub mod limits;
pub mod payout;
pub mod positions;
pub mod pot;
pub mod side_pots;
pub mod validation;

pub use actions::{ActionContext, ActionType, Actor, PlayerAction, PlayerActionKind};
pub use errors::EngineError;
pub use game_loop::{HandEngine, HandStatus, Step};
pub use hand_history::{ForcedBetKind, HandEvent, HandEventKind, HandHistory};
pub use pot::Pot;
pub use side_pots::{compute_side_pots, SidePot};

/// RNG интерфейс для дилера.
/// Реализации – в infra (обёртки над `rand`).
pub trait RandomSource {
    fn shuffle<T>(&mut self, slice: &mut [T]);
}
