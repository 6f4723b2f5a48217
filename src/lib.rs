//! Движок правил и расчётов покерной раздачи.
//!
//! Слои:
//!   - `domain`  – карты, фишки, места, конфиг раздачи;
//!   - `eval`    – оценка 5-карточных рук (high / low, Omaha 2+3);
//!   - `variant` – правила конкретной игры (Hold'em, Omaha, Stud, Razz);
//!   - `engine`  – банк, сайд-поты, выплаты и машина состояний ставок;
//!   - `infra`   – RNG-реализации для дилера.

pub mod domain;
pub mod engine;
pub mod eval;
pub mod infra;
pub mod variant;
