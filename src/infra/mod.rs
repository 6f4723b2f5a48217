//! Инфраструктура вокруг движка: RNG-реализации для дилера.

pub mod rng;

pub use rng::*;
