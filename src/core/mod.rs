//! Core randomness shared by generation, gameplay helpers and layout.
//!
//! - `DeckRng`: Stream RNG for the cosmetic shuffle and card picking
//! - `SeededRandom`: Keyed scalars for reproducible layout geometry

pub mod rng;
pub mod seeded;

pub use rng::DeckRng;
pub use seeded::{ScalarSource, SeededRandom};
