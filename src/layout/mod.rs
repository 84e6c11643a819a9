//! Symbol placement on circular cards.
//!
//! ## Key Types
//!
//! - `LayoutConfig`: Card geometry and solver parameters
//! - `LayoutEngine`: Deterministic force-directed placement per card
//! - `SymbolLayout`: Position, scale and rotation of one symbol
//!
//! Layouts are rendering hints. They are recomputed from
//! `(symbol_count, card_id)` whenever needed and never stored on a card.

pub mod config;
pub mod diagnostics;
pub mod engine;

pub use config::LayoutConfig;
pub use diagnostics::{detect_collisions, survey, Collision, LayoutSurvey};
pub use engine::{LayoutEngine, LayoutResult, SymbolLayout};
