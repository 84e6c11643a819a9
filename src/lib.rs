//! # dobble-engine
//!
//! Card set construction, validation and symbol layout for Dobble-style
//! matching games.
//!
//! ## Design Principles
//!
//! 1. **One common symbol**: Cards are lines of a finite projective plane, so
//!    any two cards share exactly one symbol.
//!
//! 2. **Report, don't fabricate**: A catalog whose size matches no supported
//!    order is reported as `SizeMismatch` instead of producing a broken set.
//!
//! 3. **Reproducible geometry**: Layouts are pure functions of
//!    `(symbol_count, card_id)` and never touch a global random source.
//!
//! ## Modules
//!
//! - `plane`: Order arithmetic, supported orders, nearest-order search
//! - `symbols`: Symbols and the symbol catalog
//! - `cards`: Cards, card sets, per-order constructions, the generator
//! - `validation`: Pairwise and per-symbol invariant checks
//! - `layout`: Force-directed symbol placement and overlap diagnostics
//! - `export`: Versioned JSON exchange format
//! - `core`: Gameplay RNG and keyed scalar source
//!
//! ## Example
//!
//! ```
//! use dobble_engine::{
//!     validate, CardSetGenerator, GeneratorConfig, LayoutConfig, LayoutEngine, Symbol,
//!     SymbolCatalog,
//! };
//!
//! let catalog: SymbolCatalog = (0..13)
//!     .map(|i| Symbol::new(format!("s{i}"), format!("Symbol {i}"), "#444"))
//!     .collect();
//!
//! let set = CardSetGenerator::new(GeneratorConfig::default().with_seed(7))
//!     .generate(&catalog)
//!     .unwrap();
//! assert!(validate(&set).is_valid);
//!
//! let engine = LayoutEngine::new(LayoutConfig::default());
//! let geometry = engine.layout_card(&set.cards[0]);
//! assert_eq!(geometry.len(), 4);
//! ```

pub mod cards;
pub mod core;
pub mod error;
pub mod export;
pub mod layout;
pub mod plane;
pub mod symbols;
pub mod validation;

// Re-export commonly used types
pub use crate::error::{EngineError, Result};

pub use crate::core::{DeckRng, ScalarSource, SeededRandom};

pub use crate::plane::{
    best_order_for, is_supported_order, stats_for, supported_orders, OrderSearch, PlaneOrder,
    PlaneStats, SUPPORTED_ORDERS,
};

pub use crate::symbols::{Symbol, SymbolCatalog};

pub use crate::cards::{generate, Card, CardId, CardSet, CardSetGenerator, GeneratorConfig};

pub use crate::validation::{
    check_frequencies, validate, FrequencyReport, PairDeviation, ValidationReport, ValidationStats,
};

pub use crate::layout::{LayoutConfig, LayoutEngine, LayoutResult, SymbolLayout};

pub use crate::export::{export_json, import_json, ExportedCardSet, ImportedCardSet};
