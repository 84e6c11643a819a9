//! Error types for the engine.
//!
//! Only caller-contract violations surface here. Structural problems found
//! while checking a card set are reported through `ValidationReport` and only
//! become an `EngineError` when a caller asks for it via
//! `ValidationReport::into_result`.

use thiserror::Error;

use crate::cards::CardId;
use crate::plane::OrderSearch;
use crate::validation::PairDeviation;

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;

/// Errors that can occur while building, checking or exchanging card sets.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("order {order} is not supported (supported orders: 2, 3, 4, 5, 7)")]
    UnsupportedOrder { order: u32 },

    #[error("{symbol_count} symbols do not form a supported projective plane{}", describe_suggestion(.suggestion))]
    SizeMismatch {
        symbol_count: usize,
        suggestion: OrderSearch,
    },

    #[error("card set violates the one-common-symbol rule in {} pair(s)", .deviations.len())]
    InvalidCardSet { deviations: Vec<PairDeviation> },

    #[error("at least {required} cards are required, got {available}")]
    InsufficientCards { required: usize, available: usize },

    #[error("{card} references unknown symbol '{symbol_id}'")]
    UnknownSymbolReference { card: CardId, symbol_id: String },

    #[error("symbol id '{id}' collides with '{existing}' (symbol ids are case-insensitive)")]
    DuplicateSymbolId { id: String, existing: String },

    #[error("unsupported export version '{found}' (expected '{expected}')")]
    UnsupportedVersion { found: String, expected: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("snapshot error: {0}")]
    Snapshot(#[from] bincode::Error),
}

fn describe_suggestion(suggestion: &OrderSearch) -> String {
    match (&suggestion.smaller, &suggestion.larger) {
        (Some(smaller), Some(larger)) => format!(
            "; remove {} for order {} or add {} for order {}",
            smaller.to_remove, smaller.order, larger.to_add, larger.order
        ),
        (Some(smaller), None) => {
            format!("; remove {} for order {}", smaller.to_remove, smaller.order)
        }
        (None, Some(larger)) => format!("; add {} for order {}", larger.to_add, larger.order),
        (None, None) => String::new(),
    }
}
