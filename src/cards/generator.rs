//! Card set generation from a symbol catalog.
//!
//! The catalog size selects the plane order; the order selects a registered
//! construction; each pattern becomes one card. A catalog whose size matches
//! no supported order is reported as `SizeMismatch`, never padded or trimmed.

use serde::{Deserialize, Serialize};

use super::card::{Card, CardId};
use super::patterns::construction_for;
use super::set::CardSet;
use crate::core::DeckRng;
use crate::error::{EngineError, Result};
use crate::plane::{best_order_for, PlaneOrder};
use crate::symbols::{Symbol, SymbolCatalog};

/// Generator configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Shuffle symbol order within each card for display variety.
    pub shuffle_symbols: bool,

    /// Seed for the cosmetic shuffle. `None` seeds from entropy.
    pub shuffle_seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            shuffle_symbols: true,
            shuffle_seed: None,
        }
    }
}

impl GeneratorConfig {
    /// Use a fixed seed for the cosmetic shuffle.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.shuffle_seed = Some(seed);
        self
    }

    /// Keep symbols in construction order.
    #[must_use]
    pub fn without_shuffle(mut self) -> Self {
        self.shuffle_symbols = false;
        self
    }
}

/// Builds card sets satisfying the one-common-symbol property.
///
/// ## Example
///
/// ```
/// use dobble_engine::cards::{CardSetGenerator, GeneratorConfig};
/// use dobble_engine::symbols::{Symbol, SymbolCatalog};
///
/// let catalog: SymbolCatalog = (0..7)
///     .map(|i| Symbol::new(format!("s{i}"), format!("Symbol {i}"), "#333"))
///     .collect();
///
/// let generator = CardSetGenerator::new(GeneratorConfig::default().with_seed(1));
/// let set = generator.generate(&catalog).unwrap();
///
/// assert_eq!(set.len(), 7);
/// assert!(set.iter().all(|card| card.len() == 3));
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardSetGenerator {
    config: GeneratorConfig,
}

impl CardSetGenerator {
    /// Create a generator with the given configuration.
    #[must_use]
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// The generator configuration.
    #[must_use]
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate the full card set for `catalog`.
    pub fn generate(&self, catalog: &SymbolCatalog) -> Result<CardSet> {
        let mut rng = match self.config.shuffle_seed {
            Some(seed) => DeckRng::new(seed),
            None => DeckRng::from_entropy(),
        };
        self.generate_with_rng(catalog, &mut rng)
    }

    /// Generate using a caller-supplied RNG for the cosmetic shuffle.
    pub fn generate_with_rng(&self, catalog: &SymbolCatalog, rng: &mut DeckRng) -> Result<CardSet> {
        let order = detect_order(catalog.len())?;
        let patterns = construction_for(order)(order);

        tracing::debug!(
            order = order.raw(),
            symbols = catalog.len(),
            cards = patterns.len(),
            "building card set"
        );

        let mut cards = Vec::with_capacity(patterns.len());
        for (position, pattern) in patterns.iter().enumerate() {
            let mut symbols: Vec<Symbol> = pattern
                .iter()
                .filter_map(|&index| catalog.symbol_at(index).cloned())
                .collect();
            debug_assert_eq!(symbols.len(), order.symbols_per_card());

            if self.config.shuffle_symbols {
                rng.shuffle(&mut symbols);
            }

            // Card counts are at most 57, so the id always fits.
            let id = CardId::new(position as u32 + 1);
            cards.push(Card::new(id, symbols));
        }

        Ok(CardSet::new(Some(order), cards))
    }
}

/// Generate a card set with the default configuration.
pub fn generate(catalog: &SymbolCatalog) -> Result<CardSet> {
    CardSetGenerator::default().generate(catalog)
}

fn detect_order(symbol_count: usize) -> Result<PlaneOrder> {
    PlaneOrder::for_symbol_count(symbol_count).ok_or_else(|| {
        let suggestion = best_order_for(i64::try_from(symbol_count).unwrap_or(i64::MAX));
        tracing::warn!(
            symbol_count,
            smaller = ?suggestion.smaller.map(|s| s.order),
            larger = ?suggestion.larger.map(|l| l.order),
            "symbol count matches no supported plane order"
        );
        EngineError::SizeMismatch {
            symbol_count,
            suggestion,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog(size: usize) -> SymbolCatalog {
        (0..size)
            .map(|i| Symbol::new(format!("sym{i}"), format!("Symbol {i}"), "#123456"))
            .collect()
    }

    #[test]
    fn test_generates_fano_plane() {
        let set = CardSetGenerator::new(GeneratorConfig::default().with_seed(3))
            .generate(&catalog(7))
            .unwrap();

        assert_eq!(set.order(), Some(PlaneOrder::Two));
        assert_eq!(set.len(), 7);
        let ids: Vec<_> = set.iter().map(|c| c.id.raw()).collect();
        assert_eq!(ids, (1..=7).collect::<Vec<_>>());
    }

    #[test]
    fn test_without_shuffle_keeps_construction_order() {
        let set = CardSetGenerator::new(GeneratorConfig::default().without_shuffle())
            .generate(&catalog(7))
            .unwrap();

        assert_eq!(set.cards[0].symbol_ids().as_slice(), &["sym0", "sym1", "sym2"]);
        assert_eq!(set.cards[6].symbol_ids().as_slice(), &["sym2", "sym4", "sym5"]);
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let generator = CardSetGenerator::new(GeneratorConfig::default().with_seed(99));
        let a = generator.generate(&catalog(13)).unwrap();
        let b = generator.generate(&catalog(13)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_shuffle_changes_display_order_only() {
        let plain = CardSetGenerator::new(GeneratorConfig::default().without_shuffle())
            .generate(&catalog(31))
            .unwrap();
        let shuffled = CardSetGenerator::new(GeneratorConfig::default().with_seed(5))
            .generate(&catalog(31))
            .unwrap();

        let mut any_reordered = false;
        for (a, b) in plain.iter().zip(shuffled.iter()) {
            let mut left = a.symbol_ids();
            let mut right = b.symbol_ids();
            any_reordered |= left != right;
            left.sort_unstable();
            right.sort_unstable();
            assert_eq!(left, right);
        }
        assert!(any_reordered);
    }

    #[test]
    fn test_size_mismatch_is_reported() {
        let err = generate(&catalog(20)).unwrap_err();
        match err {
            EngineError::SizeMismatch {
                symbol_count,
                suggestion,
            } => {
                assert_eq!(symbol_count, 20);
                assert_eq!(suggestion.smaller.map(|s| s.order), Some(3));
                assert_eq!(suggestion.larger.map(|l| l.order), Some(4));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_empty_catalog_is_a_mismatch() {
        assert!(matches!(
            generate(&SymbolCatalog::new()),
            Err(EngineError::SizeMismatch { symbol_count: 0, .. })
        ));
    }

    #[test]
    fn test_config_serialization() {
        let config = GeneratorConfig::default().with_seed(12);
        let json = serde_json::to_string(&config).unwrap();
        let back: GeneratorConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
