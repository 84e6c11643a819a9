//! A single card.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::symbols::Symbol;

/// Identifier of a card within a set.
///
/// Generated sets number their cards `1..=card_count` in construction order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// A card: an id and the symbols printed on it.
///
/// Symbol order is display-only. Two cards with the same symbols in a
/// different order are the same card as far as validation is concerned.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub symbols: Vec<Symbol>,
}

impl Card {
    /// Create a card.
    pub fn new(id: CardId, symbols: Vec<Symbol>) -> Self {
        Self { id, symbols }
    }

    /// Number of symbols on the card.
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Check if the card has no symbols.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Symbol ids in display order.
    #[must_use]
    pub fn symbol_ids(&self) -> SmallVec<[&str; 8]> {
        self.symbols.iter().map(|s| s.id.as_str()).collect()
    }

    /// Check whether a symbol with `symbol_id` is on this card.
    #[must_use]
    pub fn contains(&self, symbol_id: &str) -> bool {
        self.symbols.iter().any(|s| s.id == symbol_id)
    }

    /// Symbols this card shares with `other`, compared by id.
    ///
    /// Duplicate ids on this card are reported once.
    #[must_use]
    pub fn common_symbols<'a>(&'a self, other: &Card) -> SmallVec<[&'a Symbol; 8]> {
        let mut common: SmallVec<[&Symbol; 8]> = SmallVec::new();
        for symbol in &self.symbols {
            if other.contains(&symbol.id) && !common.iter().any(|s| s.id == symbol.id) {
                common.push(symbol);
            }
        }
        common
    }
}
