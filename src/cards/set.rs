//! Card sets and the gameplay queries over them.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::card::{Card, CardId};
use crate::core::DeckRng;
use crate::error::{EngineError, Result};
use crate::plane::PlaneOrder;
use crate::symbols::Symbol;

/// All cards produced for one catalog.
///
/// `order` is known for generated sets and for imported sets whose shape
/// matches a supported order; it is `None` otherwise.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardSet {
    pub order: Option<PlaneOrder>,
    pub cards: Vec<Card>,
}

impl CardSet {
    /// Create a card set.
    pub fn new(order: Option<PlaneOrder>, cards: Vec<Card>) -> Self {
        Self { order, cards }
    }

    /// Wrap cards and infer the order from their shape.
    ///
    /// The order is set only when the card count and the symbol count of the
    /// first card both match a supported order.
    pub fn from_cards(cards: Vec<Card>) -> Self {
        let order = cards.first().and_then(|first| {
            let n = u32::try_from(first.len().checked_sub(1)?).ok()?;
            let order = PlaneOrder::try_from(n).ok()?;
            (order.card_count() == cards.len()).then_some(order)
        });
        Self { order, cards }
    }

    /// The plane order, if known.
    #[must_use]
    pub fn order(&self) -> Option<PlaneOrder> {
        self.order
    }

    /// Get the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over cards in set order.
    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    /// Get a card by id.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.iter().find(|card| card.id == id)
    }

    /// The symbol shared by cards `a` and `b`.
    ///
    /// Returns `None` if either card is missing or they do not share exactly
    /// one symbol.
    #[must_use]
    pub fn common_symbol(&self, a: CardId, b: CardId) -> Option<&Symbol> {
        let (first, second) = (self.get(a)?, self.get(b)?);
        match first.common_symbols(second).as_slice() {
            [only] => Some(*only),
            _ => None,
        }
    }

    /// Number of cards each symbol id appears on.
    #[must_use]
    pub fn symbol_frequencies(&self) -> FxHashMap<&str, usize> {
        let mut frequencies = FxHashMap::default();
        for card in &self.cards {
            for id in card.symbol_ids() {
                *frequencies.entry(id).or_insert(0) += 1;
            }
        }
        frequencies
    }

    /// Pick two distinct cards at random.
    pub fn random_pair(&self, rng: &mut DeckRng) -> Result<(&Card, &Card)> {
        let available = self.cards.len();
        if available < 2 {
            return Err(EngineError::InsufficientCards {
                required: 2,
                available,
            });
        }

        let first = rng.gen_range_usize(0..available);
        let mut second = rng.gen_range_usize(0..available - 1);
        if second >= first {
            second += 1;
        }
        Ok((&self.cards[first], &self.cards[second]))
    }

    /// Pick a random card whose id differs from `exclude`.
    pub fn random_except(&self, rng: &mut DeckRng, exclude: CardId) -> Result<&Card> {
        let candidates: Vec<&Card> = self.cards.iter().filter(|c| c.id != exclude).collect();
        rng.choose(&candidates)
            .copied()
            .ok_or(EngineError::InsufficientCards {
                required: 1,
                available: 0,
            })
    }

    /// Encode the set as a compact binary snapshot.
    pub fn to_snapshot(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a set from `to_snapshot` output.
    pub fn from_snapshot(bytes: &[u8]) -> Result<Self> {
        Ok(bincode::deserialize(bytes)?)
    }
}

impl<'a> IntoIterator for &'a CardSet {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}
