//! Versioned JSON document for card set exchange.
//!
//! ```json
//! {
//!   "version": "1.0.0",
//!   "createdAt": "2026-01-01T00:00:00+00:00",
//!   "symbolCount": 7, "cardCount": 7, "symbolsPerCard": 3,
//!   "symbols": [{ "id": "circle", "name": "Circle", "color": "#f00" }],
//!   "cards": [{ "id": 1, "symbolIds": ["circle", "star", "heart"] }]
//! }
//! ```

use chrono::{DateTime, Utc};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardId, CardSet};
use crate::error::{EngineError, Result};
use crate::symbols::{Symbol, SymbolCatalog};

/// Document version written and accepted.
pub const EXPORT_VERSION: &str = "1.0.0";

/// Symbol entry of an export document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportedSymbol {
    pub id: String,
    pub name: String,
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl From<&Symbol> for ExportedSymbol {
    fn from(symbol: &Symbol) -> Self {
        Self {
            id: symbol.id.clone(),
            name: symbol.name.clone(),
            color: symbol.color.clone(),
            image_url: symbol.image_url.clone(),
        }
    }
}

impl From<ExportedSymbol> for Symbol {
    fn from(exported: ExportedSymbol) -> Self {
        Self {
            id: exported.id,
            name: exported.name,
            color: exported.color,
            image_url: exported.image_url,
        }
    }
}

/// Card entry of an export document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportedCard {
    pub id: u32,
    pub symbol_ids: Vec<String>,
}

/// A card set in exchange form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportedCardSet {
    pub version: String,
    pub created_at: String,
    pub symbol_count: usize,
    pub card_count: usize,
    pub symbols_per_card: usize,
    pub symbols: Vec<ExportedSymbol>,
    pub cards: Vec<ExportedCard>,
}

/// Result of importing a document.
#[derive(Clone, Debug)]
pub struct ImportedCardSet {
    pub catalog: SymbolCatalog,
    pub cards: CardSet,
}

impl ExportedCardSet {
    /// Export `set`, stamped with the current time.
    #[must_use]
    pub fn from_card_set(set: &CardSet) -> Self {
        Self::from_card_set_at(set, Utc::now())
    }

    /// Export `set` with an explicit creation time.
    ///
    /// Only symbols used by at least one card are listed, in first-use order.
    #[must_use]
    pub fn from_card_set_at(set: &CardSet, created_at: DateTime<Utc>) -> Self {
        let mut seen = FxHashSet::default();
        let symbols: Vec<ExportedSymbol> = set
            .iter()
            .flat_map(|card| card.symbols.iter())
            .filter(|symbol| seen.insert(symbol.id.as_str()))
            .map(ExportedSymbol::from)
            .collect();

        let cards: Vec<ExportedCard> = set
            .iter()
            .map(|card| ExportedCard {
                id: card.id.raw(),
                symbol_ids: card.symbols.iter().map(|s| s.id.clone()).collect(),
            })
            .collect();

        Self {
            version: EXPORT_VERSION.to_string(),
            created_at: created_at.to_rfc3339(),
            symbol_count: symbols.len(),
            card_count: cards.len(),
            symbols_per_card: set.cards.first().map_or(0, Card::len),
            symbols,
            cards,
        }
    }

    /// Serialize as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a document without checking its contents.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Rebuild the catalog and card set.
    ///
    /// Fails on a version other than `EXPORT_VERSION`, on two symbols whose
    /// ids differ only by case, and on any card symbol id missing from
    /// `symbols` (matched case-insensitively).
    pub fn into_card_set(self) -> Result<ImportedCardSet> {
        if self.version != EXPORT_VERSION {
            return Err(EngineError::UnsupportedVersion {
                found: self.version,
                expected: EXPORT_VERSION.to_string(),
            });
        }

        let mut catalog = SymbolCatalog::new();
        for exported in self.symbols {
            let symbol = Symbol::from(exported);
            if let Some(existing) = catalog.get(&symbol.id) {
                return Err(EngineError::DuplicateSymbolId {
                    id: symbol.id,
                    existing: existing.id.clone(),
                });
            }
            catalog.insert(symbol.key(), symbol);
        }

        let cards = self
            .cards
            .into_iter()
            .map(|exported| -> Result<Card> {
                let id = CardId::new(exported.id);
                let symbols = exported
                    .symbol_ids
                    .into_iter()
                    .map(|symbol_id| match catalog.get(&symbol_id) {
                        Some(symbol) => Ok(symbol.clone()),
                        None => Err(EngineError::UnknownSymbolReference {
                            card: id,
                            symbol_id,
                        }),
                    })
                    .collect::<Result<Vec<_>>>()?;
                Ok(Card::new(id, symbols))
            })
            .collect::<Result<Vec<_>>>()?;

        let cards = CardSet::from_cards(cards);
        tracing::debug!(
            cards = cards.len(),
            symbols = catalog.len(),
            order = ?cards.order(),
            "imported card set"
        );

        Ok(ImportedCardSet { catalog, cards })
    }
}

/// Export `set` as a JSON document string.
pub fn export_json(set: &CardSet) -> Result<String> {
    ExportedCardSet::from_card_set(set).to_json()
}

/// Import a card set from a JSON document string.
pub fn import_json(json: &str) -> Result<ImportedCardSet> {
    ExportedCardSet::from_json(json)?.into_card_set()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn symbol(id: &str) -> Symbol {
        Symbol::new(id, id.to_uppercase(), "#abcdef")
    }

    fn small_set() -> CardSet {
        CardSet::from_cards(vec![
            Card::new(CardId::new(1), vec![symbol("a"), symbol("b")]),
            Card::new(
                CardId::new(2),
                vec![symbol("b"), symbol("c").with_image("c.png")],
            ),
        ])
    }

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap()
    }

    #[test]
    fn test_export_shape() {
        let doc = ExportedCardSet::from_card_set_at(&small_set(), fixed_time());

        assert_eq!(doc.version, "1.0.0");
        assert_eq!(doc.created_at, "2026-01-02T03:04:05+00:00");
        assert_eq!(doc.symbol_count, 3);
        assert_eq!(doc.card_count, 2);
        assert_eq!(doc.symbols_per_card, 2);

        let ids: Vec<_> = doc.symbols.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
        assert_eq!(doc.cards[1].symbol_ids, vec!["b", "c"]);
    }

    #[test]
    fn test_json_field_names() {
        let json = ExportedCardSet::from_card_set_at(&small_set(), fixed_time())
            .to_json()
            .unwrap();

        let fields = [
            "\"createdAt\"",
            "\"symbolCount\"",
            "\"symbolsPerCard\"",
            "\"symbolIds\"",
            "\"imageUrl\"",
        ];
        for field in fields {
            assert!(json.contains(field), "missing {field}");
        }
        // Symbols without an image omit the field entirely.
        assert_eq!(json.matches("imageUrl").count(), 1);
    }

    #[test]
    fn test_round_trip() {
        let set = small_set();
        let json = export_json(&set).unwrap();
        let imported = import_json(&json).unwrap();

        assert_eq!(imported.cards, set);
        assert_eq!(imported.catalog.len(), 3);
        assert!(imported.catalog.contains_key("C"));
    }

    #[test]
    fn test_rejects_unknown_version() {
        let mut doc = ExportedCardSet::from_card_set_at(&small_set(), fixed_time());
        doc.version = "2.0.0".to_string();

        let err = doc.into_card_set().unwrap_err();
        assert!(matches!(
            err,
            EngineError::UnsupportedVersion { ref found, .. } if found == "2.0.0"
        ));
    }

    #[test]
    fn test_rejects_unknown_symbol() {
        let mut doc = ExportedCardSet::from_card_set_at(&small_set(), fixed_time());
        doc.cards[1].symbol_ids.push("ghost".to_string());

        match doc.into_card_set() {
            Err(EngineError::UnknownSymbolReference { card, symbol_id }) => {
                assert_eq!(card, CardId::new(2));
                assert_eq!(symbol_id, "ghost");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_rejects_ids_differing_only_by_case() {
        let mut doc = ExportedCardSet::from_card_set_at(&small_set(), fixed_time());
        let mut shadow = doc.symbols[0].clone();
        shadow.id = "A".to_string();
        doc.symbols.push(shadow);

        match doc.into_card_set() {
            Err(EngineError::DuplicateSymbolId { id, existing }) => {
                assert_eq!(id, "A");
                assert_eq!(existing, "a");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_symbol_lookup_is_case_insensitive() {
        let mut doc = ExportedCardSet::from_card_set_at(&small_set(), fixed_time());
        doc.cards[0].symbol_ids = vec!["A".to_string(), "B".to_string()];

        let imported = doc.into_card_set().unwrap();
        assert_eq!(imported.cards.cards[0].symbol_ids().as_slice(), &["a", "b"]);
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(import_json("{ not json"), Err(EngineError::Json(_))));
    }
}
