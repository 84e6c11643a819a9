//! Pairwise one-common-symbol check.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardId};
use crate::error::{EngineError, Result};

/// Shared symbols required between any two cards.
const EXPECTED_COMMON: usize = 1;

/// A card pair that does not share exactly one symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PairDeviation {
    pub first: CardId,
    pub second: CardId,
    pub common: usize,
}

impl std::fmt::Display for PairDeviation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Card {} and card {}: {} common symbol(s) (expected: {})",
            self.first.raw(),
            self.second.raw(),
            self.common,
            EXPECTED_COMMON
        )
    }
}

/// Pair counts collected during validation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationStats {
    pub total_cards: usize,
    pub total_pairs: usize,
    pub valid_pairs: usize,
    pub invalid_pairs: usize,
}

/// Outcome of `validate`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub is_valid: bool,
    /// One human-readable line per deviation.
    pub errors: Vec<String>,
    pub deviations: Vec<PairDeviation>,
    pub stats: ValidationStats,
}

impl ValidationReport {
    /// Convert a failing report into `EngineError::InvalidCardSet`.
    pub fn into_result(self) -> Result<Self> {
        if self.is_valid {
            Ok(self)
        } else {
            Err(EngineError::InvalidCardSet {
                deviations: self.deviations,
            })
        }
    }
}

/// Check that every pair of distinct cards shares exactly one symbol id.
///
/// Symbol order on a card is ignored. Runs in `O(cards² · symbols_per_card)`.
#[must_use]
pub fn validate<'a>(cards: impl IntoIterator<Item = &'a Card>) -> ValidationReport {
    let id_sets: Vec<(CardId, FxHashSet<&str>)> = cards
        .into_iter()
        .map(|card| (card.id, card.symbol_ids().into_iter().collect()))
        .collect();

    let total_cards = id_sets.len();
    let total_pairs = total_cards * total_cards.saturating_sub(1) / 2;
    let mut deviations = Vec::new();

    for (i, (first, first_ids)) in id_sets.iter().enumerate() {
        for (second, second_ids) in &id_sets[i + 1..] {
            let common = first_ids.intersection(second_ids).count();
            if common != EXPECTED_COMMON {
                deviations.push(PairDeviation {
                    first: *first,
                    second: *second,
                    common,
                });
            }
        }
    }

    let invalid_pairs = deviations.len();
    let is_valid = invalid_pairs == 0;
    if !is_valid {
        tracing::warn!(total_pairs, invalid_pairs, "card set failed validation");
    }

    ValidationReport {
        is_valid,
        errors: deviations.iter().map(ToString::to_string).collect(),
        deviations,
        stats: ValidationStats {
            total_cards,
            total_pairs,
            valid_pairs: total_pairs - invalid_pairs,
            invalid_pairs,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbols::Symbol;

    fn card(id: u32, symbols: &[&str]) -> Card {
        Card::new(
            CardId::new(id),
            symbols.iter().map(|s| Symbol::new(*s, s.to_uppercase(), "#000")).collect(),
        )
    }

    #[test]
    fn test_valid_pair() {
        let cards = [card(1, &["a", "b"]), card(2, &["b", "c"])];
        let report = validate(&cards);

        assert!(report.is_valid);
        assert!(report.errors.is_empty());
        assert_eq!(
            report.stats,
            ValidationStats {
                total_cards: 2,
                total_pairs: 1,
                valid_pairs: 1,
                invalid_pairs: 0,
            }
        );
    }

    #[test]
    fn test_too_many_common_symbols() {
        let cards = [card(1, &["a", "b", "c"]), card(2, &["a", "b", "d"])];
        let report = validate(&cards);

        assert!(!report.is_valid);
        assert_eq!(report.stats.invalid_pairs, 1);
        assert_eq!(report.deviations[0].common, 2);
    }

    #[test]
    fn test_no_common_symbols() {
        let cards = [card(1, &["a", "b"]), card(2, &["c", "d"])];
        let report = validate(&cards);

        assert!(!report.is_valid);
        assert_eq!(
            report.errors,
            vec!["Card 1 and card 2: 0 common symbol(s) (expected: 1)".to_string()]
        );
    }

    #[test]
    fn test_symbol_order_is_ignored() {
        let cards = [card(1, &["c", "a", "b"]), card(2, &["b", "d", "e"])];
        assert!(validate(&cards).is_valid);
    }

    #[test]
    fn test_empty_and_single_card_sets() {
        let empty: [Card; 0] = [];
        let report = validate(&empty);
        assert!(report.is_valid);
        assert_eq!(report.stats.total_pairs, 0);

        let report = validate(&[card(1, &["a"])]);
        assert!(report.is_valid);
        assert_eq!(report.stats.total_cards, 1);
    }

    #[test]
    fn test_into_result() {
        let good = [card(1, &["a", "b"]), card(2, &["b", "c"])];
        assert!(validate(&good).into_result().is_ok());

        let bad = [card(1, &["a"]), card(2, &["b"])];
        match validate(&bad).into_result() {
            Err(EngineError::InvalidCardSet { deviations }) => {
                assert_eq!(
                    deviations,
                    vec![PairDeviation {
                        first: CardId::new(1),
                        second: CardId::new(2),
                        common: 0,
                    }]
                );
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
