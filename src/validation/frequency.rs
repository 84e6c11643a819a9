//! Per-symbol membership check.
//!
//! By duality, every symbol of a plane of order `n` lies on exactly `n + 1`
//! cards, the same number as symbols per card.

use serde::{Deserialize, Serialize};

use crate::cards::CardSet;

/// A symbol appearing on the wrong number of cards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrequencyDeviation {
    pub symbol_id: String,
    pub appearances: usize,
}

/// Outcome of `check_frequencies`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrequencyReport {
    pub is_valid: bool,
    /// Appearances each symbol should have.
    pub expected: usize,
    /// Deviating symbols, sorted by id.
    pub deviations: Vec<FrequencyDeviation>,
}

/// Check that every symbol appears on as many cards as each card has symbols.
///
/// The expected count comes from the set's order when known, otherwise from
/// the first card. An empty set is trivially valid.
#[must_use]
pub fn check_frequencies(set: &CardSet) -> FrequencyReport {
    let expected = match (set.order(), set.cards.first()) {
        (Some(order), _) => order.symbols_per_card(),
        (None, Some(first)) => first.len(),
        (None, None) => return FrequencyReport {
            is_valid: true,
            ..FrequencyReport::default()
        },
    };

    let mut deviations: Vec<FrequencyDeviation> = set
        .symbol_frequencies()
        .into_iter()
        .filter(|&(_, appearances)| appearances != expected)
        .map(|(id, appearances)| FrequencyDeviation {
            symbol_id: id.to_string(),
            appearances,
        })
        .collect();
    deviations.sort_by(|a, b| a.symbol_id.cmp(&b.symbol_id));

    if !deviations.is_empty() {
        tracing::warn!(
            expected,
            deviating = deviations.len(),
            "symbols appear on an unexpected number of cards"
        );
    }

    FrequencyReport {
        is_valid: deviations.is_empty(),
        expected,
        deviations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, CardId};
    use crate::symbols::Symbol;

    fn set(cards: &[&[&str]]) -> CardSet {
        CardSet::from_cards(
            cards
                .iter()
                .enumerate()
                .map(|(i, ids)| {
                    Card::new(
                        CardId::new(i as u32 + 1),
                        ids.iter().map(|s| Symbol::new(*s, *s, "#fff")).collect(),
                    )
                })
                .collect(),
        )
    }

    #[test]
    fn test_balanced_set() {
        let report = check_frequencies(&set(&[&["a", "b"], &["b", "c"], &["c", "a"]]));
        assert!(report.is_valid);
        assert_eq!(report.expected, 2);
    }

    #[test]
    fn test_unbalanced_set() {
        let report = check_frequencies(&set(&[&["a", "b"], &["a", "c"], &["a", "d"]]));

        assert!(!report.is_valid);
        let ids: Vec<_> = report.deviations.iter().map(|d| d.symbol_id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c", "d"]);
        assert_eq!(report.deviations[0].appearances, 3);
        assert_eq!(report.deviations[1].appearances, 1);
    }

    #[test]
    fn test_empty_set() {
        assert!(check_frequencies(&set(&[])).is_valid);
    }
}
