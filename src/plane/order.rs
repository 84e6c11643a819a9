//! Supported plane orders and their counts.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

/// A plane order the generator can construct.
///
/// The set is a design choice (constructions exist for exactly these), not a
/// claim about which orders exist mathematically.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum PlaneOrder {
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Seven = 7,
}

/// All supported orders, ascending.
pub const SUPPORTED_ORDERS: [PlaneOrder; 5] = [
    PlaneOrder::Two,
    PlaneOrder::Three,
    PlaneOrder::Four,
    PlaneOrder::Five,
    PlaneOrder::Seven,
];

impl PlaneOrder {
    /// Get the raw order value `n`.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self as u32
    }

    /// Number of symbols (points) in the plane: `n² + n + 1`.
    #[must_use]
    pub const fn symbol_count(self) -> usize {
        symbol_count(self.raw())
    }

    /// Number of cards (lines) in the plane. Always equals `symbol_count`.
    #[must_use]
    pub const fn card_count(self) -> usize {
        card_count(self.raw())
    }

    /// Number of symbols on each card: `n + 1`.
    #[must_use]
    pub const fn symbols_per_card(self) -> usize {
        symbols_per_card(self.raw())
    }

    /// Full statistics record for this order.
    #[must_use]
    pub const fn stats(self) -> PlaneStats {
        PlaneStats {
            order: self.raw(),
            symbol_count: self.symbol_count(),
            card_count: self.card_count(),
            symbols_per_card: self.symbols_per_card(),
        }
    }

    /// Find the supported order whose symbol count is exactly `count`.
    #[must_use]
    pub fn for_symbol_count(count: usize) -> Option<Self> {
        SUPPORTED_ORDERS
            .into_iter()
            .find(|order| order.symbol_count() == count)
    }
}

impl TryFrom<u32> for PlaneOrder {
    type Error = EngineError;

    fn try_from(n: u32) -> Result<Self> {
        SUPPORTED_ORDERS
            .into_iter()
            .find(|order| order.raw() == n)
            .ok_or(EngineError::UnsupportedOrder { order: n })
    }
}

impl From<PlaneOrder> for u32 {
    fn from(order: PlaneOrder) -> Self {
        order.raw()
    }
}

impl std::fmt::Display for PlaneOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.raw())
    }
}

/// Statistics of a projective plane.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaneStats {
    pub order: u32,
    pub symbol_count: usize,
    pub card_count: usize,
    pub symbols_per_card: usize,
}

impl PlaneStats {
    /// Stats for every supported order, ascending.
    #[must_use]
    pub fn all() -> Vec<Self> {
        SUPPORTED_ORDERS.iter().map(|order| order.stats()).collect()
    }
}

/// Symbols required for a plane of order `n`: `n² + n + 1`.
#[must_use]
pub const fn symbol_count(n: u32) -> usize {
    let n = n as usize;
    n * n + n + 1
}

/// Cards produced by a plane of order `n`. Identical to `symbol_count`.
#[must_use]
pub const fn card_count(n: u32) -> usize {
    symbol_count(n)
}

/// Symbols on each card for a plane of order `n`: `n + 1`.
#[must_use]
pub const fn symbols_per_card(n: u32) -> usize {
    n as usize + 1
}

/// Check whether `n` is one of the supported orders.
#[must_use]
pub fn is_supported_order(n: u32) -> bool {
    PlaneOrder::try_from(n).is_ok()
}

/// Supported orders, optionally limited to `n <= max_n`, ascending.
#[must_use]
pub fn supported_orders(max_n: Option<u32>) -> Vec<u32> {
    SUPPORTED_ORDERS
        .iter()
        .map(|order| order.raw())
        .filter(|&n| max_n.map_or(true, |max| n <= max))
        .collect()
}

/// Full statistics for order `n`.
///
/// Fails with `UnsupportedOrder` when `n` is not a supported order.
pub fn stats_for(n: u32) -> Result<PlaneStats> {
    PlaneOrder::try_from(n).map(PlaneOrder::stats)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_for_supported_orders() {
        assert_eq!(symbol_count(2), 7);
        assert_eq!(symbol_count(3), 13);
        assert_eq!(symbol_count(4), 21);
        assert_eq!(symbol_count(5), 31);
        assert_eq!(symbol_count(7), 57);

        for order in SUPPORTED_ORDERS {
            let n = order.raw();
            assert_eq!(card_count(n), symbol_count(n));
            assert_eq!(symbols_per_card(n), n as usize + 1);
        }
    }

    #[test]
    fn test_formula_beyond_supported_set() {
        assert_eq!(symbol_count(10), 111);
        assert_eq!(symbols_per_card(10), 11);
    }

    #[test]
    fn test_is_supported_order() {
        for n in [2, 3, 4, 5, 7] {
            assert!(is_supported_order(n));
        }
        for n in [0, 1, 6, 8, 10, 100] {
            assert!(!is_supported_order(n));
        }
    }

    #[test]
    fn test_supported_orders_filter() {
        assert_eq!(supported_orders(None), vec![2, 3, 4, 5, 7]);
        assert_eq!(supported_orders(Some(3)), vec![2, 3]);
        assert_eq!(supported_orders(Some(5)), vec![2, 3, 4, 5]);
        assert!(supported_orders(Some(1)).is_empty());
        assert_eq!(supported_orders(Some(100)), vec![2, 3, 4, 5, 7]);
    }

    #[test]
    fn test_stats_for() {
        let stats = stats_for(2).unwrap();
        assert_eq!(
            stats,
            PlaneStats {
                order: 2,
                symbol_count: 7,
                card_count: 7,
                symbols_per_card: 3,
            }
        );

        assert_eq!(stats_for(5).unwrap().symbols_per_card, 6);
    }

    #[test]
    fn test_stats_for_unsupported_order() {
        let err = stats_for(6).unwrap_err();
        assert!(matches!(err, EngineError::UnsupportedOrder { order: 6 }));
        assert!(err.to_string().contains("order 6 is not supported"));

        assert!(stats_for(0).is_err());
        assert!(stats_for(10).is_err());
    }

    #[test]
    fn test_all_stats() {
        let all = PlaneStats::all();
        let orders: Vec<_> = all.iter().map(|s| s.order).collect();
        assert_eq!(orders, vec![2, 3, 4, 5, 7]);

        for stats in all {
            assert_eq!(stats.symbol_count, symbol_count(stats.order));
            assert_eq!(stats.card_count, stats.symbol_count);
            assert_eq!(stats.symbol_count % 2, 1);
        }
    }

    #[test]
    fn test_for_symbol_count() {
        assert_eq!(PlaneOrder::for_symbol_count(7), Some(PlaneOrder::Two));
        assert_eq!(PlaneOrder::for_symbol_count(57), Some(PlaneOrder::Seven));
        assert_eq!(PlaneOrder::for_symbol_count(43), None);
        assert_eq!(PlaneOrder::for_symbol_count(0), None);
    }

    #[test]
    fn test_order_serde() {
        let json = serde_json::to_string(&PlaneOrder::Five).unwrap();
        assert_eq!(json, "5");

        let order: PlaneOrder = serde_json::from_str("3").unwrap();
        assert_eq!(order, PlaneOrder::Three);

        assert!(serde_json::from_str::<PlaneOrder>("6").is_err());
    }
}
