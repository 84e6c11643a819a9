//! Fitting an arbitrary symbol count to the supported orders.

use serde::{Deserialize, Serialize};

use super::order::SUPPORTED_ORDERS;

/// A supported order using exactly the available symbols.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExactMatch {
    pub order: u32,
    pub symbol_count: usize,
}

/// The nearest supported order needing fewer symbols than available.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SmallerMatch {
    pub order: u32,
    pub symbol_count: usize,
    /// Symbols to discard to fit this order.
    pub to_remove: usize,
}

/// The nearest supported order needing more symbols than available.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LargerMatch {
    pub order: u32,
    pub symbol_count: usize,
    /// Symbols to add to reach this order.
    pub to_add: usize,
}

/// Outcome of `best_order_for`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSearch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exact: Option<ExactMatch>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub smaller: Option<SmallerMatch>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub larger: Option<LargerMatch>,
}

/// Find the exact, nearest smaller and nearest larger supported orders for
/// `symbol_count` available symbols.
///
/// Orders are scanned ascending. `smaller` is overwritten on every order below
/// the input, so the largest one survives; `larger` keeps the first order above
/// the input. A zero or negative input yields only `larger`.
#[must_use]
pub fn best_order_for(symbol_count: i64) -> OrderSearch {
    let mut result = OrderSearch::default();

    for order in SUPPORTED_ORDERS {
        let required = order.symbol_count();
        // Supported counts are tiny; the cast cannot truncate.
        let required_signed = required as i64;

        if required_signed == symbol_count {
            result.exact = Some(ExactMatch {
                order: order.raw(),
                symbol_count: required,
            });
        } else if required_signed < symbol_count {
            result.smaller = Some(SmallerMatch {
                order: order.raw(),
                symbol_count: required,
                to_remove: (symbol_count - required_signed) as usize,
            });
        } else if result.larger.is_none() {
            result.larger = Some(LargerMatch {
                order: order.raw(),
                symbol_count: required,
                to_add: (required_signed - symbol_count) as usize,
            });
            if result.exact.is_some() {
                break;
            }
        }
    }

    result
}
