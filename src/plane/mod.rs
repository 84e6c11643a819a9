//! Finite projective plane arithmetic.
//!
//! A projective plane of order `n` has `n² + n + 1` points and the same number
//! of lines, each line holding `n + 1` points, and any two lines meet in
//! exactly one point. Cards are lines and symbols are points.
//!
//! Only a fixed set of orders is supported: the ones the generator has an
//! explicit construction for. Order 6 does not exist (Bruck–Ryser–Chowla).
//!
//! ## Key Types
//!
//! - `PlaneOrder`: A supported order
//! - `PlaneStats`: Symbol/card counts for one order
//! - `OrderSearch`: Result of fitting an arbitrary symbol count to an order

pub mod order;
pub mod search;

pub use order::{
    card_count, is_supported_order, stats_for, supported_orders, symbol_count, symbols_per_card,
    PlaneOrder, PlaneStats, SUPPORTED_ORDERS,
};
pub use search::{best_order_for, ExactMatch, LargerMatch, OrderSearch, SmallerMatch};
