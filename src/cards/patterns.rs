//! Per-order incidence constructions.
//!
//! Each supported order maps to a dedicated `Construction` returning one
//! `Pattern` (a list of catalog indices) per card. Orders 2, 3 and 4 use fixed
//! tables. Orders 5 and 7 are prime, so their planes are swept from the affine
//! plane over the integers modulo `n` and completed with the line at infinity.
//!
//! Every pattern list returned here satisfies, for order `n`:
//! - `n² + n + 1` patterns of `n + 1` distinct indices in `0..n² + n + 1`
//! - any two patterns share exactly one index
//! - every index appears in exactly `n + 1` patterns

use smallvec::SmallVec;

use crate::plane::PlaneOrder;

/// Catalog indices for one card.
pub type Pattern = SmallVec<[usize; 8]>;

/// Builds all card patterns for one order.
pub type Construction = fn(PlaneOrder) -> Vec<Pattern>;

/// Lines of the Fano plane.
const FANO: [[usize; 3]; 7] = [
    [0, 1, 2],
    [0, 3, 4],
    [0, 5, 6],
    [1, 3, 5],
    [1, 4, 6],
    [2, 3, 6],
    [2, 4, 5],
];

/// Lines of the plane of order 3.
const ORDER_3: [[usize; 4]; 13] = [
    [0, 1, 2, 3],
    [0, 4, 7, 10],
    [0, 5, 8, 11],
    [0, 6, 9, 12],
    [1, 4, 5, 6],
    [1, 7, 8, 9],
    [1, 10, 11, 12],
    [2, 4, 8, 12],
    [2, 6, 7, 11],
    [2, 5, 9, 10],
    [3, 4, 9, 11],
    [3, 5, 7, 12],
    [3, 6, 8, 10],
];

/// Lines of the plane of order 4, built over GF(4).
const ORDER_4: [[usize; 5]; 21] = [
    [0, 1, 2, 3, 4],
    [0, 5, 9, 13, 17],
    [0, 6, 10, 14, 18],
    [0, 7, 11, 15, 19],
    [0, 8, 12, 16, 20],
    [1, 5, 6, 7, 8],
    [1, 9, 10, 11, 12],
    [1, 13, 14, 15, 16],
    [1, 17, 18, 19, 20],
    [2, 5, 10, 15, 20],
    [2, 6, 9, 16, 19],
    [2, 7, 12, 13, 18],
    [2, 8, 11, 14, 17],
    [3, 5, 12, 14, 19],
    [3, 8, 9, 15, 18],
    [3, 6, 11, 13, 20],
    [3, 7, 10, 16, 17],
    [4, 5, 11, 16, 18],
    [4, 7, 9, 14, 20],
    [4, 8, 10, 13, 19],
    [4, 6, 12, 15, 17],
];

/// Registered construction for every supported order.
const REGISTRY: [(PlaneOrder, Construction); 5] = [
    (PlaneOrder::Two, fano),
    (PlaneOrder::Three, order_three),
    (PlaneOrder::Four, order_four),
    (PlaneOrder::Five, prime_sweep),
    (PlaneOrder::Seven, prime_sweep),
];

/// Look up the construction registered for `order`.
#[must_use]
pub fn construction_for(order: PlaneOrder) -> Construction {
    REGISTRY
        .iter()
        .find(|(registered, _)| *registered == order)
        .map_or(prime_sweep as Construction, |&(_, construction)| construction)
}

fn from_table<const K: usize>(table: &[[usize; K]]) -> Vec<Pattern> {
    table
        .iter()
        .map(|row| row.iter().copied().collect())
        .collect()
}

fn fano(_: PlaneOrder) -> Vec<Pattern> {
    from_table(&FANO)
}

fn order_three(_: PlaneOrder) -> Vec<Pattern> {
    from_table(&ORDER_3)
}

fn order_four(_: PlaneOrder) -> Vec<Pattern> {
    from_table(&ORDER_4)
}

/// Projective plane over the integers modulo a prime `n`.
///
/// Index layout: `0` is the point at infinity of vertical lines, `1..=n` are
/// the points at infinity of slopes `0..n`, and affine point `(x, y)` is
/// `n + 1 + x + y·n`.
///
/// Cards, in order:
/// 1. the line at infinity `{0, 1, .., n}`
/// 2. `n` vertical lines `x = c`: index `0` plus the stride-`n` block from `n + 1 + c`
/// 3. `n²` lines `y = s·x + b`: index `s + 1` plus `n + 1 + x + ((s·x + b) mod n)·n`
fn prime_sweep(order: PlaneOrder) -> Vec<Pattern> {
    let n = order.symbols_per_card() - 1;
    debug_assert!((2..n).all(|d| n % d != 0), "sweep requires a prime order");

    let offset = n + 1;
    let mut patterns = Vec::with_capacity(order.card_count());

    patterns.push((0..=n).collect());

    for column in 0..n {
        let mut pattern = Pattern::new();
        pattern.push(0);
        pattern.extend((0..n).map(|y| offset + column + y * n));
        patterns.push(pattern);
    }

    for slope in 0..n {
        for intercept in 0..n {
            let mut pattern = Pattern::new();
            pattern.push(slope + 1);
            pattern.extend((0..n).map(|x| offset + x + ((slope * x + intercept) % n) * n));
            patterns.push(pattern);
        }
    }

    patterns
}
