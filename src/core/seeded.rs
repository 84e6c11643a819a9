//! Keyed pseudo-random scalars for layout geometry.
//!
//! A `ScalarSource` maps an integer key to a value in `[0, 1)` without any
//! hidden state, so the same key always yields the same scalar. The layout
//! engine derives its keys from `(card_id, symbol_index)` and never touches a
//! global random source.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of keyed scalars in `[0, 1)`.
///
/// Implementations must be pure: `scalar(k)` may depend on `k` and on the
/// source's own immutable configuration only.
pub trait ScalarSource {
    fn scalar(&self, key: u64) -> f64;
}

/// Default scalar source: one ChaCha8 draw from a stream seeded by the key.
///
/// ChaCha8 output and the `f64` conversion are integer-defined, so results are
/// bit-identical on every platform.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SeededRandom {
    salt: u64,
}

impl SeededRandom {
    #[must_use]
    pub const fn new() -> Self {
        Self { salt: 0 }
    }

    /// A source whose keys are offset by `salt`, giving a different but
    /// equally reproducible family of layouts.
    #[must_use]
    pub const fn with_salt(salt: u64) -> Self {
        Self { salt }
    }
}

impl ScalarSource for SeededRandom {
    fn scalar(&self, key: u64) -> f64 {
        let mut rng = ChaCha8Rng::seed_from_u64(key ^ self.salt);
        rng.gen::<f64>()
    }
}

impl<S: ScalarSource + ?Sized> ScalarSource for &S {
    fn scalar(&self, key: u64) -> f64 {
        (**self).scalar(key)
    }
}
