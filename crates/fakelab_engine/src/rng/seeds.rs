//! Per-measurement seed derivation.
//!
//! One seed per measurement keeps measurements independently in or out of
//! range; seeding every measurement with the identifier itself would make a
//! report either all-normal or all-abnormal together.

use super::prng::LabRng;

/// Integer naming the entity (report number) whose values are generated.
pub type Identifier = u64;

/// Infinite, reproducible stream of seeds for one identifier.
///
/// Seed `i` depends only on the identifier and `i`.
pub struct SeedStream {
    rng: LabRng,
}

impl SeedStream {
    /// Returns the identifier this stream was derived from.
    #[inline]
    pub fn identifier(&self) -> Identifier {
        self.rng.seed()
    }
}

impl Iterator for SeedStream {
    type Item = u64;

    #[inline]
    fn next(&mut self) -> Option<u64> {
        Some(self.rng.next_seed())
    }
}

/// Opens the seed stream for `identifier`.
pub fn seed_stream(identifier: Identifier) -> SeedStream {
    SeedStream {
        rng: LabRng::from_seed(identifier),
    }
}

/// Derives `count` seeds for `identifier`, in declaration order.
///
/// # Examples
///
/// ```rust
/// use fakelab_engine::rng::derive_seeds;
///
/// let short = derive_seeds(7, 2);
/// let long = derive_seeds(7, 5);
/// assert_eq!(&long[..2], &short[..]);
/// ```
pub fn derive_seeds(identifier: Identifier, count: usize) -> Vec<u64> {
    seed_stream(identifier).take(count).collect()
}
