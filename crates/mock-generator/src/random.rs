//! Seeded random source.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seeded pseudo-random draw primitive shared by every generator.
///
/// Not cryptographically strong. The same seed yields the same sequence of
/// draws, so a session replays identically for the same calls.
pub struct RandomSource {
    rng: StdRng,
}

impl RandomSource {
    /// Create a random source from a seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Uniform integer in `[min, max)`; `min` when the range is empty.
    pub fn int_in(&mut self, min: i64, max: i64) -> i64 {
        if min >= max {
            return min;
        }
        self.rng.gen_range(min..max)
    }

    /// Uniform integer in `[0, n)`; `0` when `n == 0`.
    pub fn below(&mut self, n: u64) -> u64 {
        if n == 0 {
            return 0;
        }
        self.rng.gen_range(0..n)
    }

    /// Uniform index into a collection of `len` elements.
    pub fn index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.rng.gen_range(0..len)
    }

    /// Uniform float in `[0, 1)`.
    pub fn unit(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    /// Fair coin.
    pub fn coin(&mut self) -> bool {
        self.rng.gen_bool(0.5)
    }
}
