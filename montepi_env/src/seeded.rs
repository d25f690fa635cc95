//! Deterministic random source for reproducible runs and tests.

use crate::RandomSource;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Random source backed by a seeded ChaCha8 RNG.
///
/// Same seed always produces the same sequence.
#[derive(Debug, Clone)]
pub struct SeededSource {
    /// Master seed for this source
    seed: u64,

    rng: ChaCha8Rng,
}

impl SeededSource {
    /// Creates a new SeededSource with the given seed.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededSource {
    fn next_unit(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    fn seed(&self) -> Option<u64> {
        Some(self.seed)
    }
}
