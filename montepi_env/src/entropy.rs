//! Production random source backed by OS entropy.

use crate::RandomSource;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Random source seeded once from OS entropy.
///
/// This is the "real" implementation used when no seed is requested.
pub struct EntropySource {
    rng: StdRng,
}

impl EntropySource {
    /// Creates a new EntropySource.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl Default for EntropySource {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for EntropySource {
    fn next_unit(&mut self) -> f64 {
        // Standard distribution for f64 is uniform over [0, 1)
        self.rng.gen::<f64>()
    }

    fn seed(&self) -> Option<u64> {
        None
    }
}
