//! Core random-source trait.

/// The handle through which all sampling randomness flows.
///
/// # Implementations
///
/// - **Production**: `EntropySource` - OS entropy, not reproducible
/// - **Reproducible**: `SeededSource` - `ChaCha8Rng(seed)`
pub trait RandomSource {
    /// Returns the next uniform value in `[0, 1)`.
    fn next_unit(&mut self) -> f64;

    /// Returns the source's seed (for logging/debugging).
    ///
    /// Entropy-backed sources return `None`: there is nothing to replay.
    fn seed(&self) -> Option<u64>;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }

    fn seed(&self) -> Option<u64> {
        (**self).seed()
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }

    fn seed(&self) -> Option<u64> {
        (**self).seed()
    }
}
