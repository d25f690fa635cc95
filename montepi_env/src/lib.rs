//! montepi Environment Abstraction Layer
//!
//! The estimator never reaches for a process-global RNG. Every draw goes
//! through a [`RandomSource`] handle that the caller owns and passes in:
//! - **Production**: [`EntropySource`] - `StdRng` seeded from OS entropy
//! - **Reproducible**: [`SeededSource`] - `ChaCha8Rng` seeded from a `u64`
//!
//! A run driven by a `SeededSource` is fully reproducible from its seed.
//!
//! # Example
//!
//! ```
//! use montepi_env::{RandomSource, SeededSource};
//!
//! let mut source = SeededSource::new(42);
//! let x = source.next_unit();
//! assert!((0.0..1.0).contains(&x));
//! ```

mod source;
mod entropy;
mod seeded;

pub use source::RandomSource;
pub use entropy::EntropySource;
pub use seeded::SeededSource;
