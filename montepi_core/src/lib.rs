//! montepi Core - Monte Carlo estimation of pi
//!
//! Points are drawn uniformly from the unit square `[0, 1) x [0, 1)`. The
//! fraction landing strictly inside the quarter unit circle approaches
//! `pi / 4`, so `4 * inside / attempts` estimates pi.
//!
//! All randomness comes from an injected [`montepi_env::RandomSource`].

pub mod error;
pub mod sample;
pub mod estimator;

// Re-export key types for convenience
pub use error::EstimateError;
pub use sample::{SampleCount, SamplePoint};
pub use estimator::{estimate_pi, Estimator, RunResult};
