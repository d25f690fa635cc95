//! The rejection-sampling estimator.
//!
//! Single pass, no state kept between calls. The only side effect is the
//! advancement of the caller's random source.

use crate::error::EstimateError;
use crate::sample::{SampleCount, SamplePoint};
use montepi_env::RandomSource;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of one estimation run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunResult {
    /// Number of sample points requested
    pub attempts: u64,

    /// Points that fell strictly inside the quarter circle (`<= attempts`)
    pub inside: u64,

    /// `4 * inside / attempts`, always within `[0, 4]`
    pub estimate: f64,
}

impl RunResult {
    fn from_counts(attempts: SampleCount, inside: u64) -> Self {
        let attempts = attempts.get();
        debug_assert!(inside <= attempts);
        Self {
            attempts,
            inside,
            estimate: 4.0 * (inside as f64 / attempts as f64),
        }
    }

    /// Absolute distance from `std::f64::consts::PI`.
    pub fn abs_error(&self) -> f64 {
        (std::f64::consts::PI - self.estimate).abs()
    }
}

impl fmt::Display for RunResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Final pi estimate from {} attempts = {}",
            self.attempts, self.estimate
        )
    }
}

/// Estimates pi from `count` sample points drawn from `source`.
///
/// # Errors
///
/// Returns [`EstimateError::InvalidArgument`] when `count` is zero.
pub fn estimate_pi<R: RandomSource + ?Sized>(
    count: u64,
    source: &mut R,
) -> Result<RunResult, EstimateError> {
    let count = SampleCount::try_from(count)?;
    Ok(sample(count, source))
}

fn sample<R: RandomSource + ?Sized>(count: SampleCount, source: &mut R) -> RunResult {
    let mut inside = 0u64;
    for _ in 0..count.get() {
        if SamplePoint::draw(source).is_inside() {
            inside += 1;
        }
    }
    RunResult::from_counts(count, inside)
}

/// Estimator that owns its random source.
///
/// Use this when the count has already been validated (e.g. parsed from the
/// command line); the typed count makes `run` infallible.
pub struct Estimator<R: RandomSource> {
    source: R,
}

impl<R: RandomSource> Estimator<R> {
    /// Creates an estimator drawing from `source`.
    pub fn new(source: R) -> Self {
        Self { source }
    }

    /// Runs one estimate over `count` sample points.
    pub fn run(&mut self, count: SampleCount) -> RunResult {
        sample(count, &mut self.source)
    }

    /// Returns the underlying random source.
    pub fn source(&self) -> &R {
        &self.source
    }
}
