//! Sample points and validated sample counts.

use crate::error::EstimateError;
use montepi_env::RandomSource;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU64;
use std::str::FromStr;

/// A point in the unit square, drawn once and discarded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplePoint {
    pub x: f64,
    pub y: f64,
}

impl SamplePoint {
    /// Draws a point from `source` (x first, then y).
    pub fn draw<R: RandomSource + ?Sized>(source: &mut R) -> Self {
        let x = source.next_unit();
        let y = source.next_unit();
        Self { x, y }
    }

    /// True when the point lies strictly inside the quarter unit circle.
    pub fn is_inside(&self) -> bool {
        self.x * self.x + self.y * self.y < 1.0
    }
}

/// A positive number of sample points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct SampleCount(NonZeroU64);

impl SampleCount {
    /// Returns the count as a plain integer.
    pub fn get(self) -> u64 {
        self.0.get()
    }
}

impl TryFrom<u64> for SampleCount {
    type Error = EstimateError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        NonZeroU64::new(value)
            .map(SampleCount)
            .ok_or_else(|| EstimateError::invalid("sample count must be a positive integer, got 0"))
    }
}

impl From<SampleCount> for u64 {
    fn from(count: SampleCount) -> Self {
        count.get()
    }
}

impl fmt::Display for SampleCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SampleCount {
    type Err = EstimateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(EstimateError::invalid("sample count is required"));
        }

        // Parse signed first so "-5" reports as negative, not as garbage
        let value: i128 = trimmed
            .parse()
            .map_err(|_| EstimateError::invalid(format!("'{}' is not an integer", s)))?;

        if value < 0 {
            return Err(EstimateError::invalid(format!(
                "sample count must be a positive integer, got {}",
                value
            )));
        }

        let value = u64::try_from(value)
            .map_err(|_| EstimateError::invalid(format!("'{}' is too large", s)))?;
        SampleCount::try_from(value)
    }
}
