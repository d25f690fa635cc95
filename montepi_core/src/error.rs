//! Error types for the estimator.

use thiserror::Error;

/// Errors that can occur when configuring or running an estimate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EstimateError {
    /// Sample count is missing, not an integer, zero, or negative
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl EstimateError {
    /// Creates an invalid-argument error.
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}
