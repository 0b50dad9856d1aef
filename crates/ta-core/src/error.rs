//! Error types for indicator and date-window operations.
//!
//! Short or empty input is never an error here: indicators absorb it into
//! sentinel-filled output. Only bad parameters and malformed strings fail.

use thiserror::Error;

/// Result type alias for operations that may fail.
pub type Result<T> = core::result::Result<T, IndicatorError>;

/// Errors that can occur during indicator computation or window parsing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IndicatorError {
    /// Invalid parameter value.
    #[error("Invalid parameter '{name}': {value} (expected {expected})")]
    InvalidParameter {
        /// Name of the parameter.
        name: &'static str,
        /// Provided value as string.
        value: String,
        /// Description of expected value.
        expected: &'static str,
    },

    /// Input could not be interpreted (e.g. a malformed date string).
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl IndicatorError {
    /// Error for an indicator period below 1.
    #[must_use]
    pub fn invalid_period(period: usize) -> Self {
        Self::InvalidParameter {
            name: "period",
            value: period.to_string(),
            expected: "positive integer",
        }
    }
}
