//! Custom error types for the budget tracker
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for budget tracker operations
#[derive(Error, Debug)]
pub enum TrackerError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// A value that should be a number could not be parsed
    #[error("Invalid input. Please enter a numeric value.")]
    InvalidNumber(String),

    /// A number was entered where only non-negative values are accepted
    #[error("Please enter a positive number.")]
    NegativeAmount(String),

    /// A number above the largest amount the tracker accepts
    #[error(
        "Please enter an amount no larger than {}.",
        crate::models::MAX_AMOUNT.format_plain()
    )]
    AmountTooLarge(String),

    /// Input was not one of the allowed options
    #[error("Invalid choice. Please enter one of the following: {}", .options.join("/"))]
    InvalidChoice { input: String, options: Vec<String> },

    /// A constructor argument broke its contract
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Category name outside Needs/Wants/Savings
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Chart rendering errors
    #[error("Chart error: {0}")]
    Chart(String),
}

impl TrackerError {
    /// Create an "invalid choice" error from the offending input and the allowed options
    pub fn invalid_choice<S: AsRef<str>>(input: impl Into<String>, options: &[S]) -> Self {
        Self::InvalidChoice {
            input: input.into(),
            options: options.iter().map(|o| o.as_ref().to_string()).collect(),
        }
    }

    /// Check if this error should lead to a re-prompt rather than an abort
    pub fn is_recoverable_input(&self) -> bool {
        matches!(
            self,
            Self::InvalidNumber(_)
                | Self::NegativeAmount(_)
                | Self::AmountTooLarge(_)
                | Self::InvalidChoice { .. }
        )
    }
}

impl From<std::io::Error> for TrackerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for TrackerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for TrackerError {
    fn from(err: csv::Error) -> Self {
        Self::Export(err.to_string())
    }
}

/// Result type alias for budget tracker operations
pub type TrackerResult<T> = Result<T, TrackerError>;
