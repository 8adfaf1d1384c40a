//! Custom error types for spendlog
//!
//! This module defines the error hierarchy for the ledger using thiserror
//! for ergonomic error definitions. Every variant is returned as a value;
//! none of them leaves the ledger in a modified state.

use thiserror::Error;

/// The main error type for spendlog operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LedgerError {
    /// Category was empty after trimming
    #[error("Category cannot be empty.")]
    EmptyCategory,

    /// Amount text could not be parsed as a finite number
    #[error("Amount '{0}' is not a valid number.")]
    InvalidAmount(String),

    /// Amount parsed but was zero or negative
    #[error("Amount must be greater than zero (got {0}).")]
    NonPositiveAmount(f64),

    /// Date text is not a real YYYY-MM-DD calendar date
    #[error("Date '{0}' is not a valid YYYY-MM-DD date.")]
    InvalidDate(String),

    /// Operation needs at least one expense
    #[error("The ledger has no expenses.")]
    EmptyLedger,

    /// Export destination could not be written
    #[error("Write failure: {0}")]
    WriteFailure(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors outside of export
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),
}

impl LedgerError {
    /// Check if this error is a rejection from the entry validator
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::EmptyCategory
                | Self::InvalidAmount(_)
                | Self::NonPositiveAmount(_)
                | Self::InvalidDate(_)
        )
    }

    /// Check if this error came from an operation on an empty ledger
    pub fn is_empty_ledger(&self) -> bool {
        matches!(self, Self::EmptyLedger)
    }
}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for spendlog operations
pub type LedgerResult<T> = Result<T, LedgerError>;
