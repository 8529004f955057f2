//! Custom error types for the finance tracker
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::models::Field;

/// The main error type for finance tracker operations
#[derive(Error, Debug)]
pub enum FinanceError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// A numeric input field could not be parsed
    #[error("Invalid number for {field}: '{input}'")]
    InvalidNumber { field: Field, input: String },

    /// An update was requested before any finances were recorded
    #[error("Cannot update {operation}: no finances recorded yet (add an expense first)")]
    Uninitialized { operation: &'static str },

    /// A result would leave the range amounts are kept in
    #[error("Cannot {operation}: amounts would exceed the supported range")]
    OutOfRange { operation: &'static str },
}

impl FinanceError {
    /// Create an "invalid number" error for a field
    pub fn invalid_number(field: Field, input: impl Into<String>) -> Self {
        Self::InvalidNumber {
            field,
            input: input.into(),
        }
    }

    /// Check if this is an input-format error
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::InvalidNumber { .. })
    }

    /// Check if this is an uninitialized-state error
    pub fn is_uninitialized(&self) -> bool {
        matches!(self, Self::Uninitialized { .. })
    }
}

impl From<std::io::Error> for FinanceError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for FinanceError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for finance tracker operations
pub type FinanceResult<T> = Result<T, FinanceError>;
