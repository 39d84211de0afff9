//! Core error types for the pricing and scoring engines.
//!
//! Both engines are pure functions over caller-supplied values, so every
//! error here is local to a single calculation call. Nothing is retried and
//! no partial result is ever produced.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the engines.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Pricing calculation failed: {0}")]
    Pricing(#[from] PricingError),
}

/// Errors raised by the pricing pipeline.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PricingError {
    /// A hard precondition on a single input field was violated.
    ///
    /// `field` carries the wire name of the offending input so a UI can
    /// attach the message to that field instead of showing a generic failure.
    #[error("{field} {message}")]
    InvalidInput { field: String, message: String },
}

impl PricingError {
    /// Creates an InvalidInput error for the given field.
    pub fn invalid_input(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Returns the wire name of the field that violated the precondition.
    pub fn field(&self) -> &str {
        match self {
            PricingError::InvalidInput { field, .. } => field,
        }
    }
}

/// Validation errors for user input and data parsing.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Failed to parse decimal number: {0}")]
    DecimalParse(#[from] rust_decimal::Error),
}

// === From implementations for common error types ===

impl From<rust_decimal::Error> for Error {
    fn from(err: rust_decimal::Error) -> Self {
        Error::Validation(ValidationError::DecimalParse(err))
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
