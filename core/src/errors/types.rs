//! Input validation errors
//!
//! These errors describe why caller-supplied data was rejected. They are
//! recoverable and are reported back to the caller as a 400-class failure.

use thiserror::Error;

/// Validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required field: {field}")]
    RequiredField { field: String },

    #[error("Invalid format: {field}")]
    InvalidFormat { field: String },

    #[error("Invalid email address")]
    InvalidEmail,

    #[error("Field too long: {field} (max: {max})")]
    TooLong { field: String, max: usize },
}

impl ValidationError {
    /// Name of the offending field
    pub fn field(&self) -> &str {
        match self {
            ValidationError::RequiredField { field }
            | ValidationError::InvalidFormat { field }
            | ValidationError::TooLong { field, .. } => field,
            ValidationError::InvalidEmail => "email",
        }
    }

    pub fn required(field: impl Into<String>) -> Self {
        ValidationError::RequiredField { field: field.into() }
    }

    pub fn invalid_format(field: impl Into<String>) -> Self {
        ValidationError::InvalidFormat { field: field.into() }
    }
}
