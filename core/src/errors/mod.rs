//! Domain-specific error types and error handling.

mod types;


pub use types::ValidationError;

use radar_shared::error_codes;
use thiserror::Error;

/// Core domain errors
///
/// Every fallible operation in the services returns one of these. Collaborator
/// failures (store, notifier) are surfaced as-is and never retried here.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Invalid or expired verification code")]
    InvalidCode,

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Resource already exists: {resource}")]
    AlreadyExists { resource: String },

    #[error("Store unavailable: {message}")]
    StoreUnavailable { message: String },

    #[error("Notifier failure: {message}")]
    NotifierFailure { message: String },
}

impl DomainError {
    /// Stable machine-readable code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            DomainError::NotFound { .. } => error_codes::NOT_FOUND,
            DomainError::InvalidCode => error_codes::VERIFICATION_CODE_INVALID,
            DomainError::Validation(_) => error_codes::VALIDATION_ERROR,
            DomainError::AlreadyExists { .. } => error_codes::ALREADY_EXISTS,
            DomainError::StoreUnavailable { .. } => error_codes::STORE_UNAVAILABLE,
            DomainError::NotifierFailure { .. } => error_codes::NOTIFIER_FAILURE,
        }
    }

    /// Whether the failure originated in a collaborator rather than the input
    pub fn is_collaborator_failure(&self) -> bool {
        matches!(
            self,
            DomainError::StoreUnavailable { .. } | DomainError::NotifierFailure { .. }
        )
    }

    pub fn not_found(resource: impl Into<String>) -> Self {
        DomainError::NotFound { resource: resource.into() }
    }

    pub fn store_unavailable(message: impl Into<String>) -> Self {
        DomainError::StoreUnavailable { message: message.into() }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
