//! Domain-specific error types and error handling.

mod response;
mod types;


pub use types::TokenError;
pub(crate) use types::VerificationFailure;

use thiserror::Error;

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Storage error: {message}")]
    Storage { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Token(#[from] TokenError),
}

impl DomainError {
    /// Wraps a storage failure with the operation that triggered it
    pub fn storage(context: &str, source: impl std::fmt::Display) -> Self {
        DomainError::Storage {
            message: format!("{}: {}", context, source),
        }
    }

    /// Returns `true` when this is the opaque verification failure
    pub fn is_invalid_token(&self) -> bool {
        matches!(self, DomainError::Token(TokenError::InvalidToken))
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
