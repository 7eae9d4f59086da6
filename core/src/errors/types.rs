//! Token-specific error types
//!
//! `TokenError` is what callers see. `VerificationFailure` records why a
//! presented token was refused; it is only ever logged and always surfaces
//! as `TokenError::InvalidToken`.

use thiserror::Error;

/// Token-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Invalid session duration: {value}")]
    InvalidSessionDuration { value: String },

    #[error("Unable to generate secret key")]
    SecretGenerationFailed,

    #[error("Invalid token scope: {scope}")]
    InvalidScope { scope: String },

    #[error("Token generation failed")]
    TokenGenerationFailed,

    #[error("Invalid JWT token")]
    InvalidToken,
}

impl TokenError {
    /// Whether the error means "not authenticated" rather than "auth system unavailable"
    pub fn is_authentication_failure(&self) -> bool {
        matches!(self, TokenError::InvalidToken)
    }
}

/// Internal cause of a rejected token
#[derive(Error, Debug)]
pub(crate) enum VerificationFailure {
    #[error("malformed token: {0}")]
    Malformed(String),

    #[error("unexpected signing algorithm")]
    UnexpectedAlgorithm,

    #[error("signature verification failed")]
    BadSignature,

    #[error("token expired at {expired_at}")]
    Expired { expired_at: i64 },

    #[error("user {user_id} lookup failed: {reason}")]
    UserLookup { user_id: i64, reason: String },

    #[error("token issued at {issued_at} predates credential invalidation at {invalidated_at}")]
    Revoked { issued_at: i64, invalidated_at: i64 },
}

impl From<VerificationFailure> for TokenError {
    fn from(_: VerificationFailure) -> Self {
        TokenError::InvalidToken
    }
}

impl From<jsonwebtoken::errors::Error> for VerificationFailure {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        use jsonwebtoken::errors::ErrorKind;

        match err.kind() {
            ErrorKind::InvalidSignature => VerificationFailure::BadSignature,
            ErrorKind::InvalidAlgorithm | ErrorKind::InvalidAlgorithmName => {
                VerificationFailure::UnexpectedAlgorithm
            }
            _ => VerificationFailure::Malformed(err.to_string()),
        }
    }
}
