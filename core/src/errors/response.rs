//! Mapping of domain errors onto the caller-facing `ErrorResponse`
//!
//! Verification failures become a generic "not authenticated" response with
//! no hint of the underlying cause. Everything else means the token system
//! could not serve the request.

use sg_shared::errors::{error_codes, ErrorResponse, IntoErrorResponse};

use super::{DomainError, TokenError};

const NOT_AUTHENTICATED: &str = "Not authenticated";
const AUTH_UNAVAILABLE: &str = "Authentication system unavailable";

impl IntoErrorResponse for TokenError {
    fn to_error_response(&self) -> ErrorResponse {
        if self.is_authentication_failure() {
            ErrorResponse::new(error_codes::UNAUTHORIZED, NOT_AUTHENTICATED)
        } else {
            ErrorResponse::new(error_codes::AUTH_UNAVAILABLE, AUTH_UNAVAILABLE)
        }
    }
}

impl IntoErrorResponse for DomainError {
    fn to_error_response(&self) -> ErrorResponse {
        match self {
            DomainError::Token(err) => err.to_error_response(),
            DomainError::Validation { message } => {
                ErrorResponse::new(error_codes::VALIDATION_ERROR, message.clone())
            }
            DomainError::NotFound { resource } => {
                ErrorResponse::new(error_codes::NOT_FOUND, format!("{} not found", resource))
            }
            DomainError::Storage { .. } | DomainError::Internal { .. } => {
                ErrorResponse::new(error_codes::AUTH_UNAVAILABLE, AUTH_UNAVAILABLE)
            }
        }
    }
}

impl From<TokenError> for ErrorResponse {
    fn from(err: TokenError) -> Self {
        err.to_error_response()
    }
}

impl From<DomainError> for ErrorResponse {
    fn from(err: DomainError) -> Self {
        err.to_error_response()
    }
}
