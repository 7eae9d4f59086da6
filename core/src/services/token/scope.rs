//! Scope discovery on unverified tokens
//!
//! The verifier has to know which secret to check a signature with before it
//! can trust anything in the token, and the scope that names the secret sits
//! inside the payload. `peek_scope` resolves that by reading exactly one
//! field from the unverified payload. Its output is confined to the closed
//! `Scope` enum and only chooses a key: the chosen key must still verify the
//! signature over the whole payload, scope field included, so a forged scope
//! only selects a key the forger does not hold.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use serde::Deserialize;

use crate::domain::entities::Scope;

#[derive(Deserialize)]
struct ScopeClaim {
    #[serde(default)]
    scope: Option<String>,
}

/// Reads the scope claim of a compact token without verifying it
///
/// Malformed tokens and unknown or missing scopes resolve to
/// `Scope::Default`; verification then fails or succeeds on its own.
pub fn peek_scope(token: &str) -> Scope {
    let mut segments = token.split('.');
    let payload = match (segments.next(), segments.next(), segments.next(), segments.next()) {
        (Some(_), Some(payload), Some(_), None) => payload,
        _ => return Scope::Default,
    };

    URL_SAFE_NO_PAD
        .decode(payload)
        .ok()
        .and_then(|bytes| serde_json::from_slice::<ScopeClaim>(&bytes).ok())
        .map(|claim| Scope::from_claim(claim.scope.as_deref()))
        .unwrap_or_default()
}
