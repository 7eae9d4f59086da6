//! Token service module for session JWT management
//!
//! This module handles all token-related operations including:
//! - Per-scope signing secrets and their bootstrap
//! - Session and kubeconfig token issuance
//! - Two-phase verification (scope discovery, then signature, expiry and revocation checks)
//! - Runtime adjustment of the session lifetime

mod clock;
mod config;
mod key_generator;
mod scope;
mod secrets;
mod service;

#[cfg(test)]
mod tests;

pub use clock::{Clock, SystemClock};
pub use config::{parse_duration, parse_optional_lifetime, TokenServiceConfig};
pub use key_generator::{KeyGenerator, OsKeyGenerator};
pub use scope::peek_scope;
pub use secrets::{SecretTable, SigningSecret, SECRET_KEY_SIZE};
pub use service::TokenService;
