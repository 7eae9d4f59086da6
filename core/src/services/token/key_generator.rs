//! Random key generation for signing secrets

use rand::{rngs::OsRng, RngCore};
use tracing::error;

use crate::errors::{DomainError, TokenError};

/// Source of cryptographically secure random keys
pub trait KeyGenerator: Send + Sync {
    /// Generate `size` random bytes
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<u8>)` - Exactly `size` random bytes
    /// * `Err(DomainError)` - The entropy source failed
    fn generate(&self, size: usize) -> Result<Vec<u8>, DomainError>;
}

/// Key generator backed by the operating system's CSPRNG
#[derive(Debug, Clone, Copy, Default)]
pub struct OsKeyGenerator;

impl KeyGenerator for OsKeyGenerator {
    fn generate(&self, size: usize) -> Result<Vec<u8>, DomainError> {
        let mut key = vec![0u8; size];
        OsRng.try_fill_bytes(&mut key).map_err(|e| {
            error!("Failed to read from the OS random source: {}", e);
            DomainError::Token(TokenError::SecretGenerationFailed)
        })?;
        Ok(key)
    }
}
