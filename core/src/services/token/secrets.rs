//! Signing secrets, one per token scope
//!
//! The default-scope secret lives only in memory and is regenerated on every
//! start, so a restart logs every session out. The kubeconfig-scope secret is
//! persisted in the settings record the first time the service starts, so
//! exported kubeconfig files keep working across restarts.

use jsonwebtoken::{DecodingKey, EncodingKey};
use std::fmt;
use tracing::info;

use crate::domain::entities::{Scope, Settings};
use crate::errors::{DomainError, TokenError};
use crate::repositories::SettingsRepository;

use super::key_generator::KeyGenerator;

/// Size in bytes of every generated signing secret
pub const SECRET_KEY_SIZE: usize = 32;

/// HMAC key material for one scope
#[derive(Clone)]
pub struct SigningSecret {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl fmt::Debug for SigningSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SigningSecret(..)")
    }
}

impl SigningSecret {
    /// Builds the signing and verification keys from raw secret bytes
    pub fn from_bytes(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
        }
    }

    pub fn encoding_key(&self) -> &EncodingKey {
        &self.encoding_key
    }

    pub fn decoding_key(&self) -> &DecodingKey {
        &self.decoding_key
    }
}

/// One signing secret for each scope
///
/// Immutable once built. Every `Scope` variant has a slot, so a lookup can
/// never miss.
#[derive(Debug, Clone)]
pub struct SecretTable {
    default: SigningSecret,
    kube_config: SigningSecret,
}

impl SecretTable {
    /// Builds a table from explicit secrets
    pub fn new(default: SigningSecret, kube_config: SigningSecret) -> Self {
        Self {
            default,
            kube_config,
        }
    }

    /// Creates the process secrets
    ///
    /// Generates a fresh default-scope secret and loads the kubeconfig secret
    /// from settings, creating and persisting it if it does not exist yet.
    ///
    /// # Returns
    ///
    /// * `Ok(SecretTable)` - All scopes have a secret
    /// * `Err(DomainError)` - Key generation or settings access failed
    pub async fn bootstrap<S>(
        settings: &S,
        key_generator: &dyn KeyGenerator,
    ) -> Result<Self, DomainError>
    where
        S: SettingsRepository + ?Sized,
    {
        let default_secret = generate_secret(key_generator)?;
        let kube_secret = load_or_create_kube_secret(settings, key_generator).await?;

        Ok(Self::new(
            SigningSecret::from_bytes(&default_secret),
            SigningSecret::from_bytes(&kube_secret),
        ))
    }

    /// Secret for a scope
    pub fn get(&self, scope: Scope) -> &SigningSecret {
        match scope {
            Scope::Default => &self.default,
            Scope::KubeConfig => &self.kube_config,
        }
    }
}

fn generate_secret(key_generator: &dyn KeyGenerator) -> Result<Vec<u8>, DomainError> {
    let secret = key_generator.generate(SECRET_KEY_SIZE)?;
    if secret.len() != SECRET_KEY_SIZE {
        return Err(DomainError::Token(TokenError::SecretGenerationFailed));
    }
    Ok(secret)
}

/// Returns the persisted kubeconfig secret, creating it on first use
///
/// Concurrent first starts against one settings store are not coordinated
/// here; the store is expected to serialize them.
async fn load_or_create_kube_secret<S>(
    settings_repository: &S,
    key_generator: &dyn KeyGenerator,
) -> Result<Vec<u8>, DomainError>
where
    S: SettingsRepository + ?Sized,
{
    let settings = settings_repository.settings().await?;

    match settings.kube_secret_key {
        Some(secret) if !secret.is_empty() => Ok(secret),
        _ => {
            let secret = generate_secret(key_generator)?;
            let updated = Settings {
                kube_secret_key: Some(secret.clone()),
                ..settings
            };
            settings_repository.update_settings(updated).await?;
            info!("Created and persisted a new kubeconfig signing secret");
            Ok(secret)
        }
    }
}
