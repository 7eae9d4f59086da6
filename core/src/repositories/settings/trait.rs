//! Settings repository trait defining access to the persistent settings record.

use async_trait::async_trait;

use crate::domain::entities::Settings;
use crate::errors::DomainError;

/// Repository trait for the settings record
///
/// The token service reads settings at construction (to load or create the
/// durable kubeconfig secret) and on every issuance (to honour the
/// desktop-extension flag). Implementations own any locking or transaction
/// semantics; the service performs a plain read-modify-write.
///
/// # Example Implementation
/// ```no_run
/// use async_trait::async_trait;
/// use sg_core::repositories::SettingsRepository;
/// use sg_core::domain::entities::Settings;
/// use sg_core::errors::DomainError;
///
/// struct StaticSettings(Settings);
///
/// #[async_trait]
/// impl SettingsRepository for StaticSettings {
///     async fn settings(&self) -> Result<Settings, DomainError> {
///         Ok(self.0.clone())
///     }
///
///     async fn update_settings(&self, _settings: Settings) -> Result<(), DomainError> {
///         Err(DomainError::Internal { message: "read-only".to_string() })
///     }
/// }
/// ```
#[async_trait]
pub trait SettingsRepository: Send + Sync {
    /// Read the current settings record
    ///
    /// # Returns
    /// * `Ok(Settings)` - The stored settings, or defaults if none were saved yet
    /// * `Err(DomainError)` - Storage could not be read
    async fn settings(&self) -> Result<Settings, DomainError>;

    /// Replace the stored settings record
    ///
    /// # Arguments
    /// * `settings` - The complete record to persist
    ///
    /// # Returns
    /// * `Ok(())` - Settings persisted
    /// * `Err(DomainError)` - Storage could not be written
    async fn update_settings(&self, settings: Settings) -> Result<(), DomainError>;
}
