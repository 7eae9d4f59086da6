//! JSON file implementation of the SettingsRepository trait.
//!
//! The record is kept as pretty-printed JSON and rewritten whole on every
//! update. Writes go to a sibling `.tmp` file that is renamed over the
//! target, so a crash mid-write leaves either the old or the new record on
//! disk, never a truncated one.

use async_trait::async_trait;
use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use sg_core::domain::entities::Settings;
use sg_core::errors::DomainError;
use sg_core::repositories::SettingsRepository;

use crate::error::InfraError;

/// Settings repository backed by a single JSON file
pub struct JsonFileSettingsRepository {
    path: PathBuf,
    /// Returned while the file does not exist yet
    defaults: Settings,
    /// Serializes writers within this process
    write_lock: Mutex<()>,
}

impl JsonFileSettingsRepository {
    /// Create a repository for the file at `path`
    ///
    /// The file and its parent directory are created on the first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            defaults: Settings::default(),
            write_lock: Mutex::new(()),
        }
    }

    /// Use `defaults` as the record until one has been written
    pub fn with_defaults(mut self, defaults: Settings) -> Self {
        self.defaults = defaults;
        self
    }

    /// Location of the settings file
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> Result<Settings, InfraError> {
        match fs::read(&self.path).await {
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(|source| {
                warn!(path = %self.path.display(), error = %source, "Settings file is not valid JSON");
                InfraError::Corrupted {
                    path: self.path.clone(),
                    source,
                }
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No settings file yet, using defaults");
                Ok(self.defaults.clone())
            }
            Err(e) => Err(InfraError::io(&self.path, e)),
        }
    }

    async fn store(&self, settings: &Settings) -> Result<(), InfraError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| InfraError::io(parent, e))?;
        }

        let json = serde_json::to_vec_pretty(settings)?;
        let temp_path = self.temp_path();

        fs::write(&temp_path, json)
            .await
            .map_err(|e| InfraError::io(&temp_path, e))?;
        restrict_permissions(&temp_path).await?;
        fs::rename(&temp_path, &self.path)
            .await
            .map_err(|e| InfraError::io(&self.path, e))?;

        debug!(path = %self.path.display(), "Settings written");
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_else(|| OsString::from("settings.json"));
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

/// The record holds a signing secret: owner read/write only
#[cfg(unix)]
async fn restrict_permissions(path: &Path) -> Result<(), InfraError> {
    use std::os::unix::fs::PermissionsExt;

    fs::set_permissions(path, std::fs::Permissions::from_mode(0o600))
        .await
        .map_err(|e| InfraError::io(path, e))
}

#[cfg(not(unix))]
async fn restrict_permissions(_path: &Path) -> Result<(), InfraError> {
    Ok(())
}

#[async_trait]
impl SettingsRepository for JsonFileSettingsRepository {
    async fn settings(&self) -> Result<Settings, DomainError> {
        Ok(self.load().await?)
    }

    async fn update_settings(&self, settings: Settings) -> Result<(), DomainError> {
        let _guard = self.write_lock.lock().await;
        Ok(self.store(&settings).await?)
    }
}
