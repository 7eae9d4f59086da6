//! Settings storage configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where the persistent settings record lives
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Path of the JSON settings file
    #[serde(default = "default_settings_path")]
    pub settings_path: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            settings_path: default_settings_path(),
        }
    }
}

impl StorageConfig {
    /// Create a storage configuration pointing at the given settings file
    pub fn new(settings_path: impl Into<PathBuf>) -> Self {
        Self {
            settings_path: settings_path.into(),
        }
    }
}

fn default_settings_path() -> PathBuf {
    PathBuf::from("data/settings.json")
}
