//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `auth` - Session lifetimes for issued tokens
//! - `environment` - Environment detection
//! - `logging` - Log level and output format
//! - `storage` - Location of the persistent settings record

pub mod auth;
pub mod environment;
pub mod logging;
pub mod storage;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use auth::{AuthConfig, SessionConfig, DEFAULT_KUBECONFIG_EXPIRY, DEFAULT_SESSION_DURATION};
pub use environment::Environment;
pub use logging::{LogFormat, LoggingConfig};
pub use storage::StorageConfig;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Authentication configuration
    #[serde(default)]
    pub auth: AuthConfig,

    /// Settings storage configuration
    #[serde(default)]
    pub storage: StorageConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::for_environment(Environment::default())
    }
}

impl AppConfig {
    /// Create the default configuration for an environment
    pub fn for_environment(environment: Environment) -> Self {
        Self {
            environment,
            auth: AuthConfig::default(),
            storage: StorageConfig::default(),
            logging: LoggingConfig::for_environment(environment),
        }
    }

    /// Load configuration from environment
    ///
    /// Starts from the defaults of the detected environment and applies
    /// `SESSION_DURATION`, `KUBECONFIG_EXPIRY`, `SETTINGS_PATH`, `LOG_LEVEL`
    /// and `LOG_FORMAT` when they are set.
    pub fn from_env() -> Self {
        let mut config = Self::for_environment(Environment::from_env());
        config.auth = AuthConfig::from_env();

        if let Ok(path) = std::env::var("SETTINGS_PATH") {
            config.storage = StorageConfig::new(path);
        }
        if let Ok(level) = std::env::var("LOG_LEVEL") {
            config.logging.level = level;
        }
        if let Some(format) = std::env::var("LOG_FORMAT").ok().and_then(|f| f.parse().ok()) {
            config.logging.format = format;
        }

        config
    }
}
