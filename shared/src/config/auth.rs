//! Authentication and session configuration

use serde::{Deserialize, Serialize};

/// Default lifetime of a login session
pub const DEFAULT_SESSION_DURATION: &str = "8h";

/// Default lifetime of a kubeconfig export token ("0" means it never expires)
pub const DEFAULT_KUBECONFIG_EXPIRY: &str = "0";

/// Session configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SessionConfig {
    /// Lifetime of a login session token, as a duration string (e.g. "8h", "1h30m")
    #[serde(default = "default_session_duration")]
    pub duration: String,

    /// Lifetime of kubeconfig export tokens when settings do not override it
    #[serde(default = "default_kubeconfig_expiry")]
    pub kubeconfig_expiry: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            duration: default_session_duration(),
            kubeconfig_expiry: default_kubeconfig_expiry(),
        }
    }
}

impl SessionConfig {
    /// Create a session configuration with the given duration string
    pub fn new(duration: impl Into<String>) -> Self {
        Self {
            duration: duration.into(),
            ..Default::default()
        }
    }
}

/// Complete authentication configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AuthConfig {
    /// Session configuration
    #[serde(default)]
    pub session: SessionConfig,
}

impl AuthConfig {
    /// Create from environment variables
    ///
    /// Reads `SESSION_DURATION` and `KUBECONFIG_EXPIRY`, falling back to defaults.
    pub fn from_env() -> Self {
        let duration = std::env::var("SESSION_DURATION")
            .unwrap_or_else(|_| default_session_duration());
        let kubeconfig_expiry = std::env::var("KUBECONFIG_EXPIRY")
            .unwrap_or_else(|_| default_kubeconfig_expiry());

        Self {
            session: SessionConfig {
                duration,
                kubeconfig_expiry,
            },
        }
    }

    /// Session duration string (backward compatibility with flat configs)
    pub fn session_duration(&self) -> &str {
        &self.session.duration
    }
}

fn default_session_duration() -> String {
    String::from(DEFAULT_SESSION_DURATION)
}

fn default_kubeconfig_expiry() -> String {
    String::from(DEFAULT_KUBECONFIG_EXPIRY)
}
