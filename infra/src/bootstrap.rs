//! Process bootstrap: configuration loading and token service wiring

use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::{debug, info};

use sg_core::domain::entities::Settings;
use sg_core::repositories::UserRepository;
use sg_core::services::token::TokenService;
use sg_shared::config::{AppConfig, Environment};

use crate::settings::JsonFileSettingsRepository;

/// Token service as assembled by [`build_token_service`]
pub type AppTokenService<U> = TokenService<JsonFileSettingsRepository, U>;

/// Load configuration from `.env` files and the process environment
///
/// The environment-specific file (`.env.production`, ...) is read first,
/// then `.env`. Variables already set in the process are never overridden.
pub fn load_config() -> AppConfig {
    let env_file = Environment::from_env().env_file();

    if dotenvy::from_filename(&env_file).is_ok() {
        debug!(file = %env_file, "Loaded environment file");
    }
    dotenvy::dotenv().ok();

    AppConfig::from_env()
}

/// Build the token service for `config`
///
/// Settings are stored as JSON at `config.storage.settings_path`; until that
/// file exists, its kubeconfig expiry defaults to the configured one.
pub async fn build_token_service<U>(config: &AppConfig, users: Arc<U>) -> Result<AppTokenService<U>>
where
    U: UserRepository + ?Sized,
{
    let defaults = Settings {
        kubeconfig_expiry: config.auth.session.kubeconfig_expiry.clone(),
        ..Default::default()
    };
    let settings = Arc::new(
        JsonFileSettingsRepository::new(&config.storage.settings_path).with_defaults(defaults),
    );

    let service = TokenService::new(config.auth.session_duration(), settings, users)
        .await
        .with_context(|| {
            format!(
                "Failed to start token service with settings at {}",
                config.storage.settings_path.display()
            )
        })?;

    info!(
        environment = %config.environment,
        session_duration = config.auth.session_duration(),
        settings_path = %config.storage.settings_path.display(),
        "Token service ready"
    );

    Ok(service)
}
