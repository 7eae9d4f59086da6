//! # Infrastructure Layer
//!
//! Concrete implementations behind the `sg_core` repository traits, plus
//! process bootstrap for the token service.
//!
//! ## Architecture
//!
//! The infrastructure layer contains:
//! - **Settings**: JSON file persistence for the settings record
//! - **Users**: In-memory user store
//! - **Logging**: `tracing` subscriber setup from `LoggingConfig`
//! - **Bootstrap**: Wiring configuration and storage into a `TokenService`

pub mod bootstrap;
pub mod error;
pub mod logging;
pub mod settings;
pub mod users;

pub use bootstrap::{build_token_service, load_config, AppTokenService};
pub use error::InfraError;
pub use logging::init_tracing;
pub use settings::JsonFileSettingsRepository;
pub use users::InMemoryUserRepository;
