//! Shared configuration and error response types for SessionGate
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Error response structures and error codes

pub mod config;
pub mod errors;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, AuthConfig, Environment, LogFormat, LoggingConfig, SessionConfig, StorageConfig,
};
pub use errors::{error_codes, ErrorResponse, IntoErrorResponse};
