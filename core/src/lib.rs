//! # SessionGate Core
//!
//! Core domain layer for SessionGate: the session token service, the
//! entities it works with, the repository interfaces it depends on, and its
//! error types.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::{
    Claims, IssuedToken, Scope, Settings, TokenData, TokenSubject, User, UserId, UserRole,
};
pub use errors::{DomainError, DomainResult, TokenError};
pub use repositories::{SettingsRepository, UserRepository};
pub use services::token::{
    peek_scope, Clock, KeyGenerator, OsKeyGenerator, SystemClock, TokenService,
    TokenServiceConfig,
};
