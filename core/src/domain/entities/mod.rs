//! Domain entities representing core business objects.

pub mod scope;
pub mod settings;
pub mod token;
pub mod user;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use scope::Scope;
pub use settings::Settings;
pub use token::{Claims, IssuedToken, TokenData, TokenSubject, UNBOUNDED_LIFETIME_DAYS};
pub use user::{User, UserId, UserRole};
