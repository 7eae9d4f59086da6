//! User entity as seen by the token service.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a user account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub i64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for UserId {
    fn from(id: i64) -> Self {
        UserId(id)
    }
}

/// Role of a user account, carried verbatim in tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserRole(pub i32);

impl UserRole {
    /// Full administrative access
    pub const ADMINISTRATOR: UserRole = UserRole(1);
    /// Regular user
    pub const STANDARD: UserRole = UserRole(2);

    /// Checks whether this is the administrator role
    pub fn is_administrator(&self) -> bool {
        *self == Self::ADMINISTRATOR
    }
}

/// User record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: UserId,

    /// Login name
    pub username: String,

    /// Role granted to the user
    pub role: UserRole,

    /// Unix seconds of the last credential invalidation (password reset, forced logout).
    /// Tokens issued before this instant are rejected.
    #[serde(default)]
    pub token_issue_at: i64,
}

impl User {
    /// Creates a new User instance with no recorded invalidation
    pub fn new(id: UserId, username: impl Into<String>, role: UserRole) -> Self {
        Self {
            id,
            username: username.into(),
            role,
            token_issue_at: 0,
        }
    }

    /// Records a credential invalidation at the given Unix timestamp
    pub fn invalidate_tokens_at(&mut self, timestamp: i64) {
        self.token_issue_at = timestamp;
    }
}
