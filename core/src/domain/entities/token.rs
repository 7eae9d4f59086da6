//! Token entities for JWT-based session authentication.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use super::scope::Scope;
use super::user::{UserId, UserRole};

/// Lifetime granted to session tokens in desktop-extension mode (99 years)
pub const UNBOUNDED_LIFETIME_DAYS: i64 = 365 * 99;

/// Claims structure for JWT payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub id: i64,

    /// Login name at issuance time
    pub username: String,

    /// Role at issuance time
    pub role: i32,

    /// Scope selecting the signing secret
    #[serde(default)]
    pub scope: Scope,

    /// Whether the user must change their password before doing anything else
    #[serde(rename = "forceChangePassword", default)]
    pub force_change_password: bool,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp, absent for tokens that never expire
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
}

impl Claims {
    /// Creates claims for a subject
    ///
    /// # Arguments
    ///
    /// * `subject` - The identity the token represents
    /// * `scope` - Scope of the token
    /// * `issued_at` - Issuance instant
    /// * `expires_at` - Expiry instant, `None` for a token that never expires
    pub fn new(
        subject: &TokenSubject,
        scope: Scope,
        issued_at: DateTime<Utc>,
        expires_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id: subject.id.0,
            username: subject.username.clone(),
            role: subject.role.0,
            scope,
            force_change_password: subject.force_change_password,
            iat: issued_at.timestamp(),
            exp: expires_at.map(|at| at.timestamp()),
        }
    }

    /// Checks if the claims have expired at the given instant
    ///
    /// A token is still valid during the second named by `exp`.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        match self.exp {
            Some(exp) => now.timestamp() > exp,
            None => false,
        }
    }

    /// Expiry as a timestamp, `None` when the token never expires
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.exp.and_then(|exp| Utc.timestamp_opt(exp, 0).single())
    }

    /// Gets the user ID from the claims
    pub fn user_id(&self) -> UserId {
        UserId(self.id)
    }
}

/// Identity a token is issued for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenSubject {
    pub id: UserId,
    pub username: String,
    pub role: UserRole,
    pub force_change_password: bool,
}

impl TokenSubject {
    pub fn new(id: UserId, username: impl Into<String>, role: UserRole) -> Self {
        Self {
            id,
            username: username.into(),
            role,
            force_change_password: false,
        }
    }

    /// Marks the subject as required to change password
    pub fn with_force_change_password(mut self, force: bool) -> Self {
        self.force_change_password = force;
        self
    }
}

/// Identity recovered from a successfully verified token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenData {
    pub id: UserId,
    pub username: String,
    pub role: UserRole,
    /// The raw token the identity was read from
    pub token: String,
    pub force_change_password: bool,
}

impl TokenData {
    /// Builds token data from verified claims and the raw token string
    pub fn from_claims(claims: Claims, token: &str) -> Self {
        Self {
            id: UserId(claims.id),
            username: claims.username,
            role: UserRole(claims.role),
            token: token.to_string(),
            force_change_password: claims.force_change_password,
        }
    }
}

/// A freshly signed token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    /// Compact signed token
    pub token: String,
    /// Expiry embedded in the token, `None` when it never expires
    pub expires_at: Option<DateTime<Utc>>,
}

impl IssuedToken {
    /// Whether the token carries no expiry
    pub fn never_expires(&self) -> bool {
        self.expires_at.is_none()
    }
}
