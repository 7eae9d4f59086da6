//! Token scopes.
//!
//! Every scope selects exactly one signing secret and its lifetime policy.
//! Adding a scope means adding a variant here and a slot in the secret table.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::errors::TokenError;

/// Usage scope of a token
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Scope {
    /// Interactive login sessions
    #[default]
    Default,
    /// Tokens embedded in exported kubeconfig files
    KubeConfig,
}

impl Scope {
    /// Every scope, in declaration order
    pub const ALL: [Scope; 2] = [Scope::Default, Scope::KubeConfig];

    /// Wire tag carried in the `scope` claim
    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::Default => "default",
            Scope::KubeConfig => "kubeconfig",
        }
    }

    /// Maps a claim value to a scope, treating anything unrecognised as `Default`
    pub fn from_claim(tag: Option<&str>) -> Self {
        match tag {
            Some("kubeconfig") => Scope::KubeConfig,
            _ => Scope::Default,
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Scope {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Scope::ALL
            .into_iter()
            .find(|scope| scope.as_str() == s)
            .ok_or_else(|| TokenError::InvalidScope {
                scope: s.to_string(),
            })
    }
}

impl Serialize for Scope {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Scope {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = Option::<String>::deserialize(deserializer)?;
        Ok(Scope::from_claim(tag.as_deref()))
    }
}
