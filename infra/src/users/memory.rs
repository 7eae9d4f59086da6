//! In-memory implementation of the UserRepository trait.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::info;

use sg_core::domain::entities::{User, UserId};
use sg_core::errors::DomainError;
use sg_core::repositories::UserRepository;

/// User store held in process memory
///
/// Suitable for single-process deployments and tests; records are lost on
/// restart, which also drops any recorded credential invalidation.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<UserId, User>>,
}

impl InMemoryUserRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository holding `users`
    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        Self {
            users: RwLock::new(users.into_iter().map(|user| (user.id, user)).collect()),
        }
    }

    /// Insert or replace a user
    pub async fn insert(&self, user: User) {
        self.users.write().await.insert(user.id, user);
    }

    /// Remove a user, returning the removed record
    pub async fn remove(&self, id: UserId) -> Option<User> {
        self.users.write().await.remove(&id)
    }

    /// Record a credential invalidation (password change, forced logout)
    ///
    /// Tokens issued before `timestamp` (Unix seconds) stop verifying.
    /// Returns `false` when the user does not exist.
    pub async fn invalidate_tokens(&self, id: UserId, timestamp: i64) -> bool {
        match self.users.write().await.get_mut(&id) {
            Some(user) => {
                user.invalidate_tokens_at(timestamp);
                info!(user_id = %id, invalidated_at = timestamp, "Invalidated user tokens");
                true
            }
            None => false,
        }
    }

    /// Number of stored users
    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    /// Whether the store is empty
    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, DomainError> {
        Ok(self.users.read().await.get(&id).cloned())
    }
}
