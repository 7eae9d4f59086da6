//! Mock implementation of UserRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;

use crate::domain::entities::{User, UserId};
use crate::errors::DomainError;

use super::UserRepository;

/// Mock user repository for testing
pub struct MockUserRepository {
    users: RwLock<HashMap<UserId, User>>,
    should_fail: AtomicBool,
}

impl MockUserRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            users: RwLock::new(HashMap::new()),
            should_fail: AtomicBool::new(false),
        }
    }

    /// Create a mock repository pre-populated with users
    pub async fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        let repo = Self::new();
        for user in users {
            repo.insert(user).await;
        }
        repo
    }

    /// Insert or replace a user
    pub async fn insert(&self, user: User) {
        self.users.write().await.insert(user.id, user);
    }

    /// Record a credential invalidation for a user
    pub async fn invalidate_tokens(&self, id: UserId, timestamp: i64) {
        if let Some(user) = self.users.write().await.get_mut(&id) {
            user.invalidate_tokens_at(timestamp);
        }
    }

    /// Set whether lookups should fail
    pub fn set_should_fail(&self, should_fail: bool) {
        self.should_fail.store(should_fail, Ordering::SeqCst);
    }
}

impl Default for MockUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, DomainError> {
        if self.should_fail.load(Ordering::SeqCst) {
            return Err(DomainError::storage("mock user lookup", "backend unavailable"));
        }
        Ok(self.users.read().await.get(&id).cloned())
    }
}
