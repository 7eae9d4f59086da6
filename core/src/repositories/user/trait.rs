//! User repository trait defining the lookup used for token revocation.

use async_trait::async_trait;

use crate::domain::entities::{User, UserId};
use crate::errors::DomainError;

/// Repository trait for reading user records
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by their unique identifier
    ///
    /// # Arguments
    /// * `id` - The identifier of the user
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user found with given ID
    /// * `Err(DomainError)` - Storage or other error occurred
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, DomainError>;
}
