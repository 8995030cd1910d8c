//! In-memory user verification records.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::identity::{
    domain::{UserAccount, UserId},
    ports::{UserRepository, UserRepositoryError, UserRepositoryResult},
};

/// Thread-safe in-memory user repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<UserId, UserAccount>>>,
}

impl InMemoryUserRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a user account.
    ///
    /// Account creation belongs to the authentication provider; this hook
    /// exists so tests and local runs can seed users.
    ///
    /// # Errors
    ///
    /// Returns [`UserRepositoryError::Persistence`] when the lock is poisoned.
    pub fn insert(&self, account: UserAccount) -> UserRepositoryResult<()> {
        let mut users = self.users.write().map_err(|err| {
            UserRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        users.insert(account.id(), account);
        Ok(())
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: UserId) -> UserRepositoryResult<Option<UserAccount>> {
        let users = self.users.read().map_err(|err| {
            UserRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(users.get(&id).cloned())
    }

    async fn update_email_verified(
        &self,
        id: UserId,
        verified_at: DateTime<Utc>,
    ) -> UserRepositoryResult<DateTime<Utc>> {
        let mut users = self.users.write().map_err(|err| {
            UserRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let account = users.get_mut(&id).ok_or(UserRepositoryError::NotFound(id))?;
        account.mark_verified(verified_at);
        account.email_verified().ok_or_else(|| {
            UserRepositoryError::persistence(std::io::Error::other(
                "verification timestamp missing after update",
            ))
        })
    }
}
