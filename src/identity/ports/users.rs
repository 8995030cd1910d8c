//! Repository port for the user verification record.

use crate::identity::domain::{UserAccount, UserId};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use thiserror::Error;

/// Result type for user repository operations.
pub type UserRepositoryResult<T> = Result<T, UserRepositoryError>;

/// User record access contract.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Finds a user account by identifier.
    ///
    /// Returns `None` when the user does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`UserRepositoryError::Persistence`] when the read fails.
    async fn find_by_id(&self, id: UserId) -> UserRepositoryResult<Option<UserAccount>>;

    /// Records the verification timestamp for a user and returns the
    /// timestamp the store holds afterwards.
    ///
    /// Implementations only write when no timestamp is present, so repeated
    /// calls keep (and return) the first value.
    ///
    /// # Errors
    ///
    /// Returns [`UserRepositoryError::NotFound`] when the user does not exist.
    async fn update_email_verified(
        &self,
        id: UserId,
        verified_at: DateTime<Utc>,
    ) -> UserRepositoryResult<DateTime<Utc>>;
}

/// Errors returned by user repository implementations.
#[derive(Debug, Clone, Error)]
pub enum UserRepositoryError {
    /// The user was not found.
    #[error("user not found: {0}")]
    NotFound(UserId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl UserRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
