//! Session lookup and identity resolution ports.

use crate::identity::domain::{SessionToken, UserId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for session lookups.
pub type SessionStoreResult<T> = Result<T, SessionStoreError>;

/// Active-session lookup supplied by the authentication provider.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Returns the user bound to the session, or `None` when the session is
    /// unknown or expired.
    ///
    /// # Errors
    ///
    /// Returns [`SessionStoreError::Unavailable`] when the provider cannot be
    /// reached.
    async fn current_user_id(&self, token: &SessionToken) -> SessionStoreResult<Option<UserId>>;
}

/// Capability handed to services that act on behalf of the signed-in user.
///
/// A `None` resolution is a hard authorisation failure for the caller.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IdentityResolver: Send + Sync {
    /// Resolves the session to a stable user identifier.
    ///
    /// # Errors
    ///
    /// Returns [`SessionStoreError`] when the session backend fails.
    async fn resolve_current_user(&self, token: &SessionToken)
    -> SessionStoreResult<Option<UserId>>;
}

/// Errors returned by session backends.
#[derive(Debug, Clone, Error)]
pub enum SessionStoreError {
    /// The session backend failed.
    #[error("session backend unavailable: {0}")]
    Unavailable(Arc<dyn std::error::Error + Send + Sync>),
}

impl SessionStoreError {
    /// Wraps a backend error.
    pub fn unavailable(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Unavailable(Arc::new(err))
    }
}
