//! In-memory session table.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::identity::{
    domain::{SessionToken, UserId},
    ports::{SessionStore, SessionStoreError, SessionStoreResult},
};

/// Thread-safe in-memory session store.
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionStore {
    sessions: Arc<RwLock<HashMap<SessionToken, UserId>>>,
}

impl InMemorySessionStore {
    /// Creates an empty session store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds a session token to a user, replacing any earlier binding.
    ///
    /// # Errors
    ///
    /// Returns [`SessionStoreError::Unavailable`] when the lock is poisoned.
    pub fn sign_in(&self, token: SessionToken, user_id: UserId) -> SessionStoreResult<()> {
        let mut sessions = self.sessions.write().map_err(|err| {
            SessionStoreError::unavailable(std::io::Error::other(err.to_string()))
        })?;
        sessions.insert(token, user_id);
        Ok(())
    }

    /// Ends a session. Unknown tokens are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`SessionStoreError::Unavailable`] when the lock is poisoned.
    pub fn sign_out(&self, token: &SessionToken) -> SessionStoreResult<()> {
        let mut sessions = self.sessions.write().map_err(|err| {
            SessionStoreError::unavailable(std::io::Error::other(err.to_string()))
        })?;
        sessions.remove(token);
        Ok(())
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn current_user_id(&self, token: &SessionToken) -> SessionStoreResult<Option<UserId>> {
        let sessions = self.sessions.read().map_err(|err| {
            SessionStoreError::unavailable(std::io::Error::other(err.to_string()))
        })?;
        Ok(sessions.get(token).copied())
    }
}
