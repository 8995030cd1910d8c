//! Service layer resolving sessions and maintaining account verification.

use crate::identity::{
    domain::{SessionIdentity, SessionToken, SignInDecision, SignInMethod, UserAccount, UserId},
    ports::{
        IdentityResolver, SessionStore, SessionStoreError, SessionStoreResult, UserRepository,
        UserRepositoryError,
    },
};
use async_trait::async_trait;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Service-level errors for identity operations.
#[derive(Debug, Error)]
pub enum IdentityServiceError {
    /// Session lookup failed.
    #[error(transparent)]
    Session(#[from] SessionStoreError),
    /// User record access failed.
    #[error(transparent)]
    Repository(#[from] UserRepositoryError),
    /// A linked account referenced a user that does not exist.
    #[error("unknown user: {0}")]
    UnknownUser(UserId),
}

/// Result type for identity service operations.
pub type IdentityServiceResult<T> = Result<T, IdentityServiceError>;

/// Identity resolution and verification service.
#[derive(Clone)]
pub struct IdentityService<S, U, C>
where
    S: SessionStore,
    U: UserRepository + ?Sized,
    C: Clock + Send + Sync,
{
    sessions: Arc<S>,
    users: Arc<U>,
    clock: Arc<C>,
}

impl<S, U, C> IdentityService<S, U, C>
where
    S: SessionStore,
    U: UserRepository + ?Sized,
    C: Clock + Send + Sync,
{
    /// Creates a new identity service.
    #[must_use]
    pub const fn new(sessions: Arc<S>, users: Arc<U>, clock: Arc<C>) -> Self {
        Self {
            sessions,
            users,
            clock,
        }
    }

    /// Resolves the session and attaches the user's current verification
    /// timestamp.
    ///
    /// A session whose user record has disappeared still resolves, with no
    /// verification timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityServiceError`] when the session backend or the user
    /// store fails.
    pub async fn session_identity(
        &self,
        token: &SessionToken,
    ) -> IdentityServiceResult<Option<SessionIdentity>> {
        let Some(user_id) = self.sessions.current_user_id(token).await? else {
            return Ok(None);
        };
        let account = self.users.find_by_id(user_id).await?;
        Ok(Some(SessionIdentity {
            user_id,
            email_verified: account.and_then(|found| found.email_verified()),
        }))
    }

    /// Marks the user verified after a third-party account was linked.
    ///
    /// The first recorded timestamp is kept; later calls leave the account
    /// untouched and do not write to the store. The returned account carries
    /// the timestamp the store holds, which may predate this call when
    /// another link won the race.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityServiceError::UnknownUser`] when the user does not
    /// exist, or [`IdentityServiceError::Repository`] when the store fails.
    pub async fn on_account_linked(&self, user_id: UserId) -> IdentityServiceResult<UserAccount> {
        let mut account = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or(IdentityServiceError::UnknownUser(user_id))?;

        let verified_at = self.clock.utc();
        if !account.mark_verified(verified_at) {
            debug!(%user_id, "account already verified; link ignored");
            return Ok(account);
        }

        let stored_at = self
            .users
            .update_email_verified(user_id, verified_at)
            .await
            .map_err(|err| match err {
                UserRepositoryError::NotFound(id) => IdentityServiceError::UnknownUser(id),
                other @ UserRepositoryError::Persistence(_) => other.into(),
            })?;
        if stored_at == verified_at {
            info!(%user_id, "account verified through linked provider");
        } else {
            debug!(%user_id, "account was verified concurrently; keeping stored timestamp");
        }
        Ok(UserAccount::new(user_id).with_email_verified(stored_at))
    }

    /// Decides whether a sign-in attempt may proceed.
    ///
    /// Only credentials sign-ins are gated: they require a verified account.
    /// Provider sign-ins are allowed without consulting the user store.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityServiceError::Repository`] when the user store fails.
    pub async fn gate_sign_in(
        &self,
        user_id: UserId,
        method: &SignInMethod,
    ) -> IdentityServiceResult<SignInDecision> {
        if !method.requires_verification() {
            return Ok(SignInDecision::Allow);
        }

        let verified = self
            .users
            .find_by_id(user_id)
            .await?
            .is_some_and(|account| account.is_verified());
        if verified {
            Ok(SignInDecision::Allow)
        } else {
            warn!(%user_id, "credentials sign-in denied for unverified account");
            Ok(SignInDecision::Deny)
        }
    }
}

#[async_trait]
impl<S, U, C> IdentityResolver for IdentityService<S, U, C>
where
    S: SessionStore,
    U: UserRepository + ?Sized,
    C: Clock + Send + Sync,
{
    async fn resolve_current_user(
        &self,
        token: &SessionToken,
    ) -> SessionStoreResult<Option<UserId>> {
        self.sessions.current_user_id(token).await
    }
}
