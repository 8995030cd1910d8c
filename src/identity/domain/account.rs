//! User account verification state.

use super::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The slice of a user record this crate reads and writes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAccount {
    id: UserId,
    email_verified: Option<DateTime<Utc>>,
}

impl UserAccount {
    /// Creates an unverified account.
    #[must_use]
    pub const fn new(id: UserId) -> Self {
        Self {
            id,
            email_verified: None,
        }
    }

    /// Reconstructs an account with a known verification timestamp.
    #[must_use]
    pub const fn with_email_verified(mut self, verified_at: DateTime<Utc>) -> Self {
        self.email_verified = Some(verified_at);
        self
    }

    /// Returns the account identifier.
    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// Returns when the account was verified, if it has been.
    #[must_use]
    pub const fn email_verified(&self) -> Option<DateTime<Utc>> {
        self.email_verified
    }

    /// Returns `true` once a verification timestamp is recorded.
    #[must_use]
    pub const fn is_verified(&self) -> bool {
        self.email_verified.is_some()
    }

    /// Records the verification timestamp unless one is already present.
    ///
    /// Returns `true` when the timestamp was written. An existing timestamp
    /// is never replaced.
    pub const fn mark_verified(&mut self, verified_at: DateTime<Utc>) -> bool {
        if self.email_verified.is_some() {
            return false;
        }
        self.email_verified = Some(verified_at);
        true
    }
}

/// A resolved session enriched with the owner's verification state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionIdentity {
    /// Stable identifier of the signed-in user.
    pub user_id: UserId,
    /// Verification timestamp read from the user store at resolution time.
    pub email_verified: Option<DateTime<Utc>>,
}
