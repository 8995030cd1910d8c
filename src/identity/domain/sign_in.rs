//! Sign-in methods and the verification gate outcome.

use serde::{Deserialize, Serialize};

/// How a user is attempting to sign in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "provider", rename_all = "snake_case")]
pub enum SignInMethod {
    /// Email and password checked by this system.
    Credentials,
    /// A third-party provider that has already verified the user.
    Provider(String),
}

impl SignInMethod {
    /// Returns `true` for sign-ins that must pass the verification gate.
    #[must_use]
    pub const fn requires_verification(&self) -> bool {
        matches!(self, Self::Credentials)
    }
}

/// Outcome of the credentials sign-in gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignInDecision {
    /// The sign-in may proceed.
    Allow,
    /// The sign-in is refused.
    Deny,
}

impl SignInDecision {
    /// Returns `true` when the sign-in may proceed.
    #[must_use]
    pub const fn is_allowed(self) -> bool {
        matches!(self, Self::Allow)
    }
}
