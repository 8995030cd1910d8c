//! Error types for identity domain validation.

use thiserror::Error;

/// Errors returned while constructing identity domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IdentityDomainError {
    /// The session token is empty after trimming.
    #[error("session token must not be empty")]
    EmptySessionToken,

    /// The user identifier is not a valid UUID.
    #[error("invalid user identifier: {0}")]
    InvalidUserId(String),
}
