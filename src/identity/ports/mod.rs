//! Port contracts for identity resolution.
//!
//! Ports define infrastructure-agnostic interfaces used by identity services
//! and by other contexts that need to know who is signed in.

pub mod session;
pub mod users;

pub use session::{IdentityResolver, SessionStore, SessionStoreError, SessionStoreResult};
pub use users::{UserRepository, UserRepositoryError, UserRepositoryResult};

#[cfg(test)]
pub use session::{MockIdentityResolver, MockSessionStore};
#[cfg(test)]
pub use users::MockUserRepository;
