//! Domain model for user identity and sign-in verification.

mod account;
mod error;
mod ids;
mod sign_in;

pub use account::{SessionIdentity, UserAccount};
pub use error::IdentityDomainError;
pub use ids::{SessionToken, UserId};
pub use sign_in::{SignInDecision, SignInMethod};
