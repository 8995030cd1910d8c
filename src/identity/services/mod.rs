//! Application services for identity resolution and account linking.

mod resolver;

pub use resolver::{IdentityService, IdentityServiceError, IdentityServiceResult};
