//! In-memory identity adapters for tests and the in-memory storage mode.

mod session;
mod users;

pub use session::InMemorySessionStore;
pub use users::InMemoryUserRepository;
