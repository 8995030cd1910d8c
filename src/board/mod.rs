//! Client-side task board: the collection view-model and the submission
//! boundary between the wizard and the mutation service.
//!
//! Mutations run one at a time. After every mutation attempt, successful or
//! not, the collection is re-fetched from the store so the cached list never
//! drifts for longer than one refresh.

mod collection;
mod controller;
mod gateway;
mod notification;

pub use collection::TaskCollection;
pub use controller::TaskBoard;
pub use gateway::TaskGateway;
pub use notification::{Notification, NotificationVariant};

#[cfg(test)]
pub use gateway::MockTaskGateway;
