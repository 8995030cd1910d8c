//! Cached list of the signed-in user's tasks.

use super::TaskGateway;
use crate::identity::domain::SessionToken;
use crate::task::{
    domain::{Priority, Task},
    services::TaskMutationError,
};
use tracing::warn;

/// Pull-refreshed cache of the owner's tasks.
#[derive(Debug, Clone, Default)]
pub struct TaskCollection {
    tasks: Vec<Task>,
    last_error: Option<TaskMutationError>,
}

impl TaskCollection {
    /// Creates an empty collection.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            tasks: Vec::new(),
            last_error: None,
        }
    }

    /// Re-fetches the tasks.
    ///
    /// On failure the previous tasks are kept and the error is remembered
    /// until the next successful refresh.
    pub async fn refresh<G>(&mut self, gateway: &G, session: &SessionToken)
    where
        G: TaskGateway + ?Sized,
    {
        match gateway.fetch(session).await {
            Ok(tasks) => {
                self.tasks = tasks;
                self.last_error = None;
            }
            Err(err) => {
                warn!(error = %err, "task refresh failed; keeping cached tasks");
                self.last_error = Some(err);
            }
        }
    }

    /// Returns the cached tasks, oldest first.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the error from the most recent refresh, if it failed.
    #[must_use]
    pub const fn last_error(&self) -> Option<&TaskMutationError> {
        self.last_error.as_ref()
    }

    /// Returns the cached tasks with the given priority.
    pub fn with_priority(&self, priority: Priority) -> impl Iterator<Item = &Task> {
        self.tasks
            .iter()
            .filter(move |task| task.priority() == priority)
    }

    /// Returns the cached tasks that take under five minutes.
    pub fn quick_wins(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter().filter(|task| task.time_under_5_min())
    }
}
