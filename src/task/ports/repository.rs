//! Repository port for owner-scoped task persistence.

use crate::identity::domain::UserId;
use crate::task::domain::{NewTask, Task, TaskId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task persistence contract.
///
/// Every mutation is scoped to a single owner's records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Inserts a new task and returns the identifier the store assigned.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the write is
    /// rejected.
    async fn insert(&self, task: &NewTask) -> TaskRepositoryResult<TaskId>;

    /// Deletes the task only if it belongs to `owner_id`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] both when the task does not
    /// exist and when it belongs to someone else.
    async fn delete_owned(&self, id: TaskId, owner_id: UserId) -> TaskRepositoryResult<()>;

    /// Returns the owner's tasks, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the read fails.
    async fn list_by_owner(&self, owner_id: UserId) -> TaskRepositoryResult<Vec<Task>>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// No task with this identifier is owned by the requesting user.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
