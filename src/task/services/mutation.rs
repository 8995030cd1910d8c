//! Service layer for owner-gated task creation, deletion and listing.
//!
//! Every entry point normalises internal faults into [`TaskMutationError`].
//! Raw storage and session causes are logged here and never returned.

use crate::identity::{
    domain::{SessionToken, UserId},
    ports::IdentityResolver,
};
use crate::task::{
    domain::{NewTask, Task, TaskDomainError, TaskDraft, TaskId},
    ports::{TaskRepository, TaskRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info, warn};

/// Boundary errors for task mutations.
///
/// Display strings are safe to show to the user.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskMutationError {
    /// The draft is malformed; the user can correct it.
    #[error("Invalid fields!")]
    Validation(#[source] TaskDomainError),
    /// No signed-in user could be resolved.
    #[error("You must be logged in to manage tasks")]
    Unauthenticated,
    /// The store or session backend failed; the cause was logged.
    #[error("Something went wrong. Please try again.")]
    Persistence,
    /// The task does not exist or belongs to another user.
    #[error("Task not found")]
    NotFoundOrForbidden,
}

/// Result type for task mutation operations.
pub type TaskMutationResult<T> = Result<T, TaskMutationError>;

/// Authenticated task mutation service.
#[derive(Clone)]
pub struct TaskMutationService<R, I, C>
where
    R: TaskRepository + ?Sized,
    I: IdentityResolver,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    identity: Arc<I>,
    clock: Arc<C>,
}

impl<R, I, C> TaskMutationService<R, I, C>
where
    R: TaskRepository + ?Sized,
    I: IdentityResolver,
    C: Clock + Send + Sync,
{
    /// Creates a new task mutation service.
    #[must_use]
    pub const fn new(repository: Arc<R>, identity: Arc<I>, clock: Arc<C>) -> Self {
        Self {
            repository,
            identity,
            clock,
        }
    }

    /// Creates a task for the signed-in user.
    ///
    /// The draft is validated before the session is consulted, and the store
    /// is only touched once both checks pass. The new identifier is not
    /// returned; callers re-fetch the collection.
    ///
    /// # Errors
    ///
    /// Returns [`TaskMutationError::Validation`] for malformed drafts,
    /// [`TaskMutationError::Unauthenticated`] when nobody is signed in, and
    /// [`TaskMutationError::Persistence`] when the session backend or the
    /// store fails.
    pub async fn create(&self, draft: &TaskDraft, session: &SessionToken) -> TaskMutationResult<()> {
        let classified = draft.validate().map_err(|err| {
            warn!(error = %err, "rejected task draft");
            TaskMutationError::Validation(err)
        })?;
        let owner_id = self.require_owner(session).await?;

        let new_task = NewTask::new(owner_id, classified, &*self.clock);
        let task_id = self
            .repository
            .insert(&new_task)
            .await
            .map_err(|err| store_failure("create task", &err))?;

        info!(%task_id, %owner_id, priority = %new_task.priority(), "task created");
        Ok(())
    }

    /// Deletes one of the signed-in user's tasks.
    ///
    /// Missing tasks and tasks owned by someone else fail identically.
    ///
    /// # Errors
    ///
    /// Returns [`TaskMutationError::Unauthenticated`] when nobody is signed
    /// in, [`TaskMutationError::NotFoundOrForbidden`] when the caller owns no
    /// such task, and [`TaskMutationError::Persistence`] on backend failure.
    pub async fn delete_task(
        &self,
        task_id: TaskId,
        session: &SessionToken,
    ) -> TaskMutationResult<()> {
        let owner_id = self.require_owner(session).await?;

        match self.repository.delete_owned(task_id, owner_id).await {
            Ok(()) => {
                info!(%task_id, %owner_id, "task deleted");
                Ok(())
            }
            Err(TaskRepositoryError::NotFound(_)) => {
                warn!(%task_id, %owner_id, "delete target missing or not owned");
                Err(TaskMutationError::NotFoundOrForbidden)
            }
            Err(err @ TaskRepositoryError::Persistence(_)) => Err(store_failure("delete task", &err)),
        }
    }

    /// Lists the signed-in user's tasks, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`TaskMutationError::Unauthenticated`] when nobody is signed
    /// in and [`TaskMutationError::Persistence`] on backend failure.
    pub async fn list_tasks(&self, session: &SessionToken) -> TaskMutationResult<Vec<Task>> {
        let owner_id = self.require_owner(session).await?;
        self.repository
            .list_by_owner(owner_id)
            .await
            .map_err(|err| store_failure("list tasks", &err))
    }

    async fn require_owner(&self, session: &SessionToken) -> TaskMutationResult<UserId> {
        match self.identity.resolve_current_user(session).await {
            Ok(Some(user_id)) => Ok(user_id),
            Ok(None) => {
                warn!("task mutation attempted without a signed-in user");
                Err(TaskMutationError::Unauthenticated)
            }
            Err(err) => {
                error!(error = %err, "session resolution failed");
                Err(TaskMutationError::Persistence)
            }
        }
    }
}

fn store_failure(operation: &'static str, err: &TaskRepositoryError) -> TaskMutationError {
    error!(operation, error = %err, "task store failure");
    TaskMutationError::Persistence
}
