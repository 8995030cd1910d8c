//! Port through which the board reaches the mutation service.

use crate::identity::{domain::SessionToken, ports::IdentityResolver};
use crate::task::{
    domain::{Task, TaskDraft, TaskId},
    ports::TaskRepository,
    services::{TaskMutationResult, TaskMutationService},
};
use async_trait::async_trait;
use mockable::Clock;

/// Task operations available to the board.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskGateway: Send + Sync {
    /// Creates a task from a draft.
    async fn create(&self, draft: &TaskDraft, session: &SessionToken) -> TaskMutationResult<()>;

    /// Deletes a task.
    async fn delete(&self, task_id: TaskId, session: &SessionToken) -> TaskMutationResult<()>;

    /// Fetches the signed-in user's tasks.
    async fn fetch(&self, session: &SessionToken) -> TaskMutationResult<Vec<Task>>;
}

#[async_trait]
impl<R, I, C> TaskGateway for TaskMutationService<R, I, C>
where
    R: TaskRepository + ?Sized,
    I: IdentityResolver,
    C: Clock + Send + Sync,
{
    async fn create(&self, draft: &TaskDraft, session: &SessionToken) -> TaskMutationResult<()> {
        TaskMutationService::create(self, draft, session).await
    }

    async fn delete(&self, task_id: TaskId, session: &SessionToken) -> TaskMutationResult<()> {
        self.delete_task(task_id, session).await
    }

    async fn fetch(&self, session: &SessionToken) -> TaskMutationResult<Vec<Task>> {
        self.list_tasks(session).await
    }
}
