//! Board controller driving the wizard and delete actions.

use super::{Notification, TaskCollection, TaskGateway};
use crate::identity::domain::SessionToken;
use crate::task::{
    domain::TaskId,
    services::{MutationOutcome, TASK_CREATED_MESSAGE, TASK_DELETED_MESSAGE},
};
use crate::wizard::TaskWizard;
use std::sync::Arc;

const CREATE_FAILED_TITLE: &str = "Task creation failed!";
const DELETE_FAILED_TITLE: &str = "Task deletion failed!";

/// The signed-in user's board.
pub struct TaskBoard<G>
where
    G: TaskGateway + ?Sized,
{
    gateway: Arc<G>,
    session: SessionToken,
    collection: TaskCollection,
}

impl<G> TaskBoard<G>
where
    G: TaskGateway + ?Sized,
{
    /// Creates a board with an empty collection.
    #[must_use]
    pub const fn new(gateway: Arc<G>, session: SessionToken) -> Self {
        Self {
            gateway,
            session,
            collection: TaskCollection::new(),
        }
    }

    /// Returns the cached collection.
    #[must_use]
    pub const fn collection(&self) -> &TaskCollection {
        &self.collection
    }

    /// Re-fetches the collection.
    pub async fn refresh(&mut self) {
        self.collection
            .refresh(self.gateway.as_ref(), &self.session)
            .await;
    }

    /// Persists the wizard's submitted draft, if it has one.
    ///
    /// Taking `&mut self` keeps mutations strictly sequential; the wizard
    /// stays input-disabled until this returns it settled.
    ///
    /// Returns the settled wizard and, when a submission happened, the
    /// notification describing it. A wizard without a pending draft is
    /// returned unchanged.
    pub async fn submit_wizard(&mut self, wizard: TaskWizard) -> (TaskWizard, Option<Notification>) {
        let Some(draft) = wizard.submitted_draft().cloned() else {
            return (wizard, None);
        };

        let result = self.gateway.create(&draft, &self.session).await;
        self.refresh().await;

        let settled = wizard.settle(result.is_ok());
        let outcome = MutationOutcome::from_result(&result, TASK_CREATED_MESSAGE);
        (
            settled,
            Some(Notification::from_outcome(outcome, CREATE_FAILED_TITLE)),
        )
    }

    /// Deletes a task and reports the outcome.
    ///
    /// The collection is refreshed whether or not the delete succeeded.
    pub async fn delete_task(&mut self, task_id: TaskId) -> Notification {
        let result = self.gateway.delete(task_id, &self.session).await;
        self.refresh().await;

        let outcome = MutationOutcome::from_result(&result, TASK_DELETED_MESSAGE);
        Notification::from_outcome(outcome, DELETE_FAILED_TITLE)
    }
}
