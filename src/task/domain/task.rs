//! Task aggregate root.

use super::{Activity, ClassifiedDraft, Priority, TaskId};
use crate::identity::domain::UserId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A persisted task owned by exactly one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    owner_id: UserId,
    activity: Activity,
    priority: Priority,
    time_under_5_min: bool,
    created_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted owner.
    pub owner_id: UserId,
    /// Persisted activity.
    pub activity: Activity,
    /// Persisted priority.
    pub priority: Priority,
    /// Persisted duration flag.
    pub time_under_5_min: bool,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            owner_id: data.owner_id,
            activity: data.activity,
            priority: data.priority,
            time_under_5_min: data.time_under_5_min,
            created_at: data.created_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the owning user.
    #[must_use]
    pub const fn owner_id(&self) -> UserId {
        self.owner_id
    }

    /// Returns the activity.
    #[must_use]
    pub const fn activity(&self) -> &Activity {
        &self.activity
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the priority rank.
    #[must_use]
    pub const fn priority_rank(&self) -> i16 {
        self.priority.rank()
    }

    /// Returns `true` when the task is ranked urgent.
    #[must_use]
    pub const fn is_urgent(&self) -> bool {
        self.priority.is_urgent()
    }

    /// Returns `true` when the task is ranked important.
    #[must_use]
    pub const fn is_important(&self) -> bool {
        self.priority.is_important()
    }

    /// Returns whether the task takes under five minutes.
    #[must_use]
    pub const fn time_under_5_min(&self) -> bool {
        self.time_under_5_min
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// An owned, classified task waiting for the store to assign its id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    owner_id: UserId,
    draft: ClassifiedDraft,
    created_at: DateTime<Utc>,
}

impl NewTask {
    /// Binds a validated draft to its owner.
    #[must_use]
    pub fn new(owner_id: UserId, draft: ClassifiedDraft, clock: &impl Clock) -> Self {
        Self {
            owner_id,
            draft,
            created_at: clock.utc(),
        }
    }

    /// Returns the owning user.
    #[must_use]
    pub const fn owner_id(&self) -> UserId {
        self.owner_id
    }

    /// Returns the activity.
    #[must_use]
    pub const fn activity(&self) -> &Activity {
        self.draft.activity()
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.draft.priority()
    }

    /// Returns whether the task takes under five minutes.
    #[must_use]
    pub const fn time_under_5_min(&self) -> bool {
        self.draft.time_under_5_min()
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Completes the record with the identifier assigned by the store.
    #[must_use]
    pub fn into_task(self, id: TaskId) -> Task {
        Task {
            id,
            owner_id: self.owner_id,
            activity: self.draft.activity,
            priority: self.draft.priority,
            time_under_5_min: self.draft.time_under_5_min,
            created_at: self.created_at,
        }
    }
}
