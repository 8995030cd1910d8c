//! Task drafts collected by the wizard and their validated form.

use super::{Priority, TaskDomainError, classify};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Non-empty, trimmed description of what the task is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Activity(String);

impl Activity {
    /// Creates a validated activity.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyActivity`] when the value is empty
    /// after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, TaskDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(TaskDomainError::EmptyActivity);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the activity text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Activity {
    type Error = TaskDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Activity> for String {
    fn from(value: Activity) -> Self {
        value.0
    }
}

impl AsRef<str> for Activity {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Unvalidated task candidate as it crosses the submission boundary.
///
/// The priority travels in its symbolic form (`urgent`, `important`,
/// `normal`) and is only turned into a [`Priority`] by [`Self::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDraft {
    /// Free-text activity.
    pub activity: String,
    /// Priority symbol.
    pub priority: String,
    /// Whether the task takes under five minutes.
    #[serde(rename = "timeUnder5Min")]
    pub time_under_5_min: bool,
}

impl TaskDraft {
    /// Creates a draft with an already-decided priority.
    #[must_use]
    pub fn new(activity: impl Into<String>, priority: Priority, time_under_5_min: bool) -> Self {
        Self {
            activity: activity.into(),
            priority: priority.as_str().to_owned(),
            time_under_5_min,
        }
    }

    /// Creates a draft from raw wizard answers, classifying urgency and
    /// importance into a priority.
    #[must_use]
    pub fn from_answers(
        activity: impl Into<String>,
        is_urgent_answer: bool,
        is_important_answer: bool,
        time_under_5_min: bool,
    ) -> Self {
        Self::new(
            activity,
            classify(is_urgent_answer, is_important_answer),
            time_under_5_min,
        )
    }

    /// Validates the draft shape.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyActivity`] for blank activities and
    /// [`TaskDomainError::InvalidPriority`] for unrecognised priority symbols.
    pub fn validate(&self) -> Result<ClassifiedDraft, TaskDomainError> {
        let activity = Activity::new(self.activity.as_str())?;
        let priority = Priority::try_from(self.priority.as_str())?;
        Ok(ClassifiedDraft {
            activity,
            priority,
            time_under_5_min: self.time_under_5_min,
        })
    }
}

/// A draft that passed validation and carries a canonical priority.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedDraft {
    pub(super) activity: Activity,
    pub(super) priority: Priority,
    pub(super) time_under_5_min: bool,
}

impl ClassifiedDraft {
    /// Returns the validated activity.
    #[must_use]
    pub const fn activity(&self) -> &Activity {
        &self.activity
    }

    /// Returns the canonical priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns whether the task takes under five minutes.
    #[must_use]
    pub const fn time_under_5_min(&self) -> bool {
        self.time_under_5_min
    }
}
