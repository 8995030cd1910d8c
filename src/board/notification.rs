//! Transient notifications describing mutation outcomes.

use crate::task::services::MutationOutcome;
use serde::{Deserialize, Serialize};

/// Visual weight of a notification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationVariant {
    /// Informational.
    #[default]
    Default,
    /// A failure the user should notice.
    Destructive,
}

/// A short title with an optional explanation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Headline.
    pub title: String,
    /// Explanation, present for failures.
    pub description: Option<String>,
    /// Visual weight.
    pub variant: NotificationVariant,
}

impl Notification {
    /// Creates an informational notification with no description.
    #[must_use]
    pub fn success(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            variant: NotificationVariant::Default,
        }
    }

    /// Creates a destructive notification with an explanation.
    #[must_use]
    pub fn failure(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: Some(description.into()),
            variant: NotificationVariant::Destructive,
        }
    }

    /// Renders a mutation outcome: successes show the outcome message as the
    /// title, failures show `failure_title` with the message as description.
    #[must_use]
    pub fn from_outcome(outcome: MutationOutcome, failure_title: &str) -> Self {
        if outcome.code.is_ok() {
            Self::success(outcome.message)
        } else {
            Self::failure(failure_title, outcome.message)
        }
    }
}
