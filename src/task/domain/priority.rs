//! Eisenhower priority and the answer classifier.

use super::ParsePriorityError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical task priority.
///
/// Ranks are `1` for urgent, `2` for important and `3` for normal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    /// Do first.
    Urgent,
    /// Schedule.
    Important,
    /// Everything else.
    Normal,
}

impl Priority {
    /// All priorities in rank order.
    pub const ALL: [Self; 3] = [Self::Urgent, Self::Important, Self::Normal];

    /// Returns the canonical integer rank.
    #[must_use]
    pub const fn rank(self) -> i16 {
        match self {
            Self::Urgent => 1,
            Self::Important => 2,
            Self::Normal => 3,
        }
    }

    /// Returns the priority for a stored rank.
    ///
    /// # Errors
    ///
    /// Returns [`ParsePriorityError`] for ranks outside `1..=3`.
    pub fn from_rank(rank: i16) -> Result<Self, ParsePriorityError> {
        match rank {
            1 => Ok(Self::Urgent),
            2 => Ok(Self::Important),
            3 => Ok(Self::Normal),
            _ => Err(ParsePriorityError(rank.to_string())),
        }
    }

    /// Returns the boundary symbol.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Urgent => "urgent",
            Self::Important => "important",
            Self::Normal => "normal",
        }
    }

    /// Derived flag: `true` only for [`Priority::Urgent`].
    #[must_use]
    pub const fn is_urgent(self) -> bool {
        matches!(self, Self::Urgent)
    }

    /// Derived flag: `true` only for [`Priority::Important`].
    #[must_use]
    pub const fn is_important(self) -> bool {
        matches!(self, Self::Important)
    }
}

impl TryFrom<&str> for Priority {
    type Error = ParsePriorityError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "urgent" => Ok(Self::Urgent),
            "important" => Ok(Self::Important),
            "normal" => Ok(Self::Normal),
            _ => Err(ParsePriorityError(value.to_owned())),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maps the wizard's urgency and importance answers to a priority.
///
/// Urgency only counts together with importance: urgent-and-important is
/// [`Priority::Urgent`], important alone is [`Priority::Important`], and
/// every other combination, urgent-only included, is [`Priority::Normal`].
///
/// The returned value is the whole classification record: read the stored
/// rank with [`Priority::rank`] and the two flags with
/// [`Priority::is_urgent`] and [`Priority::is_important`].
#[must_use]
pub const fn classify(is_urgent_answer: bool, is_important_answer: bool) -> Priority {
    match (is_urgent_answer, is_important_answer) {
        (true, true) => Priority::Urgent,
        (false, true) => Priority::Important,
        (_, false) => Priority::Normal,
    }
}
