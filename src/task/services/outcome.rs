//! Uniform `{code, message}` outcome for mutation results.

use super::{TaskMutationError, TaskMutationResult};
use serde::{Deserialize, Serialize};

/// Message reported after a successful create.
pub const TASK_CREATED_MESSAGE: &str = "Task created successfully!";

/// Message reported after a successful delete.
pub const TASK_DELETED_MESSAGE: &str = "Task deleted successfully!";

/// Status code of a mutation outcome, numbered like HTTP statuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
pub enum OutcomeCode {
    /// The mutation succeeded.
    Ok,
    /// The draft was malformed.
    BadRequest,
    /// Nobody is signed in.
    Unauthorized,
    /// The task is missing or not owned by the caller.
    NotFound,
    /// A backend failed.
    InternalError,
}

impl OutcomeCode {
    /// Returns the numeric code.
    #[must_use]
    pub const fn as_u16(self) -> u16 {
        match self {
            Self::Ok => 200,
            Self::BadRequest => 400,
            Self::Unauthorized => 401,
            Self::NotFound => 404,
            Self::InternalError => 500,
        }
    }

    /// Returns `true` for [`OutcomeCode::Ok`].
    #[must_use]
    pub const fn is_ok(self) -> bool {
        matches!(self, Self::Ok)
    }
}

impl From<OutcomeCode> for u16 {
    fn from(value: OutcomeCode) -> Self {
        value.as_u16()
    }
}

impl TryFrom<u16> for OutcomeCode {
    type Error = String;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            200 => Ok(Self::Ok),
            400 => Ok(Self::BadRequest),
            401 => Ok(Self::Unauthorized),
            404 => Ok(Self::NotFound),
            500 => Ok(Self::InternalError),
            other => Err(format!("unknown outcome code: {other}")),
        }
    }
}

impl TaskMutationError {
    /// Returns the outcome code for this error.
    #[must_use]
    pub const fn code(&self) -> OutcomeCode {
        match self {
            Self::Validation(_) => OutcomeCode::BadRequest,
            Self::Unauthenticated => OutcomeCode::Unauthorized,
            Self::NotFoundOrForbidden => OutcomeCode::NotFound,
            Self::Persistence => OutcomeCode::InternalError,
        }
    }
}

/// Result of a mutation as reported to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MutationOutcome {
    /// Status code.
    pub code: OutcomeCode,
    /// Human-readable message.
    pub message: String,
}

impl MutationOutcome {
    /// Creates a successful outcome.
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            code: OutcomeCode::Ok,
            message: message.into(),
        }
    }

    /// Converts a mutation result, using `success_message` on success.
    #[must_use]
    pub fn from_result<T>(result: &TaskMutationResult<T>, success_message: &str) -> Self {
        result
            .as_ref()
            .map_or_else(Self::from, |_| Self::success(success_message))
    }
}

impl From<&TaskMutationError> for MutationOutcome {
    fn from(err: &TaskMutationError) -> Self {
        Self {
            code: err.code(),
            message: err.to_string(),
        }
    }
}
