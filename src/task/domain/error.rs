//! Error types for task domain validation and parsing.

use thiserror::Error;

/// Errors returned while validating task drafts.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The activity text is empty after trimming.
    #[error("task activity must not be empty")]
    EmptyActivity,

    /// The priority symbol is not one of the recognised values.
    #[error(transparent)]
    InvalidPriority(#[from] ParsePriorityError),
}

/// Error returned while parsing a priority symbol or rank.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown priority: {0}, expected urgent, important or normal")]
pub struct ParsePriorityError(pub String);
