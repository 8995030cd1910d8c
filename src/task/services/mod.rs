//! Application services for authenticated task mutation.

mod mutation;
mod outcome;

pub use mutation::{TaskMutationError, TaskMutationResult, TaskMutationService};
pub use outcome::{MutationOutcome, OutcomeCode, TASK_CREATED_MESSAGE, TASK_DELETED_MESSAGE};
