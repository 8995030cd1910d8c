//! Domain model for task classification and ownership.
//!
//! Priority is a single three-variant value; the urgent/important flags are
//! derived from it on read and never stored independently.

mod draft;
mod error;
mod ids;
mod priority;
mod task;

pub use draft::{Activity, ClassifiedDraft, TaskDraft};
pub use error::{ParsePriorityError, TaskDomainError};
pub use ids::TaskId;
pub use priority::{Priority, classify};
pub use task::{NewTask, PersistedTaskData, Task};
