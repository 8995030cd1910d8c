//! Diesel row models for task persistence.

use super::schema::tasks;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Owning user.
    pub owner_id: uuid::Uuid,
    /// Activity text.
    pub activity: String,
    /// Priority rank.
    pub priority: i16,
    /// Duration flag.
    pub time_under_5_min: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Insert model for task records; the id is left to the column default.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Owning user.
    pub owner_id: uuid::Uuid,
    /// Activity text.
    pub activity: String,
    /// Priority rank.
    pub priority: i16,
    /// Duration flag.
    pub time_under_5_min: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}
