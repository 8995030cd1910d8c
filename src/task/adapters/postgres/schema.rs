//! Diesel schema for task persistence.

diesel::table! {
    /// Task records, one owner each.
    tasks (id) {
        /// Task identifier, generated by the database.
        id -> Uuid,
        /// Owning user.
        owner_id -> Uuid,
        /// Activity text.
        activity -> Text,
        /// Priority rank: 1 urgent, 2 important, 3 normal.
        priority -> SmallInt,
        /// Whether the task takes under five minutes.
        time_under_5_min -> Bool,
        /// Creation timestamp.
        created_at -> Timestamptz,
    }
}
