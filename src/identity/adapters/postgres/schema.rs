//! Diesel schema for the user columns read by this crate.

diesel::table! {
    /// User accounts owned by the authentication provider.
    users (id) {
        /// User identifier.
        id -> Uuid,
        /// Timestamp of the first successful verification.
        email_verified -> Nullable<Timestamptz>,
    }
}
