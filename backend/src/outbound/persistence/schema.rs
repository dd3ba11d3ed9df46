//! Diesel table definitions for the SQLite schema.
//!
//! These definitions must match the DDL issued by
//! [`DieselUserRepository::reset_and_seed`](super::DieselUserRepository::reset_and_seed)
//! exactly; Diesel uses them for compile-time query validation.

diesel::table! {
    /// User accounts table.
    ///
    /// `id` is the SQLite rowid (`INTEGER PRIMARY KEY AUTOINCREMENT`) and
    /// `email` carries a UNIQUE constraint that is the final authority on
    /// email uniqueness.
    users (id) {
        /// Primary key, assigned by SQLite in insertion order.
        id -> Integer,
        /// Display name.
        name -> Text,
        /// Email address, unique.
        email -> Text,
    }
}
