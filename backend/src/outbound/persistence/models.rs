//! Diesel row models for the `users` table.

use diesel::prelude::*;

use super::schema::users;
use crate::domain::User;

/// Row read back from the `users` table.
#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct UserRow {
    /// Primary key.
    pub id: i32,
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            email: row.email,
        }
    }
}

/// Row to be inserted into the `users` table; the id is store-assigned.
#[derive(Debug, Insertable)]
#[diesel(table_name = users)]
pub struct NewUserRow<'a> {
    /// Display name.
    pub name: &'a str,
    /// Email address.
    pub email: &'a str,
}
