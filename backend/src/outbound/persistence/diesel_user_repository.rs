//! Diesel-backed implementation of the `UserRepository` port.

use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use pagination::PageRequest;
use seed_data::SeedUser;
use tracing::debug;

use super::models::{NewUserRow, UserRow};
use super::schema::users;
use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{NewUser, User};

/// Map Diesel failures onto the persistence error taxonomy.
///
/// Unique-constraint violations become [`UserPersistenceError::DuplicateEmail`]
/// since `email` is the only unique column besides the primary key.
fn map_diesel_error(error: DieselError) -> UserPersistenceError {
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        other => debug!(error = %other, "diesel operation failed"),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            UserPersistenceError::DuplicateEmail
        }
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            UserPersistenceError::connection("database connection error")
        }
        _ => UserPersistenceError::query("database error"),
    }
}

/// SQLite-backed user repository.
///
/// Holds only the database path; every operation opens and closes its own
/// connection on the blocking pool, so clones can serve concurrent requests
/// without coordination.
#[derive(Clone)]
pub struct DieselUserRepository {
    database_path: Arc<str>,
}

impl DieselUserRepository {
    /// Create a repository reading and writing the database at `path`.
    ///
    /// The path is an explicit constructor argument so each test run can use
    /// its own database file.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            database_path: Arc::from(path.into()),
        }
    }

    fn connect(path: &str) -> Result<SqliteConnection, UserPersistenceError> {
        SqliteConnection::establish(path)
            .map_err(|err| UserPersistenceError::connection(err.to_string()))
    }

    /// Run a synchronous Diesel operation on the blocking pool with a fresh
    /// connection, releasing it on every exit path.
    async fn with_connection<T, F>(&self, operation: F) -> Result<T, UserPersistenceError>
    where
        F: FnOnce(&mut SqliteConnection) -> Result<T, UserPersistenceError> + Send + 'static,
        T: Send + 'static,
    {
        let path = Arc::clone(&self.database_path);
        tokio::task::spawn_blocking(move || {
            let mut connection = Self::connect(&path)?;
            operation(&mut connection)
        })
        .await
        .map_err(|err| UserPersistenceError::query(err.to_string()))?
    }

    /// Drop and recreate the `users` table, then load the given seed rows.
    ///
    /// This is a destructive setup operation for process startup and tests.
    /// It is intentionally not part of [`UserRepository`], so no handler can
    /// reach it.
    ///
    /// # Errors
    ///
    /// Returns [`UserPersistenceError`] when the database cannot be opened or
    /// a DDL/insert statement fails.
    pub async fn reset_and_seed(
        &self,
        seed: &'static [SeedUser],
    ) -> Result<(), UserPersistenceError> {
        self.with_connection(move |connection| {
            diesel::sql_query("DROP TABLE IF EXISTS users")
                .execute(connection)
                .map_err(map_diesel_error)?;
            diesel::sql_query(
                "CREATE TABLE users (\
                 id INTEGER PRIMARY KEY AUTOINCREMENT, \
                 name TEXT NOT NULL, \
                 email TEXT NOT NULL UNIQUE)",
            )
            .execute(connection)
            .map_err(map_diesel_error)?;
            for row in seed {
                diesel::insert_into(users::table)
                    .values(NewUserRow {
                        name: row.name,
                        email: row.email,
                    })
                    .execute(connection)
                    .map_err(map_diesel_error)?;
            }
            Ok(())
        })
        .await
    }
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn list(&self, page: PageRequest) -> Result<(Vec<User>, i64), UserPersistenceError> {
        self.with_connection(move |connection| {
            let total_items: i64 = users::table
                .count()
                .get_result(connection)
                .map_err(map_diesel_error)?;
            let rows: Vec<UserRow> = users::table
                .order(users::id.asc())
                .limit(page.limit())
                .offset(page.offset())
                .select(UserRow::as_select())
                .load(connection)
                .map_err(map_diesel_error)?;
            Ok((rows.into_iter().map(User::from).collect(), total_items))
        })
        .await
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<User>, UserPersistenceError> {
        self.with_connection(move |connection| {
            users::table
                .find(id)
                .select(UserRow::as_select())
                .first(connection)
                .optional()
                .map_err(map_diesel_error)
                .map(|row| row.map(User::from))
        })
        .await
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserPersistenceError> {
        let email = email.to_owned();
        self.with_connection(move |connection| {
            users::table
                .filter(users::email.eq(email))
                .select(UserRow::as_select())
                .first(connection)
                .optional()
                .map_err(map_diesel_error)
                .map(|row| row.map(User::from))
        })
        .await
    }

    async fn insert(&self, user: NewUser) -> Result<i32, UserPersistenceError> {
        self.with_connection(move |connection| {
            diesel::insert_into(users::table)
                .values(NewUserRow {
                    name: &user.name,
                    email: &user.email,
                })
                .returning(users::id)
                .get_result(connection)
                .map_err(map_diesel_error)
        })
        .await
    }
}
