//! Domain ports implemented by outbound adapters.

use async_trait::async_trait;
use pagination::PageRequest;

use super::user::{NewUser, User};

/// Failures surfaced by user persistence adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserPersistenceError {
    /// The storage backend could not be reached or opened.
    #[error("database connection failed: {message}")]
    Connection {
        /// Adapter-level description of the connection failure.
        message: String,
    },
    /// A statement failed after a connection was established.
    #[error("database query failed: {message}")]
    Query {
        /// Adapter-level description of the query failure.
        message: String,
    },
    /// The unique email constraint rejected an insert.
    ///
    /// This is the authoritative uniqueness signal; the advisory
    /// `find_by_email` pre-check only narrows the race window.
    #[error("email address is already registered")]
    DuplicateEmail,
}

impl UserPersistenceError {
    /// Create a connection error with the given message.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create a query error with the given message.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Persistent store of user records.
///
/// Every call performs its own scoped storage I/O; implementations must not
/// hold connection state between calls, so independent requests can run
/// concurrently without shared mutable state.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Return the requested page slice in ascending-id order, plus the total
    /// number of users in the store.
    async fn list(&self, page: PageRequest) -> Result<(Vec<User>, i64), UserPersistenceError>;

    /// Look up a user by id.
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, UserPersistenceError>;

    /// Look up a user by email.
    ///
    /// Used as the uniqueness pre-check before an insert; callers must treat
    /// a pass here as advisory and still handle
    /// [`UserPersistenceError::DuplicateEmail`] from [`Self::insert`].
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserPersistenceError>;

    /// Insert a validated user and return the assigned id.
    async fn insert(&self, user: NewUser) -> Result<i32, UserPersistenceError>;
}
