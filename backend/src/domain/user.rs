//! User records and creation payloads.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A stored user record.
///
/// Ids are assigned by the store on insertion and increase monotonically, so
/// ascending-id order doubles as insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// Store-assigned positive identifier.
    #[schema(example = 1)]
    pub id: i32,
    /// Display name, 2 to 100 characters.
    #[schema(example = "Ada Lovelace")]
    pub name: String,
    /// Email address, unique across all users.
    #[schema(example = "ada@example.com")]
    pub email: String,
}

/// A creation payload that has passed [`validate_creation`].
///
/// Only the validator constructs this type, so holding one certifies the
/// shape and content rules; uniqueness remains the store's responsibility.
///
/// [`validate_creation`]: crate::domain::validate_creation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    /// Validated display name.
    pub name: String,
    /// Validated (but not yet uniqueness-checked) email address.
    pub email: String,
}
