//! Domain types, validation, and ports for the user directory.
//!
//! The domain layer holds no transport or storage concerns: handlers depend
//! on it through the [`ports`] traits, and the persistence adapter implements
//! those traits against SQLite.

pub mod ports;
pub mod user;
pub mod validation;

pub use user::{NewUser, User};
pub use validation::{CreateUserError, validate_creation};
