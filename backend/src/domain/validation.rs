//! Creation payload validation.
//!
//! `validate_creation` is a pure function over the decoded JSON body. Rules
//! are applied in a fixed order and the first failure wins, so clients always
//! see the most fundamental problem first. Uniqueness is out of scope here;
//! the caller checks it against the store.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use super::user::NewUser;

/// Accepted length range for both `name` and `email`, in characters.
const LENGTH_RANGE: std::ops::RangeInclusive<usize> = 2..=100;

/// RFC-light email shape: `local@domain.tld` with a 2+ letter TLD.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$")
        .expect("email pattern compiles")
});

/// Why a creation payload was rejected.
///
/// The display strings are the exact sentences returned to clients in the
/// `error` field of a 400 response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CreateUserError {
    /// `name` or `email` is absent (or the body is not a JSON object).
    #[error("Missing required fields: name and email")]
    MissingFields,
    /// `name` or `email` is present but not a string.
    #[error("Fields 'name' and 'email' must be strings")]
    WrongType,
    /// `name` is shorter than 2 or longer than 100 characters.
    #[error("Name must be between 2 and 100 characters")]
    InvalidName,
    /// `email` is shorter than 2 or longer than 100 characters.
    #[error("Email must be between 2 and 100 characters")]
    InvalidEmail,
    /// `email` does not match the `local@domain.tld` pattern.
    #[error("Invalid email format")]
    InvalidEmailFormat,
}

/// Validate a decoded creation payload, returning the typed fields on
/// success.
///
/// A body that is not a JSON object (including `null` for an unparseable
/// request body) counts as missing both fields.
///
/// # Errors
///
/// Returns the first [`CreateUserError`] rule that the payload violates.
pub fn validate_creation(payload: &Value) -> Result<NewUser, CreateUserError> {
    let Some(object) = payload.as_object() else {
        return Err(CreateUserError::MissingFields);
    };
    let (Some(name), Some(email)) = (object.get("name"), object.get("email")) else {
        return Err(CreateUserError::MissingFields);
    };
    let (Some(name), Some(email)) = (name.as_str(), email.as_str()) else {
        return Err(CreateUserError::WrongType);
    };
    if !LENGTH_RANGE.contains(&name.chars().count()) {
        return Err(CreateUserError::InvalidName);
    }
    if !LENGTH_RANGE.contains(&email.chars().count()) {
        return Err(CreateUserError::InvalidEmail);
    }
    if !EMAIL_PATTERN.is_match(email) {
        return Err(CreateUserError::InvalidEmailFormat);
    }
    Ok(NewUser {
        name: name.to_owned(),
        email: email.to_owned(),
    })
}
