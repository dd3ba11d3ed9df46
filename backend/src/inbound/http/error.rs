//! HTTP error envelope and mapping from domain errors.
//!
//! Every failure leaving this service is JSON of the shape
//! `{"error": "<human-readable sentence>"}` with the mapped status code, so
//! the domain stays free of transport concerns and clients see one schema.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::Serialize;
use tracing::error;

use crate::domain::CreateUserError;
use crate::domain::ports::UserPersistenceError;

/// Sentence returned whenever the storage layer fails.
pub const DATABASE_ERROR_MESSAGE: &str = "A database error occurred";

/// Standard error envelope returned by all endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct ApiError {
    #[serde(skip)]
    status: StatusCode,
    error: String,
}

impl ApiError {
    fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            error: message.into(),
        }
    }

    /// 400 with the given sentence.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// 404 with the given sentence.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    /// 409 with the given sentence.
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(StatusCode::CONFLICT, message)
    }

    /// 500 with the given sentence.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    /// The sentence placed in the `error` field.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.error
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl std::error::Error for ApiError {}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        self.status
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status).json(self)
    }
}

impl From<CreateUserError> for ApiError {
    fn from(err: CreateUserError) -> Self {
        Self::bad_request(err.to_string())
    }
}

impl From<UserPersistenceError> for ApiError {
    fn from(err: UserPersistenceError) -> Self {
        match err {
            UserPersistenceError::DuplicateEmail => {
                Self::conflict("Failed to create user due to a conflict")
            }
            UserPersistenceError::Connection { .. } | UserPersistenceError::Query { .. } => {
                error!(error = %err, "persistence failure surfaced to client");
                Self::internal(DATABASE_ERROR_MESSAGE)
            }
        }
    }
}

/// Convenience alias for HTTP handlers.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use serde_json::Value;

    async fn body_of(error: &ApiError) -> Value {
        let response = error.error_response();
        let bytes = to_bytes(response.into_body()).await.expect("read body");
        serde_json::from_slice(&bytes).expect("JSON body")
    }

    #[actix_web::test]
    async fn renders_the_single_key_envelope() {
        let error = ApiError::not_found("User not found");
        assert_eq!(error.status_code(), StatusCode::NOT_FOUND);

        let body = body_of(&error).await;
        assert_eq!(body, serde_json::json!({"error": "User not found"}));
    }

    #[actix_web::test]
    async fn persistence_failures_collapse_to_the_database_sentence() {
        let error = ApiError::from(UserPersistenceError::query("users table is gone"));
        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error.message(), DATABASE_ERROR_MESSAGE);

        let error = ApiError::from(UserPersistenceError::connection("refused"));
        assert_eq!(error.message(), DATABASE_ERROR_MESSAGE);
    }

    #[actix_web::test]
    async fn duplicate_email_maps_to_conflict() {
        let error = ApiError::from(UserPersistenceError::DuplicateEmail);
        assert_eq!(error.status_code(), StatusCode::CONFLICT);
        assert_eq!(error.message(), "Failed to create user due to a conflict");
    }

    #[actix_web::test]
    async fn validation_failures_map_to_bad_request_with_their_sentence() {
        let error = ApiError::from(CreateUserError::InvalidEmailFormat);
        assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(error.message(), "Invalid email format");
    }
}
