//! User endpoint handlers.
//!
//! ```text
//! GET  /users?page=2&per_page=10
//! GET  /users/7
//! POST /user {"name":"Ada Lovelace","email":"ada@example.com"}
//! ```
//!
//! Each handler is one linear validate → query → respond pipeline. The
//! creation flow performs an advisory email pre-check before inserting; the
//! store's UNIQUE constraint remains the real uniqueness enforcer, so a lost
//! race still surfaces as a conflict rather than a duplicate row.

use actix_web::{HttpResponse, get, post, web};
use pagination::{PageMeta, PageRequest, Paginated};
use serde::Deserialize;
use serde_json::Value;
use utoipa::IntoParams;

use super::error::{ApiError, ApiResult};
use super::state::HttpState;
use crate::domain::{User, validate_creation};

/// Sentence returned for any route the service does not know.
pub const UNMATCHED_ROUTE_MESSAGE: &str = "This resource was not found!";

/// Raw pagination query values.
///
/// Kept as strings so unparsable input falls back to the defaults instead of
/// failing extraction with a framework-shaped 400.
#[derive(Debug, Deserialize, IntoParams)]
pub struct ListUsersQuery {
    /// Requested page number, 1-based.
    page: Option<String>,
    /// Requested page size, clamped to 1..=100.
    per_page: Option<String>,
}

/// List users with pagination.
#[utoipa::path(
    get,
    path = "/users",
    params(ListUsersQuery),
    responses(
        (status = 200, description = "Page of users with pagination metadata"),
        (status = 500, description = "Storage failure")
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(
    state: web::Data<HttpState>,
    query: web::Query<ListUsersQuery>,
) -> ApiResult<web::Json<Paginated<User>>> {
    let page = PageRequest::from_raw(query.page.as_deref(), query.per_page.as_deref());
    let (data, total_items) = state.users.list(page).await?;
    Ok(web::Json(Paginated::new(
        PageMeta::new(page, total_items),
        data,
    )))
}

/// Fetch a single user by id.
#[utoipa::path(
    get,
    path = "/users/{id}",
    params(("id" = i32, Path, description = "User identifier")),
    responses(
        (status = 200, description = "The user", body = User),
        (status = 404, description = "No user with that id"),
        (status = 500, description = "Storage failure")
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/users/{id}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<User>> {
    // A non-digit segment (including signed forms like `+7` or `-1`) is an
    // unknown resource, not a malformed request.
    let raw = path.into_inner();
    if raw.is_empty() || !raw.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(ApiError::not_found(UNMATCHED_ROUTE_MESSAGE));
    }
    let user = match raw.parse::<i32>() {
        Ok(id) => state.users.find_by_id(id).await?,
        // A digit run past i32 cannot name a stored row.
        Err(_) => None,
    };
    match user {
        Some(user) => Ok(web::Json(user)),
        None => Err(ApiError::not_found("User not found")),
    }
}

/// Create a user after validating the payload and checking email uniqueness.
#[utoipa::path(
    post,
    path = "/user",
    request_body = Value,
    responses(
        (status = 201, description = "The created user", body = User),
        (status = 400, description = "Payload failed validation"),
        (status = 409, description = "Email already in use"),
        (status = 500, description = "Storage failure")
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/user")]
pub async fn create_user(state: web::Data<HttpState>, body: web::Bytes) -> ApiResult<HttpResponse> {
    // An unparseable body validates like an absent payload.
    let payload: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
    let new_user = validate_creation(&payload)?;

    if state.users.find_by_email(&new_user.email).await?.is_some() {
        return Err(ApiError::conflict("This email address is already in use"));
    }

    let id = state.users.insert(new_user).await?;

    match state.users.find_by_id(id).await? {
        Some(user) => Ok(HttpResponse::Created().json(user)),
        None => Err(ApiError::internal(
            "User created, but could not be retrieved due to a server error.",
        )),
    }
}

/// Default service for unmatched routes: a JSON 404 instead of an empty body.
pub async fn fallback() -> ApiResult<HttpResponse> {
    Err(ApiError::not_found(UNMATCHED_ROUTE_MESSAGE))
}
