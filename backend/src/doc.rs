//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] aggregates the user endpoints and health probes into one
//! OpenAPI document. Debug builds serve it as JSON at
//! `/api-docs/openapi.json` for external tooling; there is no bundled UI.

use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User directory API",
        description = "Paginated listing, lookup, and creation of users.",
        license(name = "MIT")
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::create_user,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(crate::domain::User)),
    tags(
        (name = "users", description = "User listing and creation"),
        (name = "health", description = "Liveness and readiness probes")
    )
)]
pub struct ApiDoc;

/// Serve the OpenAPI document as JSON (debug builds only).
#[cfg(debug_assertions)]
#[actix_web::get("/api-docs/openapi.json")]
pub async fn openapi_json() -> actix_web::web::Json<utoipa::openapi::OpenApi> {
    actix_web::web::Json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_registers_all_user_paths() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();
        assert!(paths.contains(&"/users"));
        assert!(paths.contains(&"/users/{id}"));
        assert!(paths.contains(&"/user"));
        assert!(paths.contains(&"/health/ready"));
        assert!(paths.contains(&"/health/live"));
    }
}
