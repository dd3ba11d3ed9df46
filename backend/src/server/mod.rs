//! Server construction and route wiring.

mod config;

pub use config::AppConfig;

use actix_web::web;

use crate::inbound::http::health::{HealthState, live, ready};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::users::{create_user, fallback, get_user, list_users};

/// Build the route/service configuration shared by `main` and the tests.
///
/// Registers the user endpoints, the health probes, the JSON default service
/// for unmatched routes, and (in debug builds) the OpenAPI document.
pub fn configure_app(
    state: HttpState,
    health: web::Data<HealthState>,
) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        cfg.app_data(web::Data::new(state))
            .app_data(health)
            .service(list_users)
            .service(get_user)
            .service(create_user)
            .service(live)
            .service(ready);

        #[cfg(debug_assertions)]
        cfg.service(crate::doc::openapi_json);

        cfg.default_service(web::route().to(fallback));
    }
}
