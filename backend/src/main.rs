//! Backend entry-point: configuration, database seeding, and route wiring.

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{App, HttpServer, web};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use backend::inbound::http::health::HealthState;
use backend::inbound::http::state::HttpState;
use backend::outbound::persistence::DieselUserRepository;
use backend::server::{AppConfig, configure_app};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let config = AppConfig::parse();

    let repository = DieselUserRepository::new(config.database_path.clone());
    if config.skip_seed {
        info!(path = %config.database_path, "keeping existing database");
    } else {
        repository
            .reset_and_seed(seed_data::default_seed())
            .await
            .map_err(|err| std::io::Error::other(format!("database seeding failed: {err}")))?;
        info!(path = %config.database_path, "database reset and seeded");
    }

    let state = HttpState {
        users: Arc::new(repository),
    };
    let health = web::Data::new(HealthState::new());
    let server_health = health.clone();

    let server = HttpServer::new(move || {
        // The API is consumed by browser clients on other origins.
        App::new()
            .wrap(Cors::permissive())
            .configure(configure_app(state.clone(), server_health.clone()))
    })
    .bind(config.bind_addr)?;

    info!(addr = %config.bind_addr, "listening");
    health.mark_ready();
    server.run().await
}
