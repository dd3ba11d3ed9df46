//! Command-line and environment configuration for the server binary.

use std::net::SocketAddr;

use clap::Parser;

/// Runtime configuration, parsed from flags with environment fallbacks.
///
/// The database path is threaded into the repository at construction rather
/// than read from a global, so every test run can point at its own file.
#[derive(Debug, Clone, Parser)]
#[command(name = "user-directory", about = "HTTP directory of users backed by SQLite")]
pub struct AppConfig {
    /// Socket address the HTTP listener binds to.
    #[arg(long, env = "BIND_ADDR", default_value = "0.0.0.0:8080")]
    pub bind_addr: SocketAddr,

    /// Path of the SQLite database file.
    #[arg(long, env = "DATABASE_PATH", default_value = "database.db")]
    pub database_path: String,

    /// Keep the existing database instead of dropping and reseeding it.
    #[arg(long, env = "SKIP_SEED")]
    pub skip_seed: bool,
}
