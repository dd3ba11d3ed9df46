//! SQLite persistence adapter using Diesel ORM.
//!
//! The adapter is deliberately thin: it translates between Diesel row models
//! and domain types and maps Diesel failures onto
//! [`UserPersistenceError`](crate::domain::ports::UserPersistenceError). Row
//! structs and table definitions stay private to this module.
//!
//! Connections are not pooled. Every operation opens its own
//! `SqliteConnection` from the configured database path and drops it before
//! returning, which gives each call scoped acquisition with guaranteed
//! release on all exit paths.

mod diesel_user_repository;
mod models;
mod schema;

pub use diesel_user_repository::DieselUserRepository;
