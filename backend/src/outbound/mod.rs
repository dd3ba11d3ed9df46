//! Outbound adapters (persistence).

pub mod persistence;
