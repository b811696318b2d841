//! SQLite storage implementation for AgriPort.
//!
//! This crate provides all database-related functionality using Diesel ORM
//! with SQLite. It implements the repository traits defined in
//! `agriport-core` and contains:
//! - Database connection pooling and management
//! - Diesel migrations
//! - Repository implementations for all portal entities
//! - Database-specific model types (with Diesel derives)
//!
//! This crate is the only place in the application where Diesel dependencies
//! exist. The core and server crates are database-agnostic and work with
//! traits.

pub mod db;
pub mod errors;
pub mod schema;

// Repository implementations
pub mod crops;
pub mod market_prices;
pub mod negotiations;
pub mod users;
pub mod weather;

// Re-export database utilities
pub use db::{
    create_pool, get_connection, init, run_migrations, spawn_writer, DbConnection, DbPool,
    WriteHandle,
};

// Re-export storage errors
pub use errors::StorageError;

// Re-export from agriport-core for convenience
pub use agriport_core::errors::{Error, Result, StoreError};
