//! Core error types for the AgriPort portal.
//!
//! This module defines database-agnostic error types. Storage-specific errors
//! (from Diesel, r2d2, etc.) are converted to these types by the storage
//! layer.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the portal.
///
/// Only two kinds ever reach a client: a validation failure (caught before
/// any store call) or a store failure. Both variants are transparent so the
/// message the UI displays is exactly the inner error's text.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Validation errors for user input.
///
/// The message strings are part of the wire contract with the portal UI,
/// which matches on them for its error display. They carry no prefix.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// One or more required fields were missing or empty.
    #[error("{0}")]
    MissingFields(String),
}

/// Store-agnostic error type for persistence operations.
///
/// Uses `String` for all error details, allowing the storage layer to
/// convert storage-specific errors (Diesel, r2d2) into this format.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to establish a database connection.
    #[error("Failed to connect to database: {0}")]
    ConnectionFailed(String),

    /// Failed to create or configure the connection pool.
    #[error("Failed to create database pool: {0}")]
    PoolCreationFailed(String),

    /// A database query failed to execute.
    #[error("Database query failed: {0}")]
    QueryFailed(String),

    /// The requested record was not found.
    #[error("Record not found: {0}")]
    NotFound(String),

    /// A unique constraint was violated (e.g., duplicate key).
    #[error("Unique constraint violation: {0}")]
    UniqueViolation(String),

    /// A foreign key constraint was violated.
    #[error("Foreign key violation: {0}")]
    ForeignKeyViolation(String),

    /// Database migration failed.
    #[error("Database migration failed: {0}")]
    MigrationFailed(String),

    /// Internal/unexpected database error.
    #[error("Internal database error: {0}")]
    Internal(String),
}

impl Error {
    /// True when the error was raised before any store call was made.
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation(_))
    }
}
