//! Storage-specific error types for SQLite operations.
//!
//! This module provides error types that wrap Diesel-specific errors and
//! convert them to the store-agnostic error types defined in
//! `agriport_core`.

use agriport_core::errors::{Error, StoreError};
use diesel::result::Error as DieselError;
use thiserror::Error;

/// Storage-specific errors that wrap Diesel and r2d2 types.
///
/// These errors are internal to the storage layer and are converted to
/// `agriport_core::Error` before being returned to callers.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Database connection failed: {0}")]
    ConnectionFailed(#[from] diesel::ConnectionError),

    #[error("Connection pool error: {0}")]
    PoolError(#[from] r2d2::Error),

    #[error("Query execution failed: {0}")]
    QueryFailed(#[from] DieselError),

    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    /// A core error that passed through a storage transaction unchanged.
    #[error(transparent)]
    Core(#[from] Error),
}

impl From<StorageError> for Error {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::ConnectionFailed(e) => {
                Error::Store(StoreError::ConnectionFailed(e.to_string()))
            }
            StorageError::PoolError(e) => {
                Error::Store(StoreError::PoolCreationFailed(e.to_string()))
            }
            StorageError::QueryFailed(DieselError::NotFound) => {
                Error::Store(StoreError::NotFound("Record not found".to_string()))
            }
            StorageError::QueryFailed(DieselError::DatabaseError(
                diesel::result::DatabaseErrorKind::UniqueViolation,
                info,
            )) => Error::Store(StoreError::UniqueViolation(info.message().to_string())),
            StorageError::QueryFailed(DieselError::DatabaseError(
                diesel::result::DatabaseErrorKind::ForeignKeyViolation,
                info,
            )) => Error::Store(StoreError::ForeignKeyViolation(info.message().to_string())),
            // Unexpected engine-side failures (corruption, disk errors) are
            // surfaced as internal rather than plain query failures.
            StorageError::QueryFailed(DieselError::DatabaseError(_, info)) => {
                Error::Store(StoreError::Internal(info.message().to_string()))
            }
            StorageError::QueryFailed(e) => Error::Store(StoreError::QueryFailed(e.to_string())),
            StorageError::MigrationFailed(e) => Error::Store(StoreError::MigrationFailed(e)),
            StorageError::Core(e) => e,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use diesel::result::DatabaseErrorKind;

    fn db_error(kind: DatabaseErrorKind, message: &str) -> StorageError {
        StorageError::QueryFailed(DieselError::DatabaseError(kind, Box::new(message.to_string())))
    }

    #[test]
    fn test_not_found_maps_to_store_not_found() {
        let err: Error = StorageError::QueryFailed(DieselError::NotFound).into();
        assert!(matches!(err, Error::Store(StoreError::NotFound(_))));
    }

    #[test]
    fn test_constraint_violations_keep_their_kind() {
        let unique: Error = db_error(DatabaseErrorKind::UniqueViolation, "dup key").into();
        assert!(matches!(unique, Error::Store(StoreError::UniqueViolation(_))));

        let fk: Error = db_error(DatabaseErrorKind::ForeignKeyViolation, "no parent").into();
        assert!(matches!(fk, Error::Store(StoreError::ForeignKeyViolation(_))));
    }

    #[test]
    fn test_unexpected_engine_errors_map_to_internal() {
        let err: Error = db_error(DatabaseErrorKind::Unknown, "disk I/O error").into();
        assert!(matches!(err, Error::Store(StoreError::Internal(_))));
        assert_eq!(err.to_string(), "Internal database error: disk I/O error");
    }

    #[test]
    fn test_core_errors_pass_through_unchanged() {
        let inner: Error = StoreError::NotFound("no user with id 7".to_string()).into();
        let roundtripped: Error = StorageError::Core(inner).into();
        assert_eq!(roundtripped.to_string(), "Record not found: no user with id 7");
    }
}
