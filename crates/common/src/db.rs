//! Shared database types for Pagemark
//!
//! This module provides common database-related types used across domain repositories.

use crate::error::Error;
use thiserror::Error;

/// Postgres error code for unique constraint violations
const UNIQUE_VIOLATION: &str = "23505";
/// Postgres error code for foreign key violations
const FOREIGN_KEY_VIOLATION: &str = "23503";

/// Database-specific error types
#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("Record not found")]
    NotFound,

    #[error("Record already exists")]
    AlreadyExists,

    #[error("Referenced record does not exist")]
    MissingReference,

    #[error("Database connection error: {0}")]
    Connection(sqlx::Error),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl From<sqlx::Error> for RepositoryError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => RepositoryError::NotFound,
            sqlx::Error::Database(db) => match db.code().as_deref() {
                Some(UNIQUE_VIOLATION) => RepositoryError::AlreadyExists,
                Some(FOREIGN_KEY_VIOLATION) => RepositoryError::MissingReference,
                _ => RepositoryError::Connection(err),
            },
            _ => RepositoryError::Connection(err),
        }
    }
}

impl From<RepositoryError> for Error {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => Error::NotFound("Record not found".to_string()),
            RepositoryError::AlreadyExists => Error::Conflict("Record already exists".to_string()),
            RepositoryError::MissingReference => {
                Error::NotFound("Referenced record does not exist".to_string())
            }
            RepositoryError::Connection(e) => Error::Database(e),
            RepositoryError::InvalidData(msg) => Error::Validation(msg),
        }
    }
}
