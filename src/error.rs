//! Service error taxonomy.
//!
//! "Not resolvable" is deliberately not an error: resolution that exhausts
//! every strategy returns `Ok(None)` so callers can tell it apart from a
//! store fault.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Currency '{0}' already exists")]
    AlreadyExists(String),

    #[error("Currency '{0}' not exists")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}
