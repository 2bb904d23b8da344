//! Typed error enum for the storage layer.
//!
//! Lets callers tell an invalid upload name apart from database and filesystem
//! failures instead of downcasting opaque boxes.

use thiserror::Error;

/// Storage-layer error covering the record store and the media directory.
#[derive(Debug, Error)]
pub enum StorageError {
    /// SQL statement or connection failure.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// No connection could be checked out of the pool.
    #[error("connection pool error: {0}")]
    Pool(#[from] r2d2::Error),

    /// Reading or writing the media directory failed.
    #[error("media store error: {0}")]
    Media(#[from] std::io::Error),

    /// Upload filename has no usable final path component.
    #[error("invalid upload filename: {0:?}")]
    InvalidFilename(String),
}

impl StorageError {
    /// Whether this error was caused by the caller's input rather than the backend.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidFilename(_))
    }
}

pub type Result<T> = std::result::Result<T, StorageError>;
