//! Typed error enum for the service layer.
//!
//! Unifies storage and export failures into a single error type so handlers
//! can map "not found" and "bad input" to client errors.

use problem_tracker_export::ExportError;
use problem_tracker_storage::StorageError;
use thiserror::Error;

/// Service-layer error unifying storage and export failures.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Record store or media directory failure.
    #[error("storage: {0}")]
    Storage(#[from] StorageError),

    /// Spreadsheet could not be built or written.
    #[error("export: {0}")]
    Export(#[from] ExportError),

    /// No problem with this id.
    #[error("problem {id} not found")]
    NotFound { id: i64 },

    /// Caller provided invalid input.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl ServiceError {
    /// Whether this error represents a not-found condition.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Whether the caller, not the backend, is at fault.
    pub fn is_invalid_input(&self) -> bool {
        match self {
            Self::InvalidInput(_) => true,
            Self::Storage(e) => e.is_invalid_input(),
            _ => false,
        }
    }
}
