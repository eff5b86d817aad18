//! Error types for taskflow
//!
//! Every public operation returns a typed failure instead of panicking:
//! - not-found kinds are recoverable; canonical state stays consistent
//! - validation failures are rejected before any store round-trip
//! - `StoreUnavailable` simulates a transient backend outage; retry is a
//!   caller decision, the core never retries on its own

use thiserror::Error;

use crate::model::TaskId;

/// Main error type for taskflow operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Task not found: {0}")]
    TaskNotFound(TaskId),

    #[error("Category not found: {0}")]
    CategoryNotFound(String),

    #[error("Invalid task: {0}")]
    Validation(String),

    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),
}

impl Error {
    /// Whether this failure means the referenced entity is absent.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::TaskNotFound(_) | Error::CategoryNotFound(_))
    }
}

/// Result type alias for taskflow operations
pub type Result<T> = std::result::Result<T, Error>;
