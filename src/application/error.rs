//! Application-level errors (wraps domain errors)

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::DomainError;

/// Application errors wrap domain errors and add application-level context.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("roster not found: {0}")]
    RosterNotFound(PathBuf),

    #[error("invalid roster format in {}: {message}", path.display())]
    RosterFormat { path: PathBuf, message: String },

    #[error("invalid roster entry {index} in {}: {source}", path.display())]
    InvalidEntry {
        path: PathBuf,
        index: usize,
        #[source]
        source: DomainError,
    },

    #[error("config error: {message}")]
    Config { message: String },

    #[error("operation failed: {context}")]
    OperationFailed {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
