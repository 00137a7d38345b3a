//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent violated player or list invariants.
///
/// Every variant is raised at the point of violation. The value or list that
/// produced it is left exactly as it was before the failing call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Identifier is not text convertible to a positive integer.
    #[error("invalid player uid: {0}")]
    InvalidUid(String),

    /// Name is blank or not text.
    #[error("invalid player name: {0}")]
    InvalidName(String),

    /// Attempt to clear a field that cannot be removed.
    #[error("cannot delete player {0}")]
    ImmutableField(&'static str),

    #[error("cannot delete a node from an empty list")]
    EmptyList,

    #[error("invalid position {position}: list has {len} nodes")]
    PositionOutOfRange { position: usize, len: usize },
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
