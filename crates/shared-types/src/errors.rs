//! # Error Types
//!
//! Defines error types used across subsystems.

use thiserror::Error;

/// Errors raised by the persistence collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Backing store could not serve the request.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// Referenced record does not exist.
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: u64 },

    /// A uniqueness rule (name, title, membership) would be violated.
    #[error("duplicate {0}")]
    Duplicate(String),

    /// The write violates a relational constraint.
    #[error("constraint violated: {0}")]
    Constraint(String),
}

impl StoreError {
    pub fn not_found(entity: &'static str, id: u64) -> Self {
        StoreError::NotFound { entity, id }
    }
}

/// Coarse error class, used by transports to pick a status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    AccessDenied,
    InvalidArgument,
    Conflict,
    NotFound,
    Upstream,
}

/// Error returned by board operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    /// Requester's role is absent or insufficient.
    #[error("access denied: {0}")]
    AccessDenied(String),

    /// Cross-entity mismatch, non-member target, or invalid role value.
    #[error("invalid arguments: {0}")]
    InvalidArgument(String),

    /// Duplicate workspace name, task title or subtask title.
    #[error("conflict: {0}")]
    Conflict(String),

    #[error("not found: {0}")]
    NotFound(String),

    /// A collaborator query failed. Never reported as an authorization failure.
    #[error("request failed: {0}")]
    Upstream(String),
}

impl BoardError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            BoardError::AccessDenied(_) => ErrorKind::AccessDenied,
            BoardError::InvalidArgument(_) => ErrorKind::InvalidArgument,
            BoardError::Conflict(_) => ErrorKind::Conflict,
            BoardError::NotFound(_) => ErrorKind::NotFound,
            BoardError::Upstream(_) => ErrorKind::Upstream,
        }
    }
}

impl From<StoreError> for BoardError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Unavailable(_) => BoardError::Upstream(err.to_string()),
            StoreError::NotFound { .. } => BoardError::NotFound(err.to_string()),
            StoreError::Duplicate(_) => BoardError::Conflict(err.to_string()),
            StoreError::Constraint(_) => BoardError::InvalidArgument(err.to_string()),
        }
    }
}
