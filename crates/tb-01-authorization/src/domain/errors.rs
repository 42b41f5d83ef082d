//! Error types for the authorization gate.

use shared_types::{BoardError, StoreError};
use thiserror::Error;

use super::policy::Denial;

/// All errors the gate can return.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccessError {
    /// Requester's role is absent or insufficient, or the target is protected.
    #[error("access denied: {0}")]
    AccessDenied(Denial),

    /// Cross-entity mismatch or an invalid target.
    #[error("invalid arguments: {0}")]
    InvalidArgument(String),

    /// Role store lookup failed.
    #[error("role lookup failed: {0}")]
    Upstream(StoreError),
}

impl From<Denial> for AccessError {
    fn from(denial: Denial) -> Self {
        if denial.is_invalid_argument() {
            AccessError::InvalidArgument(denial.reason().to_string())
        } else {
            AccessError::AccessDenied(denial)
        }
    }
}

impl From<AccessError> for BoardError {
    fn from(err: AccessError) -> Self {
        match err {
            AccessError::AccessDenied(denial) => BoardError::AccessDenied(denial.to_string()),
            AccessError::InvalidArgument(reason) => BoardError::InvalidArgument(reason),
            AccessError::Upstream(source) => BoardError::Upstream(source.to_string()),
        }
    }
}
