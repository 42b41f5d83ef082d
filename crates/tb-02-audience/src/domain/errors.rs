//! Error types for audience resolution.

use shared_types::{BoardError, StoreError};
use thiserror::Error;

use super::audience::AudienceTarget;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AudienceError {
    /// The membership or watch query behind `target` failed.
    #[error("audience query for {target} failed: {source}")]
    Upstream {
        target: AudienceTarget,
        #[source]
        source: StoreError,
    },
}

impl From<AudienceError> for BoardError {
    fn from(err: AudienceError) -> Self {
        BoardError::Upstream(err.to_string())
    }
}
