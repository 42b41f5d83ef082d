//! Error types for the notification hub.

use thiserror::Error;

/// Returned by `HubHandle` when the command loop is gone.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HubError {
    #[error("notification hub is not running")]
    Closed,
}

/// Delivery to a single connection failed. The hub treats every variant as
/// a dead connection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeliveryError {
    #[error("connection closed")]
    Closed,

    #[error("transport error: {0}")]
    Transport(String),

    #[error("failed to encode notification: {0}")]
    Encode(String),
}
