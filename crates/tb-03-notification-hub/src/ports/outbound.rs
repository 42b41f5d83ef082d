//! Outbound Ports (Driven Ports / SPI)

use async_trait::async_trait;
use shared_types::Notification;

use crate::domain::errors::DeliveryError;

/// Write half of one live connection.
///
/// Only the hub's loop calls these methods, one call at a time.
#[async_trait]
pub trait ConnectionSink: Send + Sync {
    /// Push one notification to the peer.
    async fn deliver(&self, notification: &Notification) -> Result<(), DeliveryError>;

    /// Close the connection. Must be safe to call more than once.
    async fn close(&self);
}
