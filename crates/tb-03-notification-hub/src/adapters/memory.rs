//! In-memory connection sink.
//!
//! Delivers notifications into a tokio channel. Used by tests and by any
//! in-process consumer that wants live notifications without a socket.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use shared_types::Notification;
use tokio::sync::mpsc;

use crate::domain::errors::DeliveryError;
use crate::ports::outbound::ConnectionSink;

pub struct ChannelSink {
    tx: mpsc::UnboundedSender<Notification>,
    broken: AtomicBool,
    closed: AtomicBool,
    close_calls: AtomicUsize,
}

impl ChannelSink {
    /// New sink and the receiver that observes its deliveries.
    pub fn new() -> (Arc<Self>, mpsc::UnboundedReceiver<Notification>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let sink = Arc::new(Self {
            tx,
            broken: AtomicBool::new(false),
            closed: AtomicBool::new(false),
            close_calls: AtomicUsize::new(0),
        });
        (sink, rx)
    }

    /// Make every later delivery fail, as a dropped peer would.
    pub fn break_connection(&self) {
        self.broken.store(true, Ordering::SeqCst);
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    pub fn close_calls(&self) -> usize {
        self.close_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ConnectionSink for ChannelSink {
    async fn deliver(&self, notification: &Notification) -> Result<(), DeliveryError> {
        if self.broken.load(Ordering::SeqCst) {
            return Err(DeliveryError::Transport("peer went away".into()));
        }
        if self.closed.load(Ordering::SeqCst) {
            return Err(DeliveryError::Closed);
        }
        self.tx
            .send(notification.clone())
            .map_err(|_| DeliveryError::Closed)
    }

    async fn close(&self) {
        self.closed.store(true, Ordering::SeqCst);
        self.close_calls.fetch_add(1, Ordering::SeqCst);
    }
}
