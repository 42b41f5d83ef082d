//! Websocket transport for live notifications.
//!
//! The socket is split: the write half becomes the hub's `ConnectionSink`,
//! the read half feeds the session's read loop.

use std::sync::Arc;

use async_trait::async_trait;
use axum::extract::ws::{Message, WebSocket};
use futures::stream::SplitSink;
use futures::{SinkExt, StreamExt};
use shared_types::{Notification, UserId};
use tb_02_audience::AudienceResolver;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::application::handle::HubHandle;
use crate::application::session::{ConnectionSession, InboundFrame};
use crate::domain::errors::DeliveryError;
use crate::ports::outbound::ConnectionSink;

/// Write half of an accepted websocket.
pub struct WebSocketSink {
    inner: Mutex<SplitSink<WebSocket, Message>>,
}

impl WebSocketSink {
    pub fn new(inner: SplitSink<WebSocket, Message>) -> Self {
        Self {
            inner: Mutex::new(inner),
        }
    }
}

#[async_trait]
impl ConnectionSink for WebSocketSink {
    async fn deliver(&self, notification: &Notification) -> Result<(), DeliveryError> {
        let text = notification
            .to_json()
            .map_err(|e| DeliveryError::Encode(e.to_string()))?;

        self.inner
            .lock()
            .await
            .send(Message::Text(text))
            .await
            .map_err(|e| DeliveryError::Transport(e.to_string()))
    }

    async fn close(&self) {
        if let Err(e) = self.inner.lock().await.close().await {
            debug!(error = %e, "Websocket already closed");
        }
    }
}

/// Serve an upgraded websocket for `user` until it closes.
///
/// Frames larger than `max_message_size` are treated as a protocol error and
/// end the connection.
pub async fn serve_websocket(
    hub: HubHandle,
    audience: AudienceResolver,
    user: UserId,
    socket: WebSocket,
    max_message_size: usize,
) {
    let (write, read) = socket.split();
    let sink: Arc<dyn ConnectionSink> = Arc::new(WebSocketSink::new(write));

    let inbound = read.map(move |frame| match frame {
        Ok(Message::Close(_)) => Ok(InboundFrame::Close),
        Ok(Message::Text(text)) if text.len() > max_message_size => {
            warn!(size = text.len(), max = max_message_size, "Message exceeds size limit");
            Err(format!("message of {} bytes exceeds limit", text.len()))
        }
        Ok(Message::Binary(data)) if data.len() > max_message_size => {
            warn!(size = data.len(), max = max_message_size, "Message exceeds size limit");
            Err(format!("message of {} bytes exceeds limit", data.len()))
        }
        Ok(_) => Ok(InboundFrame::Message),
        Err(e) => Err(e.to_string()),
    });

    ConnectionSession::new(hub, audience, user)
        .run(sink, inbound)
        .await;
}
