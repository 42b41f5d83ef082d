//! Connection lifecycle.
//!
//! One session per accepted connection:
//! 1. Register the connection with the hub under a fresh `ConnectionId`
//! 2. Tell the user's associates that they came online (best effort)
//! 3. Read until the transport closes or fails
//! 4. Unregister, scoped to this connection so a newer one is left alone

use std::fmt::Display;
use std::sync::Arc;

use futures::{Stream, StreamExt};
use shared_types::{Notification, UserId};
use tb_02_audience::AudienceResolver;
use tracing::{debug, info, warn};

use super::handle::HubHandle;
use crate::domain::connection::ConnectionId;
use crate::ports::outbound::ConnectionSink;

/// What the read half of a connection observed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InboundFrame {
    /// Any data or keep-alive frame. Clients have nothing to say to the hub,
    /// so the content is ignored.
    Message,
    /// Peer asked to close.
    Close,
}

pub struct ConnectionSession {
    hub: HubHandle,
    audience: AudienceResolver,
    user: UserId,
    connection: ConnectionId,
}

impl ConnectionSession {
    pub fn new(hub: HubHandle, audience: AudienceResolver, user: UserId) -> Self {
        Self {
            hub,
            audience,
            user,
            connection: ConnectionId::new(),
        }
    }

    pub fn connection_id(&self) -> ConnectionId {
        self.connection
    }

    /// Drive the connection until it closes. `sink` is the write half,
    /// `inbound` the read half.
    pub async fn run<S, E>(self, sink: Arc<dyn ConnectionSink>, mut inbound: S)
    where
        S: Stream<Item = Result<InboundFrame, E>> + Unpin,
        E: Display,
    {
        if self
            .hub
            .register(self.user, self.connection, Arc::clone(&sink))
            .is_err()
        {
            warn!(user_id = %self.user, "Notification hub stopped, rejecting connection");
            sink.close().await;
            return;
        }

        info!(
            user_id = %self.user,
            connection_id = %self.connection,
            "Connection attached"
        );

        self.announce_online().await;

        while let Some(frame) = inbound.next().await {
            match frame {
                Ok(InboundFrame::Message) => {
                    debug!(connection_id = %self.connection, "Inbound frame ignored");
                }
                Ok(InboundFrame::Close) => {
                    debug!(connection_id = %self.connection, "Close received");
                    break;
                }
                Err(e) => {
                    warn!(connection_id = %self.connection, error = %e, "Connection read failed");
                    break;
                }
            }
        }

        self.hub.unregister_connection(self.user, self.connection);

        info!(
            user_id = %self.user,
            connection_id = %self.connection,
            "Connection detached"
        );
    }

    /// A failed audience query is logged and the session carries on.
    async fn announce_online(&self) {
        match self.audience.user_associates(self.user).await {
            Ok(associates) => {
                self.hub
                    .broadcast(associates.without(self.user), Notification::user_online());
            }
            Err(e) => {
                warn!(user_id = %self.user, error = %e, "Online notice skipped");
            }
        }
    }
}
