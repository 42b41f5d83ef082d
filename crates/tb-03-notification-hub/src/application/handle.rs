//! Cloneable handle to the hub's command loop.

use std::sync::Arc;

use shared_types::{Notification, UserId};
use tb_02_audience::Audience;
use tokio::sync::{mpsc, oneshot};
use tracing::warn;

use crate::domain::command::HubCommand;
use crate::domain::connection::ConnectionId;
use crate::domain::errors::HubError;
use crate::domain::presence::Presence;
use crate::ports::outbound::ConnectionSink;

/// Every operation is a message to the hub; nothing here touches the
/// connection map.
#[derive(Clone)]
pub struct HubHandle {
    commands: mpsc::UnboundedSender<HubCommand>,
}

impl HubHandle {
    pub(crate) fn new(commands: mpsc::UnboundedSender<HubCommand>) -> Self {
        Self { commands }
    }

    /// Install `sink` as `user`'s live connection, replacing any previous one.
    pub fn register(
        &self,
        user: UserId,
        connection: ConnectionId,
        sink: Arc<dyn ConnectionSink>,
    ) -> Result<(), HubError> {
        self.commands
            .send(HubCommand::Register {
                user,
                connection,
                sink,
            })
            .map_err(|_| HubError::Closed)
    }

    /// Remove whatever connection `user` currently has and announce them
    /// offline, even if they had none.
    pub fn unregister(&self, user: UserId) {
        self.send(HubCommand::Unregister {
            user,
            connection: None,
        });
    }

    /// Remove `user`'s connection only if it is still `connection`.
    pub fn unregister_connection(&self, user: UserId, connection: ConnectionId) {
        self.send(HubCommand::Unregister {
            user,
            connection: Some(connection),
        });
    }

    /// Fire-and-forget delivery to every connected user in `targets`.
    ///
    /// Duplicate targets receive one copy. Absent targets are skipped.
    pub fn broadcast(&self, targets: impl IntoIterator<Item = UserId>, notification: Notification) {
        let targets = targets.into_iter().collect::<Audience>().into_vec();
        if targets.is_empty() {
            return;
        }
        self.send(HubCommand::Broadcast {
            targets,
            notification,
        });
    }

    /// Presence of `user`, answered from the hub's current state.
    pub async fn status(&self, user: UserId) -> Result<Presence, HubError> {
        let (respond_to, response) = oneshot::channel();
        self.commands
            .send(HubCommand::GetStatus { user, respond_to })
            .map_err(|_| HubError::Closed)?;
        response.await.map_err(|_| HubError::Closed)
    }

    /// Ask the hub to close every connection and stop.
    pub fn shutdown(&self) {
        self.send(HubCommand::Shutdown);
    }

    fn send(&self, command: HubCommand) {
        if let Err(mpsc::error::SendError(command)) = self.commands.send(command) {
            warn!(?command, "Notification hub stopped, command dropped");
        }
    }
}
