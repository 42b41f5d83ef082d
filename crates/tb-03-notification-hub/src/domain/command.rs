//! Commands accepted by the hub's loop.

use std::fmt;
use std::sync::Arc;

use shared_types::{Notification, UserId};
use tokio::sync::oneshot;

use super::connection::ConnectionId;
use super::presence::Presence;
use crate::ports::outbound::ConnectionSink;

pub enum HubCommand {
    /// Install or replace `user`'s connection.
    Register {
        user: UserId,
        connection: ConnectionId,
        sink: Arc<dyn ConnectionSink>,
    },
    /// Remove `user`'s connection.
    ///
    /// With `connection` set, the request only applies while that connection
    /// is still the registered one.
    Unregister {
        user: UserId,
        connection: Option<ConnectionId>,
    },
    /// Deliver `notification` to every registered user in `targets`.
    Broadcast {
        targets: Vec<UserId>,
        notification: Notification,
    },
    GetStatus {
        user: UserId,
        respond_to: oneshot::Sender<Presence>,
    },
    /// Close every connection and stop the loop.
    Shutdown,
}

impl fmt::Debug for HubCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HubCommand::Register { user, connection, .. } => f
                .debug_struct("Register")
                .field("user", user)
                .field("connection", connection)
                .finish_non_exhaustive(),
            HubCommand::Unregister { user, connection } => f
                .debug_struct("Unregister")
                .field("user", user)
                .field("connection", connection)
                .finish(),
            HubCommand::Broadcast { targets, notification } => f
                .debug_struct("Broadcast")
                .field("targets", &targets.len())
                .field("notification", notification)
                .finish(),
            HubCommand::GetStatus { user, .. } => f
                .debug_struct("GetStatus")
                .field("user", user)
                .finish_non_exhaustive(),
            HubCommand::Shutdown => f.write_str("Shutdown"),
        }
    }
}
