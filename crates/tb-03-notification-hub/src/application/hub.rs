//! Notification Hub
//!
//! The actor that owns the connection map. All four operations run one at a
//! time inside `run`, so a presence query always observes every registration
//! ordered before it and broadcasts never interleave with registry changes.
//!
//! Offline notices need an audience query. That query runs in a spawned task
//! which submits a fresh `Broadcast` command; the loop never waits on its own
//! channel.

use std::collections::HashMap;
use std::sync::Arc;

use shared_types::{Notification, UserId};
use tb_02_audience::AudienceResolver;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use super::handle::HubHandle;
use crate::domain::command::HubCommand;
use crate::domain::connection::ConnectionId;
use crate::domain::presence::Presence;
use crate::ports::outbound::ConnectionSink;

struct Connection {
    id: ConnectionId,
    sink: Arc<dyn ConnectionSink>,
}

pub struct NotificationHub {
    connections: HashMap<UserId, Connection>,
    commands: mpsc::UnboundedReceiver<HubCommand>,
    /// Used to submit offline broadcasts. Weak, so the hub stops once every
    /// external handle is dropped.
    resubmit: mpsc::WeakUnboundedSender<HubCommand>,
    audience: AudienceResolver,
}

impl NotificationHub {
    /// Create the hub and its first handle. Nothing runs until `run` is awaited.
    pub fn new(audience: AudienceResolver) -> (Self, HubHandle) {
        let (tx, rx) = mpsc::unbounded_channel();
        let hub = Self {
            connections: HashMap::new(),
            commands: rx,
            resubmit: tx.downgrade(),
            audience,
        };
        (hub, HubHandle::new(tx))
    }

    /// Create the hub and run it on the current tokio runtime.
    pub fn spawn(audience: AudienceResolver) -> (HubHandle, JoinHandle<()>) {
        let (hub, handle) = Self::new(audience);
        let task = tokio::spawn(hub.run());
        (handle, task)
    }

    /// Process commands until `Shutdown` or until every handle is dropped.
    pub async fn run(mut self) {
        info!("Notification hub started");

        while let Some(command) = self.commands.recv().await {
            match command {
                HubCommand::Register {
                    user,
                    connection,
                    sink,
                } => self.register(user, connection, sink),
                HubCommand::Unregister { user, connection } => {
                    self.unregister(user, connection).await
                }
                HubCommand::Broadcast {
                    targets,
                    notification,
                } => self.broadcast(&targets, &notification).await,
                HubCommand::GetStatus { user, respond_to } => {
                    // Caller may have given up waiting.
                    let _ = respond_to.send(self.status(user));
                }
                HubCommand::Shutdown => {
                    info!("Notification hub shutdown requested");
                    break;
                }
            }
        }

        self.close_all().await;
        info!("Notification hub stopped");
    }

    fn register(&mut self, user: UserId, connection: ConnectionId, sink: Arc<dyn ConnectionSink>) {
        let previous = self.connections.insert(
            user,
            Connection {
                id: connection,
                sink,
            },
        );

        match previous {
            Some(old) => debug!(
                user_id = %user,
                connection_id = %connection,
                replaced = %old.id,
                "Connection replaced"
            ),
            None => info!(
                user_id = %user,
                connection_id = %connection,
                online = self.connections.len(),
                "User online"
            ),
        }
    }

    /// Without a connection id this is unconditional: any mapped connection
    /// is closed and the offline notice goes out whether or not one was.
    /// With an id only that connection is acted on.
    async fn unregister(&mut self, user: UserId, connection: Option<ConnectionId>) {
        let Some(requested) = connection else {
            match self.connections.remove(&user) {
                Some(removed) => self.disconnect(user, removed).await,
                None => {
                    debug!(user_id = %user, "Unregister for absent user");
                    self.spawn_offline_broadcast(user);
                }
            }
            return;
        };

        match self.connections.get(&user) {
            None => {
                debug!(user_id = %user, "Connection already gone, unregister ignored");
                return;
            }
            Some(current) if current.id != requested => {
                debug!(
                    user_id = %user,
                    stale = %requested,
                    current = %current.id,
                    "Stale unregister ignored"
                );
                return;
            }
            Some(_) => {}
        }

        if let Some(removed) = self.connections.remove(&user) {
            self.disconnect(user, removed).await;
        }
    }

    async fn broadcast(&mut self, targets: &[UserId], notification: &Notification) {
        let mut delivered = 0usize;

        for &user in targets {
            let Some(connection) = self.connections.get(&user) else {
                continue;
            };
            let sink = Arc::clone(&connection.sink);

            match sink.deliver(notification).await {
                Ok(()) => delivered += 1,
                Err(e) => {
                    warn!(user_id = %user, error = %e, "Delivery failed, dropping connection");
                    if let Some(removed) = self.connections.remove(&user) {
                        self.disconnect(user, removed).await;
                    }
                }
            }
        }

        debug!(
            targets = targets.len(),
            delivered,
            group = ?notification.group,
            kind = ?notification.kind,
            "Broadcast complete"
        );
    }

    fn status(&self, user: UserId) -> Presence {
        if self.connections.contains_key(&user) {
            Presence::Online
        } else {
            Presence::Offline
        }
    }

    /// Close a connection already removed from the map and announce it.
    async fn disconnect(&self, user: UserId, connection: Connection) {
        connection.sink.close().await;
        info!(
            user_id = %user,
            connection_id = %connection.id,
            online = self.connections.len(),
            "User offline"
        );
        self.spawn_offline_broadcast(user);
    }

    fn spawn_offline_broadcast(&self, user: UserId) {
        let Some(commands) = self.resubmit.upgrade() else {
            debug!(user_id = %user, "No handles left, offline notice skipped");
            return;
        };
        let audience = self.audience.clone();

        tokio::spawn(async move {
            match audience.user_associates(user).await {
                Ok(targets) => {
                    let targets = targets.without(user).into_vec();
                    if targets.is_empty() {
                        return;
                    }
                    let command = HubCommand::Broadcast {
                        targets,
                        notification: Notification::user_offline(),
                    };
                    if commands.send(command).is_err() {
                        debug!(user_id = %user, "Hub stopped before offline notice");
                    }
                }
                Err(e) => {
                    warn!(user_id = %user, error = %e, "Offline notice skipped");
                }
            }
        });
    }

    async fn close_all(&mut self) {
        let count = self.connections.len();
        for (_, connection) in self.connections.drain() {
            connection.sink.close().await;
        }
        if count > 0 {
            info!(closed = count, "Closed remaining connections");
        }
    }
}
