//! In-memory board wired the way the runtime wires it, plus live
//! connections that record what they receive.

use std::sync::Arc;
use std::time::Duration;

use shared_types::{Notification, Role, TaskDraft, TaskId, UserId, WorkspaceDraft, WorkspaceId};
use tb_01_authorization::AuthorizationGate;
use tb_02_audience::AudienceResolver;
use tb_03_notification_hub::{ChannelSink, ConnectionId, HubHandle, NotificationHub, Presence};
use tb_04_board_service::{BoardService, MembershipRepository, TaskRepository, WorkspaceRepository};
use tb_05_board_store::InMemoryBoardStore;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::task::JoinHandle;
use tokio::time::timeout;

pub const OWNER: UserId = UserId(1);
pub const ADMIN: UserId = UserId(2);
pub const STANDARD: UserId = UserId(3);
pub const OUTSIDER: UserId = UserId(4);

/// How long a receiver waits before a missing message counts as absent.
const WAIT: Duration = Duration::from_millis(250);
const QUIET: Duration = Duration::from_millis(100);

pub struct Board {
    pub store: Arc<InMemoryBoardStore>,
    pub audience: AudienceResolver,
    pub hub: HubHandle,
    pub service: BoardService,
    pub hub_task: JoinHandle<()>,
}

impl Board {
    pub fn new() -> Self {
        let store = Arc::new(InMemoryBoardStore::new());
        let gate = AuthorizationGate::new(store.clone());
        let audience = AudienceResolver::new(store.clone());
        let (hub, hub_task) = NotificationHub::spawn(audience.clone());
        let service = BoardService::new(gate, audience.clone(), hub.clone(), store.clone());

        Self {
            store,
            audience,
            hub,
            service,
            hub_task,
        }
    }

    /// Workspace owned by `OWNER` with `ADMIN` and `STANDARD` as members.
    /// `OUTSIDER` holds no role.
    pub async fn team(&self, name: &str) -> WorkspaceId {
        let workspace = self
            .store
            .create_workspace(
                OWNER,
                WorkspaceDraft {
                    name: name.to_string(),
                    description: String::new(),
                },
            )
            .await
            .unwrap()
            .id;
        self.grant(workspace, ADMIN, Role::Admin).await;
        self.grant(workspace, STANDARD, Role::StandardUser).await;
        workspace
    }

    pub async fn grant(&self, workspace: WorkspaceId, user: UserId, role: Role) {
        self.store.add_member(workspace, user, role).await.unwrap();
    }

    /// Task seeded straight into the store, so no notification is sent.
    pub async fn seed_task(&self, workspace: WorkspaceId, title: &str, assignee: UserId) -> TaskId {
        self.store
            .create_task(workspace, TaskDraft::new(title, assignee))
            .await
            .unwrap()
            .id
    }

    /// Register a live connection for `user` without an online announcement.
    pub fn connect(&self, user: UserId) -> Live {
        let (sink, rx) = ChannelSink::new();
        let connection = ConnectionId::new();
        self.hub.register(user, connection, sink.clone()).unwrap();
        Live {
            sink,
            connection,
            rx,
        }
    }

    /// Poll until the hub reports `expected` for `user`.
    pub async fn wait_for_presence(&self, user: UserId, expected: Presence) {
        timeout(Duration::from_secs(2), async {
            while self.hub.status(user).await.unwrap() != expected {
                tokio::time::sleep(Duration::from_millis(5)).await;
            }
        })
        .await
        .expect("presence did not settle");
    }
}

pub struct Live {
    pub sink: Arc<ChannelSink>,
    pub connection: ConnectionId,
    rx: UnboundedReceiver<Notification>,
}

impl Live {
    pub async fn next(&mut self) -> Option<Notification> {
        timeout(WAIT, self.rx.recv()).await.ok().flatten()
    }

    /// Everything delivered until the connection goes quiet.
    pub async fn drain(&mut self) -> Vec<Notification> {
        let mut received = Vec::new();
        while let Ok(Some(notification)) = timeout(QUIET, self.rx.recv()).await {
            received.push(notification);
        }
        received
    }

    pub async fn is_quiet(&mut self) -> bool {
        timeout(QUIET, self.rx.recv()).await.is_err()
    }
}

pub fn messages(received: &[Notification]) -> Vec<&str> {
    received.iter().map(|n| n.message.as_str()).collect()
}
