//! # Subsystem Container
//!
//! Builds every subsystem in dependency order and keeps them alive:
//!
//! 1. Board store (persistence collaborator for every port)
//! 2. Authorization gate and audience resolver over the store
//! 3. Notification hub (spawned actor)
//! 4. Board service
//! 5. Gateway state

use std::sync::Arc;

use tb_01_authorization::AuthorizationGate;
use tb_02_audience::AudienceResolver;
use tb_03_notification_hub::{HubHandle, NotificationHub};
use tb_04_board_service::BoardService;
use tb_05_board_store::InMemoryBoardStore;
use tb_06_api_gateway::{AppState, GatewayConfig};
use tokio::task::JoinHandle;
use tracing::{info, warn};

pub struct BoardContainer {
    pub store: Arc<InMemoryBoardStore>,
    pub audience: AudienceResolver,
    pub hub: HubHandle,
    pub service: BoardService,
    hub_task: JoinHandle<()>,
}

impl BoardContainer {
    /// Must be called from within a Tokio runtime; the hub is spawned here.
    pub fn new() -> Self {
        let store = Arc::new(InMemoryBoardStore::new());
        let gate = AuthorizationGate::new(store.clone());
        let audience = AudienceResolver::new(store.clone());
        let (hub, hub_task) = NotificationHub::spawn(audience.clone());
        let service = BoardService::new(gate, audience.clone(), hub.clone(), store.clone());

        info!("Subsystems initialized");

        Self {
            store,
            audience,
            hub,
            service,
            hub_task,
        }
    }

    pub fn gateway_state(&self, config: GatewayConfig) -> AppState {
        AppState::new(
            self.service.clone(),
            self.hub.clone(),
            self.audience.clone(),
            config,
        )
    }

    /// Stop the hub, closing every live connection, and wait for it.
    pub async fn shutdown(self) {
        self.hub.shutdown();
        if let Err(e) = self.hub_task.await {
            warn!(error = %e, "Notification hub task failed");
        }
    }
}
