//! Board Service
//!
//! Shared plumbing for the per-resource handlers: the collaborators, the
//! best-effort notification helpers and the presence query.

use std::sync::Arc;

use shared_types::{BoardError, Notification, UserId};
use tb_01_authorization::AuthorizationGate;
use tb_02_audience::{Audience, AudienceResolver, AudienceTarget};
use tb_03_notification_hub::{HubHandle, Presence};
use tracing::{debug, warn};

use crate::ports::outbound::BoardRepository;

/// Mutation and query handlers for the task board.
#[derive(Clone)]
pub struct BoardService {
    pub(crate) gate: AuthorizationGate,
    pub(crate) audience: AudienceResolver,
    pub(crate) hub: HubHandle,
    pub(crate) store: Arc<dyn BoardRepository>,
}

impl BoardService {
    pub fn new(
        gate: AuthorizationGate,
        audience: AudienceResolver,
        hub: HubHandle,
        store: Arc<dyn BoardRepository>,
    ) -> Self {
        Self {
            gate,
            audience,
            hub,
            store,
        }
    }

    /// Live presence of `user` as seen by the notification hub.
    pub async fn user_status(&self, requester: UserId, user: UserId) -> Result<Presence, BoardError> {
        debug!(requester = %requester, user_id = %user, "Presence query");
        self.hub
            .status(user)
            .await
            .map_err(|e| BoardError::Upstream(e.to_string()))
    }

    /// Resolve `target`, or an empty audience when the query fails.
    ///
    /// Called after (or right before) a committed mutation, so a failure
    /// here must not turn into a handler error.
    pub(crate) async fn audience_of(&self, target: AudienceTarget) -> Audience {
        match self.audience.resolve(target).await {
            Ok(audience) => audience,
            Err(e) => {
                warn!(error = %e, "Notification skipped, audience unavailable");
                Audience::new()
            }
        }
    }

    pub(crate) async fn notify(&self, target: AudienceTarget, notification: Notification) {
        let audience = self.audience_of(target).await;
        self.hub.broadcast(audience, notification);
    }

    pub(crate) fn notify_user(&self, user: UserId, notification: Notification) {
        self.hub.broadcast([user], notification);
    }
}
