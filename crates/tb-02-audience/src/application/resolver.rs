//! Audience Resolver
//!
//! Thin layer over `AudienceSource` that deduplicates results and tags
//! failures with the audience they belong to.

use std::sync::Arc;

use shared_types::UserId;
use tracing::{debug, warn};

use crate::domain::audience::{Audience, AudienceTarget};
use crate::domain::errors::AudienceError;
use crate::ports::outbound::AudienceSource;

#[derive(Clone)]
pub struct AudienceResolver {
    source: Arc<dyn AudienceSource>,
}

impl AudienceResolver {
    pub fn new(source: Arc<dyn AudienceSource>) -> Self {
        Self { source }
    }

    /// Resolve `target` into a deduplicated audience.
    pub async fn resolve(&self, target: AudienceTarget) -> Result<Audience, AudienceError> {
        let result = match target {
            AudienceTarget::TaskAssociates(task) => {
                self.source.get_associated_users_with_task(task).await
            }
            AudienceTarget::UserAssociates(user) => {
                self.source.get_associated_users_with_user(user).await
            }
            AudienceTarget::WorkspaceMembers(workspace) => {
                self.source.get_workspace_members(workspace).await
            }
            AudienceTarget::TaskWatchers(task) => self.source.get_watchers(task).await,
        };

        match result {
            Ok(users) => {
                let audience = Audience::from(users);
                debug!(%target, size = audience.len(), "Audience resolved");
                Ok(audience)
            }
            Err(source) => {
                warn!(%target, error = %source, "Audience query failed");
                Err(AudienceError::Upstream { target, source })
            }
        }
    }

    pub async fn user_associates(&self, user: UserId) -> Result<Audience, AudienceError> {
        self.resolve(AudienceTarget::UserAssociates(user)).await
    }
}
