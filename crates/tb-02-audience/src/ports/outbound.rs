//! Outbound Ports (Driven Ports / SPI)

use async_trait::async_trait;
use shared_types::{StoreError, TaskId, UserId, WorkspaceId};

/// Membership and watch queries behind every audience.
///
/// Results may contain duplicates; the resolver collapses them.
#[async_trait]
pub trait AudienceSource: Send + Sync {
    /// Users holding any role in `workspace`.
    async fn get_workspace_members(
        &self,
        workspace: WorkspaceId,
    ) -> Result<Vec<UserId>, StoreError>;

    /// Users with a watch on `task`.
    async fn get_watchers(&self, task: TaskId) -> Result<Vec<UserId>, StoreError>;

    /// Users holding any role in the workspace that owns `task`.
    async fn get_associated_users_with_task(&self, task: TaskId)
        -> Result<Vec<UserId>, StoreError>;

    /// Users sharing at least one workspace with `user`, `user` included.
    async fn get_associated_users_with_user(&self, user: UserId)
        -> Result<Vec<UserId>, StoreError>;
}
