//! Outbound Ports (Driven Ports / SPI)

use async_trait::async_trait;
use shared_types::{Role, StoreError, TaskId, UserId, WorkspaceId};

/// Role store.
///
/// Maps (user, workspace) to at most one role. Implementations must report
/// an absent membership as `Role::NoRole`, not as an error.
#[async_trait]
pub trait RoleStore: Send + Sync {
    /// Role of `user` in `workspace`, `Role::NoRole` when absent.
    async fn get_role(&self, user: UserId, workspace: WorkspaceId) -> Result<Role, StoreError>;

    /// Workspace that owns `task`.
    async fn get_task_workspace(&self, task: TaskId) -> Result<WorkspaceId, StoreError>;
}
