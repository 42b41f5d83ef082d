//! Outbound Ports (Driven Ports / SPI)
//!
//! One repository per record kind. Uniqueness rules (workspace name, task
//! title within a workspace, subtask title within a task, one role and one
//! watch per pair) are enforced by the implementation and reported as
//! `StoreError::Duplicate`.

use async_trait::async_trait;
use shared_types::{
    Comment, Membership, Role, StoreError, Subtask, SubtaskDraft, SubtaskId, SubtaskPatch, Task,
    TaskDraft, TaskId, TaskStatus, UserId, Workspace, WorkspaceDraft, WorkspaceId,
};

#[async_trait]
pub trait WorkspaceRepository: Send + Sync {
    /// Workspaces where `user` holds any role.
    async fn list_workspaces_for(&self, user: UserId) -> Result<Vec<Workspace>, StoreError>;

    async fn get_workspace(&self, workspace: WorkspaceId) -> Result<Workspace, StoreError>;

    /// Create a workspace and make `owner` its Owner in one step.
    async fn create_workspace(
        &self,
        owner: UserId,
        draft: WorkspaceDraft,
    ) -> Result<Workspace, StoreError>;

    async fn update_workspace(
        &self,
        workspace: WorkspaceId,
        draft: WorkspaceDraft,
    ) -> Result<Workspace, StoreError>;

    /// Delete a workspace with its tasks, subtasks, comments, watches and roles.
    async fn delete_workspace(&self, workspace: WorkspaceId) -> Result<(), StoreError>;
}

#[async_trait]
pub trait TaskRepository: Send + Sync {
    async fn list_tasks(&self, workspace: WorkspaceId) -> Result<Vec<Task>, StoreError>;

    async fn list_assigned_tasks(&self, user: UserId) -> Result<Vec<Task>, StoreError>;

    async fn get_task(&self, task: TaskId) -> Result<Task, StoreError>;

    async fn create_task(&self, workspace: WorkspaceId, draft: TaskDraft)
        -> Result<Task, StoreError>;

    async fn update_task(&self, task: TaskId, draft: TaskDraft) -> Result<Task, StoreError>;

    async fn set_task_status(&self, task: TaskId, status: TaskStatus) -> Result<Task, StoreError>;

    /// Delete a task with its subtasks, comments and watches.
    async fn delete_task(&self, task: TaskId) -> Result<(), StoreError>;
}

#[async_trait]
pub trait SubtaskRepository: Send + Sync {
    async fn list_subtasks(&self, task: TaskId) -> Result<Vec<Subtask>, StoreError>;

    /// `NotFound` when the subtask does not belong to `task`.
    async fn get_subtask(&self, task: TaskId, subtask: SubtaskId) -> Result<Subtask, StoreError>;

    async fn create_subtask(&self, task: TaskId, draft: SubtaskDraft)
        -> Result<Subtask, StoreError>;

    async fn update_subtask(
        &self,
        task: TaskId,
        subtask: SubtaskId,
        patch: SubtaskPatch,
    ) -> Result<Subtask, StoreError>;

    async fn delete_subtask(&self, task: TaskId, subtask: SubtaskId) -> Result<(), StoreError>;
}

#[async_trait]
pub trait MembershipRepository: Send + Sync {
    async fn list_members(&self, workspace: WorkspaceId) -> Result<Vec<Membership>, StoreError>;

    async fn add_member(
        &self,
        workspace: WorkspaceId,
        user: UserId,
        role: Role,
    ) -> Result<Membership, StoreError>;

    async fn set_member_role(
        &self,
        workspace: WorkspaceId,
        user: UserId,
        role: Role,
    ) -> Result<Membership, StoreError>;

    /// Remove the role. Watches the user holds on the workspace's tasks stay.
    async fn remove_member(&self, workspace: WorkspaceId, user: UserId) -> Result<(), StoreError>;
}

#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn list_comments(&self, task: TaskId) -> Result<Vec<Comment>, StoreError>;

    async fn add_comment(
        &self,
        task: TaskId,
        author: UserId,
        text: String,
    ) -> Result<Comment, StoreError>;
}

#[async_trait]
pub trait WatchRepository: Send + Sync {
    async fn is_watching(&self, task: TaskId, user: UserId) -> Result<bool, StoreError>;

    /// Idempotent.
    async fn watch(&self, task: TaskId, user: UserId) -> Result<(), StoreError>;

    /// Idempotent.
    async fn unwatch(&self, task: TaskId, user: UserId) -> Result<(), StoreError>;
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Delete everything that references `user`: roles in every workspace,
    /// tasks and subtasks assigned to them, their comments and watches.
    /// Succeeds when nothing references the user.
    async fn delete_user(&self, user: UserId) -> Result<(), StoreError>;
}

/// Everything the board service persists through.
pub trait BoardRepository:
    WorkspaceRepository
    + TaskRepository
    + SubtaskRepository
    + MembershipRepository
    + CommentRepository
    + WatchRepository
    + UserRepository
{
}

impl<T> BoardRepository for T where
    T: WorkspaceRepository
        + TaskRepository
        + SubtaskRepository
        + MembershipRepository
        + CommentRepository
        + WatchRepository
    + UserRepository
{
}
