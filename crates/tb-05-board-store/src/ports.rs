//! Port implementations for `InMemoryBoardStore`.

use async_trait::async_trait;
use shared_types::{
    Comment, Membership, Role, StoreError, Subtask, SubtaskDraft, SubtaskId, SubtaskPatch, Task,
    TaskDraft, TaskId, TaskStatus, UserId, Workspace, WorkspaceDraft, WorkspaceId,
};
use tb_01_authorization::RoleStore;
use tb_02_audience::AudienceSource;
use tb_04_board_service::{
    CommentRepository, MembershipRepository, SubtaskRepository, TaskRepository, UserRepository,
    WatchRepository, WorkspaceRepository,
};

use crate::store::InMemoryBoardStore;

#[async_trait]
impl RoleStore for InMemoryBoardStore {
    async fn get_role(&self, user: UserId, workspace: WorkspaceId) -> Result<Role, StoreError> {
        self.check_roles()?;
        Ok(self.tables.read().role(user, workspace))
    }

    async fn get_task_workspace(&self, task: TaskId) -> Result<WorkspaceId, StoreError> {
        self.check_roles()?;
        Ok(self.tables.read().task(task)?.workspace_id)
    }
}

#[async_trait]
impl AudienceSource for InMemoryBoardStore {
    async fn get_workspace_members(
        &self,
        workspace: WorkspaceId,
    ) -> Result<Vec<UserId>, StoreError> {
        self.check_audience()?;
        Ok(self.tables.read().member_ids(workspace))
    }

    async fn get_watchers(&self, task: TaskId) -> Result<Vec<UserId>, StoreError> {
        self.check_audience()?;
        Ok(self.tables.read().watchers(task))
    }

    async fn get_associated_users_with_task(
        &self,
        task: TaskId,
    ) -> Result<Vec<UserId>, StoreError> {
        self.check_audience()?;
        let tables = self.tables.read();
        let workspace = tables.task(task)?.workspace_id;
        Ok(tables.member_ids(workspace))
    }

    async fn get_associated_users_with_user(
        &self,
        user: UserId,
    ) -> Result<Vec<UserId>, StoreError> {
        self.check_audience()?;
        Ok(self.tables.read().associates_of(user))
    }
}

#[async_trait]
impl WorkspaceRepository for InMemoryBoardStore {
    async fn list_workspaces_for(&self, user: UserId) -> Result<Vec<Workspace>, StoreError> {
        Ok(self.tables.read().workspaces_for(user))
    }

    async fn get_workspace(&self, workspace: WorkspaceId) -> Result<Workspace, StoreError> {
        self.tables.read().workspace(workspace).cloned()
    }

    async fn create_workspace(
        &self,
        owner: UserId,
        draft: WorkspaceDraft,
    ) -> Result<Workspace, StoreError> {
        self.tables.write().create_workspace(owner, draft)
    }

    async fn update_workspace(
        &self,
        workspace: WorkspaceId,
        draft: WorkspaceDraft,
    ) -> Result<Workspace, StoreError> {
        self.tables.write().update_workspace(workspace, draft)
    }

    async fn delete_workspace(&self, workspace: WorkspaceId) -> Result<(), StoreError> {
        self.tables.write().delete_workspace(workspace)
    }
}

#[async_trait]
impl TaskRepository for InMemoryBoardStore {
    async fn list_tasks(&self, workspace: WorkspaceId) -> Result<Vec<Task>, StoreError> {
        Ok(self.tables.read().tasks_in(workspace))
    }

    async fn list_assigned_tasks(&self, user: UserId) -> Result<Vec<Task>, StoreError> {
        Ok(self.tables.read().tasks_assigned_to(user))
    }

    async fn get_task(&self, task: TaskId) -> Result<Task, StoreError> {
        self.tables.read().task(task).cloned()
    }

    async fn create_task(
        &self,
        workspace: WorkspaceId,
        draft: TaskDraft,
    ) -> Result<Task, StoreError> {
        self.tables.write().create_task(workspace, draft)
    }

    async fn update_task(&self, task: TaskId, draft: TaskDraft) -> Result<Task, StoreError> {
        self.tables.write().update_task(task, draft)
    }

    async fn set_task_status(&self, task: TaskId, status: TaskStatus) -> Result<Task, StoreError> {
        self.tables.write().set_task_status(task, status)
    }

    async fn delete_task(&self, task: TaskId) -> Result<(), StoreError> {
        self.tables.write().delete_task(task)
    }
}

#[async_trait]
impl SubtaskRepository for InMemoryBoardStore {
    async fn list_subtasks(&self, task: TaskId) -> Result<Vec<Subtask>, StoreError> {
        self.tables.read().subtasks_of(task)
    }

    async fn get_subtask(&self, task: TaskId, subtask: SubtaskId) -> Result<Subtask, StoreError> {
        self.tables.read().subtask(task, subtask).cloned()
    }

    async fn create_subtask(
        &self,
        task: TaskId,
        draft: SubtaskDraft,
    ) -> Result<Subtask, StoreError> {
        self.tables.write().create_subtask(task, draft)
    }

    async fn update_subtask(
        &self,
        task: TaskId,
        subtask: SubtaskId,
        patch: SubtaskPatch,
    ) -> Result<Subtask, StoreError> {
        self.tables.write().update_subtask(task, subtask, patch)
    }

    async fn delete_subtask(&self, task: TaskId, subtask: SubtaskId) -> Result<(), StoreError> {
        self.tables.write().delete_subtask(task, subtask)
    }
}

#[async_trait]
impl MembershipRepository for InMemoryBoardStore {
    async fn list_members(&self, workspace: WorkspaceId) -> Result<Vec<Membership>, StoreError> {
        Ok(self.tables.read().members(workspace))
    }

    async fn add_member(
        &self,
        workspace: WorkspaceId,
        user: UserId,
        role: Role,
    ) -> Result<Membership, StoreError> {
        self.tables.write().add_member(workspace, user, role)
    }

    async fn set_member_role(
        &self,
        workspace: WorkspaceId,
        user: UserId,
        role: Role,
    ) -> Result<Membership, StoreError> {
        self.tables.write().set_member_role(workspace, user, role)
    }

    async fn remove_member(&self, workspace: WorkspaceId, user: UserId) -> Result<(), StoreError> {
        self.tables.write().remove_member(workspace, user)
    }
}

#[async_trait]
impl CommentRepository for InMemoryBoardStore {
    async fn list_comments(&self, task: TaskId) -> Result<Vec<Comment>, StoreError> {
        self.tables.read().comments_of(task)
    }

    async fn add_comment(
        &self,
        task: TaskId,
        author: UserId,
        text: String,
    ) -> Result<Comment, StoreError> {
        self.tables.write().add_comment(task, author, text)
    }
}

#[async_trait]
impl WatchRepository for InMemoryBoardStore {
    async fn is_watching(&self, task: TaskId, user: UserId) -> Result<bool, StoreError> {
        let tables = self.tables.read();
        tables.task(task)?;
        Ok(tables.is_watching(task, user))
    }

    async fn watch(&self, task: TaskId, user: UserId) -> Result<(), StoreError> {
        self.tables.write().watch(task, user)
    }

    async fn unwatch(&self, task: TaskId, user: UserId) -> Result<(), StoreError> {
        self.tables.write().unwatch(task, user)
    }
}

#[async_trait]
impl UserRepository for InMemoryBoardStore {
    async fn delete_user(&self, user: UserId) -> Result<(), StoreError> {
        self.tables.write().delete_user(user);
        Ok(())
    }
}
