//! Task handlers.
//!
//! Routes name both the workspace and the task, so every task-level handler
//! goes through `authorize_in_task` and the cross-check runs first.

use shared_types::{BoardError, Task, TaskDraft, TaskId, TaskStatus, UserId, WorkspaceId};
use tb_01_authorization::Action;
use tb_02_audience::AudienceTarget;
use tracing::info;

use super::service::BoardService;
use crate::domain::messages;
use crate::domain::validation::required_text;
use crate::ports::outbound::TaskRepository;

impl BoardService {
    pub async fn list_tasks(
        &self,
        requester: UserId,
        workspace: WorkspaceId,
    ) -> Result<Vec<Task>, BoardError> {
        self.gate.authorize(requester, workspace, Action::Read).await?;
        Ok(self.store.list_tasks(workspace).await?)
    }

    /// Tasks assigned to the requester across all of their workspaces.
    pub async fn assigned_tasks(&self, requester: UserId) -> Result<Vec<Task>, BoardError> {
        Ok(self.store.list_assigned_tasks(requester).await?)
    }

    pub async fn get_task(
        &self,
        requester: UserId,
        workspace: WorkspaceId,
        task: TaskId,
    ) -> Result<Task, BoardError> {
        self.gate
            .authorize_in_task(requester, workspace, task, Action::Read)
            .await?;
        Ok(self.store.get_task(task).await?)
    }

    pub async fn create_task(
        &self,
        requester: UserId,
        workspace: WorkspaceId,
        draft: TaskDraft,
    ) -> Result<Task, BoardError> {
        self.gate
            .authorize(
                requester,
                workspace,
                Action::Assign {
                    assignee: draft.assignee_id,
                },
            )
            .await?;
        let draft = TaskDraft {
            title: required_text("title", &draft.title)?,
            ..draft
        };
        let task = self.store.create_task(workspace, draft).await?;

        info!(
            task_id = %task.id,
            workspace_id = %workspace,
            assignee = %task.assignee_id,
            "Task created"
        );

        self.notify_user(task.assignee_id, messages::task_assigned(&task.title));
        self.notify(
            AudienceTarget::TaskAssociates(task.id),
            messages::task_changed(&task.title, messages::CREATED),
        )
        .await;
        Ok(task)
    }

    pub async fn update_task(
        &self,
        requester: UserId,
        workspace: WorkspaceId,
        task: TaskId,
        draft: TaskDraft,
    ) -> Result<Task, BoardError> {
        self.gate
            .authorize_in_task(
                requester,
                workspace,
                task,
                Action::Assign {
                    assignee: draft.assignee_id,
                },
            )
            .await?;
        let draft = TaskDraft {
            title: required_text("title", &draft.title)?,
            ..draft
        };
        let previous = self.store.get_task(task).await?;
        let updated = self.store.update_task(task, draft).await?;

        info!(task_id = %task, requester = %requester, "Task updated");

        if updated.assignee_id != previous.assignee_id {
            self.notify_user(updated.assignee_id, messages::task_assigned(&updated.title));
        }
        self.notify_change(&updated, messages::UPDATED).await;
        Ok(updated)
    }

    pub async fn update_task_status(
        &self,
        requester: UserId,
        workspace: WorkspaceId,
        task: TaskId,
        status: TaskStatus,
    ) -> Result<Task, BoardError> {
        self.gate
            .authorize_in_task(requester, workspace, task, Action::Manage)
            .await?;
        let updated = self.store.set_task_status(task, status).await?;

        info!(task_id = %task, status = ?status, "Task status changed");

        self.notify_change(&updated, messages::UPDATED).await;
        Ok(updated)
    }

    /// Watchers and associates are resolved before the delete removes the
    /// rows they are computed from.
    pub async fn delete_task(
        &self,
        requester: UserId,
        workspace: WorkspaceId,
        task: TaskId,
    ) -> Result<(), BoardError> {
        self.gate
            .authorize_in_task(requester, workspace, task, Action::Manage)
            .await?;
        let existing = self.store.get_task(task).await?;
        let watchers = self.audience_of(AudienceTarget::TaskWatchers(task)).await;
        let associates = self.audience_of(AudienceTarget::TaskAssociates(task)).await;

        self.store.delete_task(task).await?;
        info!(task_id = %task, requester = %requester, "Task deleted");

        self.hub.broadcast(
            watchers,
            messages::watched_task_changed(&existing.title, messages::DELETED),
        );
        self.hub.broadcast(
            associates,
            messages::task_changed(&existing.title, messages::DELETED),
        );
        Ok(())
    }

    /// Watchers get the personal notice, associates the board-wide one.
    async fn notify_change(&self, task: &Task, verb: &str) {
        self.notify(
            AudienceTarget::TaskWatchers(task.id),
            messages::watched_task_changed(&task.title, verb),
        )
        .await;
        self.notify(
            AudienceTarget::TaskAssociates(task.id),
            messages::task_changed(&task.title, verb),
        )
        .await;
    }
}
