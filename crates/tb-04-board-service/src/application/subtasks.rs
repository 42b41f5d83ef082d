//! Subtask handlers. Routes carry only the task id; the gate derives the
//! workspace from it.

use shared_types::{
    BoardError, Subtask, SubtaskDraft, SubtaskId, SubtaskPatch, TaskId, UserId,
};
use tb_01_authorization::Action;
use tb_02_audience::AudienceTarget;
use tracing::info;

use super::service::BoardService;
use crate::domain::messages;
use crate::domain::validation::required_text;
use crate::ports::outbound::SubtaskRepository;

impl BoardService {
    pub async fn list_subtasks(
        &self,
        requester: UserId,
        task: TaskId,
    ) -> Result<Vec<Subtask>, BoardError> {
        self.gate
            .authorize_for_task(requester, task, Action::Read)
            .await?;
        Ok(self.store.list_subtasks(task).await?)
    }

    pub async fn get_subtask(
        &self,
        requester: UserId,
        task: TaskId,
        subtask: SubtaskId,
    ) -> Result<Subtask, BoardError> {
        self.gate
            .authorize_for_task(requester, task, Action::Read)
            .await?;
        Ok(self.store.get_subtask(task, subtask).await?)
    }

    pub async fn create_subtask(
        &self,
        requester: UserId,
        task: TaskId,
        draft: SubtaskDraft,
    ) -> Result<Subtask, BoardError> {
        self.gate
            .authorize_for_task(
                requester,
                task,
                Action::Assign {
                    assignee: draft.assignee_id,
                },
            )
            .await?;
        let draft = SubtaskDraft {
            title: required_text("title", &draft.title)?,
            assignee_id: draft.assignee_id,
        };
        let subtask = self.store.create_subtask(task, draft).await?;

        info!(subtask_id = %subtask.id, task_id = %task, "Subtask created");

        self.notify_user(
            subtask.assignee_id,
            messages::subtask_assigned(&subtask.title),
        );
        self.notify(
            AudienceTarget::TaskAssociates(task),
            messages::subtask_changed(&subtask.title, messages::CREATED),
        )
        .await;
        Ok(subtask)
    }

    /// Apply a partial update. A patch that names an assignee is checked as
    /// an assignment, anything else as plain management.
    pub async fn update_subtask(
        &self,
        requester: UserId,
        task: TaskId,
        subtask: SubtaskId,
        patch: SubtaskPatch,
    ) -> Result<Subtask, BoardError> {
        let action = match patch.assignee_id {
            Some(assignee) => Action::Assign { assignee },
            None => Action::Manage,
        };
        self.gate.authorize_for_task(requester, task, action).await?;

        if patch.is_empty() {
            return Err(BoardError::InvalidArgument("nothing to update".into()));
        }
        let patch = SubtaskPatch {
            title: patch
                .title
                .as_deref()
                .map(|title| required_text("title", title))
                .transpose()?,
            ..patch
        };

        let previous = self.store.get_subtask(task, subtask).await?;
        let updated = self.store.update_subtask(task, subtask, patch).await?;

        info!(subtask_id = %subtask, task_id = %task, "Subtask updated");

        if updated.assignee_id != previous.assignee_id {
            self.notify_user(
                updated.assignee_id,
                messages::subtask_assigned(&updated.title),
            );
        }
        self.notify(
            AudienceTarget::TaskAssociates(task),
            messages::subtask_changed(&updated.title, messages::UPDATED),
        )
        .await;
        Ok(updated)
    }

    pub async fn delete_subtask(
        &self,
        requester: UserId,
        task: TaskId,
        subtask: SubtaskId,
    ) -> Result<(), BoardError> {
        self.gate
            .authorize_for_task(requester, task, Action::Manage)
            .await?;
        let existing = self.store.get_subtask(task, subtask).await?;
        self.store.delete_subtask(task, subtask).await?;

        info!(subtask_id = %subtask, task_id = %task, "Subtask deleted");

        self.notify(
            AudienceTarget::TaskAssociates(task),
            messages::subtask_changed(&existing.title, messages::DELETED),
        )
        .await;
        Ok(())
    }
}
