//! Comment and watch handlers.

use shared_types::{BoardError, Comment, TaskId, UserId, WatchStatus, WorkspaceId};
use tb_01_authorization::Action;
use tb_02_audience::AudienceTarget;
use tracing::{debug, info};

use super::service::BoardService;
use crate::domain::messages;
use crate::ports::outbound::{CommentRepository, WatchRepository};

impl BoardService {
    pub async fn list_comments(
        &self,
        requester: UserId,
        workspace: WorkspaceId,
        task: TaskId,
    ) -> Result<Vec<Comment>, BoardError> {
        self.gate
            .authorize_in_task(requester, workspace, task, Action::Read)
            .await?;
        Ok(self.store.list_comments(task).await?)
    }

    /// Any member may comment. Task associates receive the comment text.
    pub async fn add_comment(
        &self,
        requester: UserId,
        workspace: WorkspaceId,
        task: TaskId,
        text: String,
    ) -> Result<Comment, BoardError> {
        self.gate
            .authorize_in_task(requester, workspace, task, Action::Read)
            .await?;
        if text.trim().is_empty() {
            return Err(BoardError::InvalidArgument("text must not be empty".into()));
        }
        let comment = self.store.add_comment(task, requester, text).await?;

        info!(comment_id = %comment.id, task_id = %task, author = %requester, "Comment added");

        self.notify(
            AudienceTarget::TaskAssociates(task),
            messages::comment_added(&comment.text),
        )
        .await;
        Ok(comment)
    }

    pub async fn watch_status(
        &self,
        requester: UserId,
        workspace: WorkspaceId,
        task: TaskId,
    ) -> Result<WatchStatus, BoardError> {
        self.gate
            .authorize_in_task(requester, workspace, task, Action::Read)
            .await?;
        Ok(self.store.is_watching(task, requester).await?.into())
    }

    pub async fn watch_task(
        &self,
        requester: UserId,
        workspace: WorkspaceId,
        task: TaskId,
    ) -> Result<(), BoardError> {
        self.gate
            .authorize_in_task(requester, workspace, task, Action::Read)
            .await?;
        self.store.watch(task, requester).await?;
        debug!(task_id = %task, user_id = %requester, "Watching task");
        Ok(())
    }

    pub async fn unwatch_task(
        &self,
        requester: UserId,
        workspace: WorkspaceId,
        task: TaskId,
    ) -> Result<(), BoardError> {
        self.gate
            .authorize_in_task(requester, workspace, task, Action::Read)
            .await?;
        self.store.unwatch(task, requester).await?;
        debug!(task_id = %task, user_id = %requester, "Stopped watching task");
        Ok(())
    }
}
