//! Workspace handlers.

use shared_types::{BoardError, UserId, Workspace, WorkspaceDraft, WorkspaceId};
use tb_01_authorization::Action;
use tb_02_audience::AudienceTarget;
use tracing::info;

use super::service::BoardService;
use crate::domain::messages;
use crate::domain::validation::required_text;
use crate::ports::outbound::WorkspaceRepository;

impl BoardService {
    pub async fn list_workspaces(&self, requester: UserId) -> Result<Vec<Workspace>, BoardError> {
        Ok(self.store.list_workspaces_for(requester).await?)
    }

    /// Any authenticated user may create a workspace and becomes its Owner.
    pub async fn create_workspace(
        &self,
        requester: UserId,
        draft: WorkspaceDraft,
    ) -> Result<Workspace, BoardError> {
        let draft = WorkspaceDraft {
            name: required_text("name", &draft.name)?,
            description: draft.description,
        };
        let workspace = self.store.create_workspace(requester, draft).await?;

        info!(workspace_id = %workspace.id, owner = %requester, "Workspace created");
        Ok(workspace)
    }

    pub async fn get_workspace(
        &self,
        requester: UserId,
        workspace: WorkspaceId,
    ) -> Result<Workspace, BoardError> {
        self.gate.authorize(requester, workspace, Action::Read).await?;
        Ok(self.store.get_workspace(workspace).await?)
    }

    pub async fn update_workspace(
        &self,
        requester: UserId,
        workspace: WorkspaceId,
        draft: WorkspaceDraft,
    ) -> Result<Workspace, BoardError> {
        self.gate.authorize(requester, workspace, Action::Manage).await?;
        let draft = WorkspaceDraft {
            name: required_text("name", &draft.name)?,
            description: draft.description,
        };
        let updated = self.store.update_workspace(workspace, draft).await?;

        self.notify(
            AudienceTarget::WorkspaceMembers(workspace),
            messages::workspace_changed(&updated.name, messages::UPDATED),
        )
        .await;
        Ok(updated)
    }

    /// Members are resolved before the delete; afterwards there is nobody
    /// left to resolve.
    pub async fn delete_workspace(
        &self,
        requester: UserId,
        workspace: WorkspaceId,
    ) -> Result<(), BoardError> {
        self.gate.authorize(requester, workspace, Action::Manage).await?;
        let existing = self.store.get_workspace(workspace).await?;
        let members = self
            .audience_of(AudienceTarget::WorkspaceMembers(workspace))
            .await;

        self.store.delete_workspace(workspace).await?;
        info!(workspace_id = %workspace, requester = %requester, "Workspace deleted");

        self.hub.broadcast(
            members,
            messages::workspace_changed(&existing.name, messages::DELETED),
        );
        Ok(())
    }
}

