//! Membership handlers.

use shared_types::{BoardError, Membership, Role, UserId, WorkspaceId};
use tb_01_authorization::Action;
use tb_02_audience::AudienceTarget;
use tracing::info;

use super::service::BoardService;
use crate::domain::messages;
use crate::ports::outbound::{MembershipRepository, WorkspaceRepository};

impl BoardService {
    pub async fn list_members(
        &self,
        requester: UserId,
        workspace: WorkspaceId,
    ) -> Result<Vec<Membership>, BoardError> {
        self.gate.authorize(requester, workspace, Action::Read).await?;
        Ok(self.store.list_members(workspace).await?)
    }

    pub async fn add_member(
        &self,
        requester: UserId,
        workspace: WorkspaceId,
        target: UserId,
        role: Role,
    ) -> Result<Membership, BoardError> {
        self.gate
            .authorize(requester, workspace, Action::AddMember { target, role })
            .await?;
        let details = self.store.get_workspace(workspace).await?;
        let membership = self.store.add_member(workspace, target, role).await?;

        info!(workspace_id = %workspace, user_id = %target, role = %role, "Member added");

        self.notify(
            AudienceTarget::WorkspaceMembers(workspace),
            messages::member_changed(messages::ADDED),
        )
        .await;
        self.notify_user(target, messages::added_to_workspace(&details.name));
        Ok(membership)
    }

    pub async fn update_member_role(
        &self,
        requester: UserId,
        workspace: WorkspaceId,
        target: UserId,
        role: Role,
    ) -> Result<Membership, BoardError> {
        self.gate
            .authorize(requester, workspace, Action::ChangeRole { target, role })
            .await?;
        let details = self.store.get_workspace(workspace).await?;
        let membership = self.store.set_member_role(workspace, target, role).await?;

        info!(workspace_id = %workspace, user_id = %target, role = %role, "Member role changed");

        self.notify(
            AudienceTarget::WorkspaceMembers(workspace),
            messages::member_changed(messages::UPDATED),
        )
        .await;
        self.notify_user(target, messages::role_updated(&details.name));
        Ok(membership)
    }

    /// Remove `target` from the workspace. With `target == requester` this
    /// is a leave, which is always allowed.
    pub async fn remove_member(
        &self,
        requester: UserId,
        workspace: WorkspaceId,
        target: UserId,
    ) -> Result<(), BoardError> {
        self.gate
            .authorize(requester, workspace, Action::RemoveMember { target })
            .await?;
        let details = self.store.get_workspace(workspace).await?;
        self.store.remove_member(workspace, target).await?;

        info!(workspace_id = %workspace, user_id = %target, requester = %requester, "Member removed");

        self.notify(
            AudienceTarget::WorkspaceMembers(workspace),
            messages::member_changed(messages::REMOVED),
        )
        .await;
        if target != requester {
            self.notify_user(target, messages::removed_from_workspace(&details.name));
        }
        Ok(())
    }

    pub async fn leave_workspace(
        &self,
        requester: UserId,
        workspace: WorkspaceId,
    ) -> Result<(), BoardError> {
        self.remove_member(requester, workspace, requester).await
    }
}
