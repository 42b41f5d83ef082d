//! Authorization Gate Service
//!
//! Resolves the roles an `Action` depends on, then applies the pure policy.
//!
//! Order of evaluation:
//! 1. Task cross-check (when a task is named): unknown task or a task owned
//!    by another workspace is an invalid argument, before any role lookup
//! 2. Requester role lookup
//! 3. Requester-only precheck for target-bearing actions
//! 4. Target role lookup and full policy evaluation

use std::sync::Arc;

use shared_types::{Role, StoreError, TaskId, UserId, WorkspaceId};
use tracing::{debug, warn};

use crate::domain::action::{Action, Check};
use crate::domain::errors::AccessError;
use crate::domain::policy::{decide, requester_precheck, Decision};
use crate::ports::outbound::RoleStore;

/// Authorization gate consulted by every board mutation.
#[derive(Clone)]
pub struct AuthorizationGate {
    roles: Arc<dyn RoleStore>,
}

impl AuthorizationGate {
    pub fn new(roles: Arc<dyn RoleStore>) -> Self {
        Self { roles }
    }

    /// Authorize `action` by `requester` in `workspace`.
    ///
    /// Returns the requester's role on success.
    pub async fn authorize(
        &self,
        requester: UserId,
        workspace: WorkspaceId,
        action: Action,
    ) -> Result<Role, AccessError> {
        let requester_role = self.role_of(requester, workspace).await?;

        let check = match action {
            Action::Read => Check::Read,
            Action::Manage => Check::Manage,
            Action::Assign { assignee } => {
                self.precheck(requester, workspace, requester_role, action)?;
                Check::Assign {
                    assignee: self.role_of(assignee, workspace).await?,
                }
            }
            Action::AddMember { target, role } => {
                self.precheck(requester, workspace, requester_role, action)?;
                Check::AddMember {
                    target: self.role_of(target, workspace).await?,
                    new_role: role,
                }
            }
            Action::ChangeRole { target, role } => {
                self.precheck(requester, workspace, requester_role, action)?;
                Check::ChangeRole {
                    target: self.role_of(target, workspace).await?,
                    new_role: role,
                }
            }
            Action::RemoveMember { target } if target == requester => Check::RemoveMember {
                target: requester_role,
                is_self: true,
            },
            Action::RemoveMember { target } => {
                self.precheck(requester, workspace, requester_role, action)?;
                Check::RemoveMember {
                    target: self.role_of(target, workspace).await?,
                    is_self: false,
                }
            }
        };

        self.apply(requester, workspace, requester_role, action, &check)
    }

    /// Authorize `action` on a task the caller claims belongs to `workspace`.
    pub async fn authorize_in_task(
        &self,
        requester: UserId,
        workspace: WorkspaceId,
        task: TaskId,
        action: Action,
    ) -> Result<Role, AccessError> {
        let owner = self.task_workspace(task).await?;
        if owner != workspace {
            debug!(
                task_id = %task,
                claimed = %workspace,
                actual = %owner,
                "Task does not belong to the named workspace"
            );
            return Err(AccessError::InvalidArgument(format!(
                "task {} does not belong to workspace {}",
                task, workspace
            )));
        }
        self.authorize(requester, workspace, action).await
    }

    /// Authorize `action` on a task addressed without its workspace.
    ///
    /// Returns the task's workspace on success.
    pub async fn authorize_for_task(
        &self,
        requester: UserId,
        task: TaskId,
        action: Action,
    ) -> Result<WorkspaceId, AccessError> {
        let workspace = self.task_workspace(task).await?;
        self.authorize(requester, workspace, action).await?;
        Ok(workspace)
    }

    async fn role_of(&self, user: UserId, workspace: WorkspaceId) -> Result<Role, AccessError> {
        self.roles.get_role(user, workspace).await.map_err(|e| {
            warn!(user_id = %user, workspace_id = %workspace, error = %e, "Role lookup failed");
            AccessError::Upstream(e)
        })
    }

    async fn task_workspace(&self, task: TaskId) -> Result<WorkspaceId, AccessError> {
        match self.roles.get_task_workspace(task).await {
            Ok(workspace) => Ok(workspace),
            Err(StoreError::NotFound { .. }) => Err(AccessError::InvalidArgument(format!(
                "task {} does not exist",
                task
            ))),
            Err(e) => {
                warn!(task_id = %task, error = %e, "Task workspace lookup failed");
                Err(AccessError::Upstream(e))
            }
        }
    }

    fn precheck(
        &self,
        requester: UserId,
        workspace: WorkspaceId,
        requester_role: Role,
        action: Action,
    ) -> Result<(), AccessError> {
        match requester_precheck(requester_role) {
            Decision::Allow => Ok(()),
            Decision::Deny(denial) => {
                debug!(
                    user_id = %requester,
                    workspace_id = %workspace,
                    action = action.name(),
                    reason = %denial,
                    "Access denied"
                );
                Err(denial.into())
            }
        }
    }

    fn apply(
        &self,
        requester: UserId,
        workspace: WorkspaceId,
        requester_role: Role,
        action: Action,
        check: &Check,
    ) -> Result<Role, AccessError> {
        match decide(requester_role, check) {
            Decision::Allow => {
                debug!(
                    user_id = %requester,
                    workspace_id = %workspace,
                    role = %requester_role,
                    action = action.name(),
                    "Access granted"
                );
                Ok(requester_role)
            }
            Decision::Deny(denial) => {
                debug!(
                    user_id = %requester,
                    workspace_id = %workspace,
                    role = %requester_role,
                    action = action.name(),
                    reason = %denial,
                    "Access denied"
                );
                Err(denial.into())
            }
        }
    }
}
