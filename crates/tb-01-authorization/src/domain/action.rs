//! Action classes.
//!
//! `Action` is what a caller asks for, expressed in ids. `Check` is the same
//! request after the gate has looked up every role it depends on; the pure
//! policy only ever sees `Check`.

use shared_types::{Role, UserId};

/// Requested action, as submitted by a mutation handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Read-only access to workspace content.
    Read,
    /// Create, update or delete tasks, subtasks or workspace metadata.
    Manage,
    /// `Manage` plus assigning a task or subtask to `assignee`.
    Assign { assignee: UserId },
    /// Grant `role` to a user who holds none yet.
    AddMember { target: UserId, role: Role },
    /// Replace `target`'s current role with `role`.
    ChangeRole { target: UserId, role: Role },
    /// Remove `target`'s role. Removing oneself is a leave.
    RemoveMember { target: UserId },
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::Read => "read",
            Action::Manage => "manage",
            Action::Assign { .. } => "assign",
            Action::AddMember { .. } => "add_member",
            Action::ChangeRole { .. } => "change_role",
            Action::RemoveMember { .. } => "remove_member",
        }
    }
}

/// Action with every role it depends on already resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    Read,
    Manage,
    Assign { assignee: Role },
    AddMember { target: Role, new_role: Role },
    ChangeRole { target: Role, new_role: Role },
    RemoveMember { target: Role, is_self: bool },
}
