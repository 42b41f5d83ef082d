//! # Core Domain Entities
//!
//! Records owned by the persistence collaborator and passed between
//! subsystems. Timestamps are UTC.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{CommentId, SubtaskId, TaskId, UserId, WorkspaceId};

// =============================================================================
// ROLES
// =============================================================================

/// Permission level of a user within one workspace.
///
/// `NoRole` stands for the absence of a membership record; it is never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Role {
    Owner,
    Admin,
    StandardUser,
    #[default]
    #[serde(rename = "")]
    NoRole,
}

impl Role {
    /// Holds any role in the workspace.
    pub fn is_member(self) -> bool {
        self != Role::NoRole
    }

    /// May create, update and delete workspace content and manage others.
    pub fn can_manage(self) -> bool {
        matches!(self, Role::Owner | Role::Admin)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Owner => "Owner",
            Role::Admin => "Admin",
            Role::StandardUser => "StandardUser",
            Role::NoRole => "",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::NoRole => write!(f, "NoRole"),
            other => write!(f, "{}", other.as_str()),
        }
    }
}

/// A (user, workspace) role record. At most one exists per pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Membership {
    pub user_id: UserId,
    pub workspace_id: WorkspaceId,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// =============================================================================
// WORKSPACES
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workspace {
    pub id: WorkspaceId,
    pub name: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Name and description supplied when creating or updating a workspace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspaceDraft {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

// =============================================================================
// TASKS
// =============================================================================

/// Task progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TaskStatus {
    #[default]
    Planned,
    InProgress,
    Completed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub estimated_time: i32,
    pub actual_time: i32,
    pub due_date: Option<DateTime<Utc>>,
    pub priority: i32,
    pub workspace_id: WorkspaceId,
    pub assignee_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Editable task fields. Used for both creation and full updates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDraft {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub estimated_time: i32,
    #[serde(default)]
    pub actual_time: i32,
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub priority: i32,
    pub assignee_id: UserId,
}

impl TaskDraft {
    /// Draft with only the required fields set.
    pub fn new(title: impl Into<String>, assignee_id: UserId) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            estimated_time: 0,
            actual_time: 0,
            due_date: None,
            priority: 0,
            assignee_id,
        }
    }
}

// =============================================================================
// SUBTASKS
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subtask {
    pub id: SubtaskId,
    pub task_id: TaskId,
    pub title: String,
    pub is_completed: bool,
    pub assignee_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubtaskDraft {
    pub title: String,
    pub assignee_id: UserId,
}

/// Partial subtask update. Absent fields keep their stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubtaskPatch {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub is_completed: Option<bool>,
    #[serde(default)]
    pub assignee_id: Option<UserId>,
}

impl SubtaskPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.is_completed.is_none() && self.assignee_id.is_none()
    }
}

// =============================================================================
// COMMENTS & WATCHES
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: CommentId,
    pub task_id: TaskId,
    pub user_id: UserId,
    pub text: String,
}

/// Explicit per-user subscription to a task. Set semantics per pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Watch {
    pub task_id: TaskId,
    pub user_id: UserId,
}

/// Whether the requester watches a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WatchStatus {
    #[serde(rename = "Yes")]
    Watching,
    #[serde(rename = "No")]
    NotWatching,
}

impl From<bool> for WatchStatus {
    fn from(watching: bool) -> Self {
        if watching {
            WatchStatus::Watching
        } else {
            WatchStatus::NotWatching
        }
    }
}
