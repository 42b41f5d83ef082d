//! # Notification Bodies
//!
//! The JSON body pushed to live connections:
//!
//! ```json
//! {"group": "task", "type": "update", "message": "Task 'Deploy' has been created."}
//! ```

use serde::{Deserialize, Serialize};

/// Which kind of record a notification concerns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationGroup {
    Task,
    Subtask,
    Comment,
    Member,
    Workspace,
}

/// Delivery intent.
///
/// `Update` is a generic change notice for everyone associated with the
/// record; `Watch` is a personal notice (assignment, watched task changed,
/// own membership changed).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Update,
    Watch,
}

/// Fire-and-forget event body. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub group: NotificationGroup,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn new(group: NotificationGroup, kind: NotificationKind, message: impl Into<String>) -> Self {
        Self {
            group,
            kind,
            message: message.into(),
        }
    }

    pub fn update(group: NotificationGroup, message: impl Into<String>) -> Self {
        Self::new(group, NotificationKind::Update, message)
    }

    pub fn watch(group: NotificationGroup, message: impl Into<String>) -> Self {
        Self::new(group, NotificationKind::Watch, message)
    }

    /// Presence notice sent to users sharing a workspace with someone who connected.
    pub fn user_online() -> Self {
        Self::update(NotificationGroup::Member, "A user is online now.")
    }

    /// Presence notice sent to users sharing a workspace with someone who disconnected.
    pub fn user_offline() -> Self {
        Self::update(NotificationGroup::Member, "A user is offline now.")
    }

    /// Serialize to the JSON text frame sent over a connection.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
