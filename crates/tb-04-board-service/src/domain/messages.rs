//! Notification texts.

use shared_types::{Notification, NotificationGroup};

pub fn task_assigned(title: &str) -> Notification {
    Notification::watch(
        NotificationGroup::Task,
        format!("Task '{}' has been assigned to you.", title),
    )
}

/// `verb` is one of created, updated, deleted.
pub fn task_changed(title: &str, verb: &str) -> Notification {
    Notification::update(
        NotificationGroup::Task,
        format!("Task '{}' has been {}.", title, verb),
    )
}

/// Personal notice for watchers of a task.
pub fn watched_task_changed(title: &str, verb: &str) -> Notification {
    Notification::watch(
        NotificationGroup::Task,
        format!("Task '{}' has been {}.", title, verb),
    )
}

pub fn subtask_assigned(title: &str) -> Notification {
    Notification::watch(
        NotificationGroup::Subtask,
        format!("Subtask '{}' has been assigned to you.", title),
    )
}

pub fn subtask_changed(title: &str, verb: &str) -> Notification {
    Notification::update(
        NotificationGroup::Subtask,
        format!("Subtask '{}' has been {}.", title, verb),
    )
}

pub fn comment_added(text: &str) -> Notification {
    Notification::update(NotificationGroup::Comment, text)
}

pub fn member_changed(verb: &str) -> Notification {
    Notification::update(NotificationGroup::Member, format!("Member has been {}.", verb))
}

pub fn workspace_changed(name: &str, verb: &str) -> Notification {
    Notification::update(
        NotificationGroup::Workspace,
        format!("Workspace '{}' has been {}.", name, verb),
    )
}

pub fn added_to_workspace(name: &str) -> Notification {
    Notification::watch(
        NotificationGroup::Workspace,
        format!("You have been added to workspace '{}'.", name),
    )
}

pub fn role_updated(name: &str) -> Notification {
    Notification::watch(
        NotificationGroup::Workspace,
        format!("Your role in workspace '{}' has been updated.", name),
    )
}

pub fn removed_from_workspace(name: &str) -> Notification {
    Notification::watch(
        NotificationGroup::Workspace,
        format!("You have been removed from workspace '{}'.", name),
    )
}

pub const CREATED: &str = "created";
pub const UPDATED: &str = "updated";
pub const DELETED: &str = "deleted";
pub const ADDED: &str = "added";
pub const REMOVED: &str = "removed";
