//! # Board Flows
//!
//! Mutations through the board service and the notifications they produce.
//! A committed mutation never fails because notification did.

use shared_types::{
    Notification, NotificationGroup, NotificationKind, Role, SubtaskDraft, SubtaskPatch,
    TaskDraft, TaskStatus, UserId, WatchStatus, WorkspaceDraft,
};
use tb_01_authorization::RoleStore;
use tb_03_notification_hub::Presence;
use tb_04_board_service::{TaskRepository, WatchRepository};

use super::harness::{messages, Board, ADMIN, OUTSIDER, OWNER, STANDARD};

// =============================================================================
// TASKS
// =============================================================================

#[tokio::test]
async fn test_only_connected_associates_receive_update() {
    let board = Board::new();
    let ws = board.team("Platform").await;
    let task = board.seed_task(ws, "Deploy", ADMIN).await;
    let mut owner = board.connect(OWNER);
    let mut admin = board.connect(ADMIN);

    let updated = board
        .service
        .update_task_status(OWNER, ws, task, TaskStatus::InProgress)
        .await
        .unwrap();

    assert_eq!(updated.status, TaskStatus::InProgress);
    for live in [&mut owner, &mut admin] {
        let received = live.drain().await;
        assert_eq!(messages(&received), vec!["Task 'Deploy' has been updated."]);
        assert_eq!(received[0].kind, NotificationKind::Update);
    }
}

#[tokio::test]
async fn test_create_task_notifies_assignee_then_associates() {
    let board = Board::new();
    let ws = board.team("Platform").await;
    let mut owner = board.connect(OWNER);
    let mut standard = board.connect(STANDARD);

    board
        .service
        .create_task(ADMIN, ws, TaskDraft::new("Write changelog", STANDARD))
        .await
        .unwrap();

    let received = standard.drain().await;
    assert_eq!(
        messages(&received),
        vec![
            "Task 'Write changelog' has been assigned to you.",
            "Task 'Write changelog' has been created.",
        ]
    );
    assert_eq!(received[0].kind, NotificationKind::Watch);
    assert_eq!(
        messages(&owner.drain().await),
        vec!["Task 'Write changelog' has been created."]
    );
}

#[tokio::test]
async fn test_reassignment_notifies_new_assignee_only() {
    let board = Board::new();
    let ws = board.team("Platform").await;
    let task = board.seed_task(ws, "Deploy", ADMIN).await;
    let mut admin = board.connect(ADMIN);
    let mut standard = board.connect(STANDARD);

    board
        .service
        .update_task(OWNER, ws, task, TaskDraft::new("Deploy", STANDARD))
        .await
        .unwrap();

    assert_eq!(
        messages(&standard.drain().await),
        vec![
            "Task 'Deploy' has been assigned to you.",
            "Task 'Deploy' has been updated.",
        ]
    );
    assert_eq!(
        messages(&admin.drain().await),
        vec!["Task 'Deploy' has been updated."]
    );
}

#[tokio::test]
async fn test_mutation_commits_when_audience_query_fails() {
    let board = Board::new();
    let ws = board.team("Platform").await;
    let task = board.seed_task(ws, "Deploy", ADMIN).await;
    let mut owner = board.connect(OWNER);
    board.store.set_audience_unavailable(true);

    let result = board
        .service
        .update_task_status(ADMIN, ws, task, TaskStatus::Completed)
        .await;

    assert!(result.is_ok());
    assert_eq!(
        board.store.get_task(task).await.unwrap().status,
        TaskStatus::Completed
    );
    assert!(owner.is_quiet().await);
}

#[tokio::test]
async fn test_delete_task_reaches_watchers_and_associates() {
    let board = Board::new();
    let ws = board.team("Platform").await;
    let task = board.seed_task(ws, "Deploy", ADMIN).await;
    board.service.watch_task(STANDARD, ws, task).await.unwrap();
    let mut owner = board.connect(OWNER);
    let mut standard = board.connect(STANDARD);

    board.service.delete_task(OWNER, ws, task).await.unwrap();

    let watched = standard.drain().await;
    assert_eq!(
        messages(&watched),
        vec!["Task 'Deploy' has been deleted.", "Task 'Deploy' has been deleted."]
    );
    assert_eq!(watched[0].kind, NotificationKind::Watch);
    assert_eq!(watched[1].kind, NotificationKind::Update);
    assert_eq!(
        messages(&owner.drain().await),
        vec!["Task 'Deploy' has been deleted."]
    );
    assert!(board.store.get_task(task).await.is_err());
}

// =============================================================================
// WATCHES AND COMMENTS
// =============================================================================

#[tokio::test]
async fn test_watch_lifecycle() {
    let board = Board::new();
    let ws = board.team("Platform").await;
    let task = board.seed_task(ws, "Deploy", ADMIN).await;

    let status = board.service.watch_status(STANDARD, ws, task).await.unwrap();
    assert_eq!(status, WatchStatus::NotWatching);

    board.service.watch_task(STANDARD, ws, task).await.unwrap();
    let mut standard = board.connect(STANDARD);
    board
        .service
        .update_task_status(ADMIN, ws, task, TaskStatus::InProgress)
        .await
        .unwrap();

    let received = standard.drain().await;
    assert_eq!(received.len(), 2);
    assert_eq!(received[0].kind, NotificationKind::Watch);

    board.service.unwatch_task(STANDARD, ws, task).await.unwrap();
    assert!(!board.store.is_watching(task, STANDARD).await.unwrap());
}

#[tokio::test]
async fn test_comment_reaches_task_associates() {
    let board = Board::new();
    let ws = board.team("Platform").await;
    let task = board.seed_task(ws, "Deploy", ADMIN).await;
    let mut admin = board.connect(ADMIN);
    let mut outsider = board.connect(OUTSIDER);

    let comment = board
        .service
        .add_comment(STANDARD, ws, task, "Blocked on review".into())
        .await
        .unwrap();

    assert_eq!(comment.user_id, STANDARD);
    let received = admin.drain().await;
    assert_eq!(messages(&received), vec!["Blocked on review"]);
    assert_eq!(received[0].group, NotificationGroup::Comment);
    assert!(outsider.is_quiet().await);
}

// =============================================================================
// SUBTASKS
// =============================================================================

#[tokio::test]
async fn test_subtask_assignment_and_update() {
    let board = Board::new();
    let ws = board.team("Platform").await;
    let task = board.seed_task(ws, "Deploy", ADMIN).await;
    let mut standard = board.connect(STANDARD);

    let subtask = board
        .service
        .create_subtask(
            ADMIN,
            task,
            SubtaskDraft {
                title: "Tag release".into(),
                assignee_id: STANDARD,
            },
        )
        .await
        .unwrap();
    assert_eq!(
        messages(&standard.drain().await),
        vec![
            "Subtask 'Tag release' has been assigned to you.",
            "Subtask 'Tag release' has been created.",
        ]
    );

    let done = board
        .service
        .update_subtask(
            ADMIN,
            task,
            subtask.id,
            SubtaskPatch {
                is_completed: Some(true),
                ..SubtaskPatch::default()
            },
        )
        .await
        .unwrap();
    assert!(done.is_completed);
    assert_eq!(
        messages(&standard.drain().await),
        vec!["Subtask 'Tag release' has been updated."]
    );
}

#[tokio::test]
async fn test_standard_user_cannot_reassign_subtask() {
    let board = Board::new();
    let ws = board.team("Platform").await;
    let task = board.seed_task(ws, "Deploy", ADMIN).await;
    let subtask = board
        .service
        .create_subtask(
            OWNER,
            task,
            SubtaskDraft {
                title: "Tag release".into(),
                assignee_id: STANDARD,
            },
        )
        .await
        .unwrap();

    let result = board
        .service
        .update_subtask(
            STANDARD,
            task,
            subtask.id,
            SubtaskPatch {
                assignee_id: Some(ADMIN),
                ..SubtaskPatch::default()
            },
        )
        .await;

    assert!(result.is_err());
}

// =============================================================================
// MEMBERSHIP AND WORKSPACES
// =============================================================================

#[tokio::test]
async fn test_member_added_and_removed_notifications() {
    let board = Board::new();
    let ws = board.team("Platform").await;
    let newcomer = UserId(6);
    let mut standard = board.connect(STANDARD);
    let mut joining = board.connect(newcomer);

    board
        .service
        .add_member(OWNER, ws, newcomer, Role::StandardUser)
        .await
        .unwrap();

    assert_eq!(
        messages(&standard.drain().await),
        vec!["Member has been added."]
    );
    assert_eq!(
        messages(&joining.drain().await),
        vec![
            "Member has been added.",
            "You have been added to workspace 'Platform'.",
        ]
    );

    board.service.remove_member(ADMIN, ws, newcomer).await.unwrap();

    assert_eq!(
        messages(&standard.drain().await),
        vec!["Member has been removed."]
    );
    assert_eq!(
        messages(&joining.drain().await),
        vec!["You have been removed from workspace 'Platform'."]
    );
}

#[tokio::test]
async fn test_leaving_workspace_revokes_access_quietly() {
    let board = Board::new();
    let ws = board.team("Platform").await;
    let task = board.seed_task(ws, "Deploy", ADMIN).await;
    board.service.watch_task(STANDARD, ws, task).await.unwrap();
    let mut owner = board.connect(OWNER);
    let mut standard = board.connect(STANDARD);

    board.service.leave_workspace(STANDARD, ws).await.unwrap();

    assert_eq!(
        messages(&owner.drain().await),
        vec!["Member has been removed."]
    );
    assert!(standard.is_quiet().await);
    assert!(board.service.get_workspace(STANDARD, ws).await.is_err());
    assert!(board.store.is_watching(task, STANDARD).await.unwrap());
}

#[tokio::test]
async fn test_removed_member_keeps_hearing_watched_task() {
    let board = Board::new();
    let ws = board.team("Platform").await;
    let task = board.seed_task(ws, "Deploy", ADMIN).await;
    board.service.watch_task(STANDARD, ws, task).await.unwrap();
    board.service.remove_member(OWNER, ws, STANDARD).await.unwrap();
    let mut standard = board.connect(STANDARD);

    board
        .service
        .update_task_status(ADMIN, ws, task, TaskStatus::Completed)
        .await
        .unwrap();

    assert!(board.store.is_watching(task, STANDARD).await.unwrap());
    let received = standard.drain().await;
    assert_eq!(messages(&received), vec!["Task 'Deploy' has been updated."]);
    assert_eq!(received[0].kind, NotificationKind::Watch);
}

#[tokio::test]
async fn test_workspace_rename_and_delete() {
    let board = Board::new();
    let ws = board.team("Platform").await;
    let mut standard = board.connect(STANDARD);

    board
        .service
        .update_workspace(
            ADMIN,
            ws,
            WorkspaceDraft {
                name: "Infrastructure".into(),
                description: "Servers and pipelines".into(),
            },
        )
        .await
        .unwrap();
    board.service.delete_workspace(OWNER, ws).await.unwrap();

    assert_eq!(
        messages(&standard.drain().await),
        vec![
            "Workspace 'Infrastructure' has been updated.",
            "Workspace 'Infrastructure' has been deleted.",
        ]
    );
    assert!(board.service.list_workspaces(STANDARD).await.unwrap().is_empty());
}

// =============================================================================
// ACCOUNTS
// =============================================================================

#[tokio::test]
async fn test_deleting_account_removes_everything_it_touched() {
    let board = Board::new();
    let ws = board.team("Platform").await;
    let mobile = board.team("Mobile").await;
    let theirs = board.seed_task(ws, "Deploy", STANDARD).await;
    let watched = board.seed_task(ws, "Review", ADMIN).await;
    board.service.watch_task(STANDARD, ws, watched).await.unwrap();
    board.service.watch_task(OWNER, ws, watched).await.unwrap();
    let mut owner = board.connect(OWNER);
    let standard = board.connect(STANDARD);

    board.service.delete_self(STANDARD).await.unwrap();

    // One notice from the pre-delete audience; the hub finds nobody left.
    assert_eq!(owner.drain().await, vec![Notification::user_offline()]);
    board.wait_for_presence(STANDARD, Presence::Offline).await;
    assert!(standard.sink.is_closed());

    for workspace in [ws, mobile] {
        assert_eq!(board.store.get_role(STANDARD, workspace).await, Ok(Role::NoRole));
    }
    assert!(board.store.get_task(theirs).await.is_err());
    assert!(board.store.list_assigned_tasks(STANDARD).await.unwrap().is_empty());
    assert!(!board.store.is_watching(watched, STANDARD).await.unwrap());
    assert!(board.store.is_watching(watched, OWNER).await.unwrap());
    assert!(board.service.list_workspaces(STANDARD).await.unwrap().is_empty());
}
