//! # Authorization Flows
//!
//! Role rules exercised through the board service against the real store:
//! the gate reads roles from the same tables the mutations write.

use shared_types::{BoardError, ErrorKind, Role, StoreError, TaskDraft, TaskStatus, UserId};
use tb_01_authorization::RoleStore;
use tb_04_board_service::{MembershipRepository, TaskRepository};

use super::harness::{Board, ADMIN, OUTSIDER, OWNER, STANDARD};

// =============================================================================
// ROLE RECORDS
// =============================================================================

#[tokio::test]
async fn test_one_role_record_per_user_and_workspace() {
    let board = Board::new();
    let ws = board.team("Platform").await;

    let again = board
        .service
        .add_member(OWNER, ws, ADMIN, Role::StandardUser)
        .await;
    assert_eq!(again.unwrap_err().kind(), ErrorKind::InvalidArgument);

    let direct = board.store.add_member(ws, ADMIN, Role::StandardUser).await;
    assert!(matches!(direct, Err(StoreError::Duplicate(_))));

    let members = board.store.list_members(ws).await.unwrap();
    for user in [OWNER, ADMIN, STANDARD] {
        let records = members.iter().filter(|m| m.user_id == user).count();
        assert_eq!(records, 1, "user {user}");
    }
    assert_eq!(board.store.get_role(ADMIN, ws).await, Ok(Role::Admin));
}

#[tokio::test]
async fn test_roles_are_scoped_to_their_workspace() {
    let board = Board::new();
    let platform = board.team("Platform").await;
    let mobile = board.team("Mobile").await;

    board
        .service
        .update_member_role(OWNER, mobile, STANDARD, Role::Admin)
        .await
        .unwrap();

    assert_eq!(board.store.get_role(STANDARD, mobile).await, Ok(Role::Admin));
    assert_eq!(
        board.store.get_role(STANDARD, platform).await,
        Ok(Role::StandardUser)
    );
}

// =============================================================================
// MUTATION RIGHTS
// =============================================================================

#[tokio::test]
async fn test_mutation_allowed_exactly_for_admin_and_owner() {
    let board = Board::new();
    let ws = board.team("Platform").await;
    let task = board.seed_task(ws, "Deploy", STANDARD).await;

    let cases = [
        (OWNER, true),
        (ADMIN, true),
        (STANDARD, false),
        (OUTSIDER, false),
    ];
    for (user, allowed) in cases {
        let result = board
            .service
            .update_task_status(user, ws, task, TaskStatus::InProgress)
            .await;
        match (allowed, result) {
            (true, Ok(_)) => {}
            (false, Err(BoardError::AccessDenied(_))) => {}
            (allowed, other) => panic!("user {user}: allowed={allowed}, got {other:?}"),
        }
    }
}

#[tokio::test]
async fn test_outsider_cannot_read() {
    let board = Board::new();
    let ws = board.team("Platform").await;

    let result = board.service.list_tasks(OUTSIDER, ws).await;

    assert!(matches!(result, Err(BoardError::AccessDenied(_))));
}

#[tokio::test]
async fn test_standard_user_creating_task_is_access_denied() {
    let board = Board::new();
    let ws = board.team("Platform").await;

    let result = board
        .service
        .create_task(STANDARD, ws, TaskDraft::new("Release notes", STANDARD))
        .await;

    assert_eq!(result.unwrap_err().kind(), ErrorKind::AccessDenied);
    assert!(board.store.list_tasks(ws).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_assigning_to_non_member_is_invalid_and_silent() {
    let board = Board::new();
    let ws = board.team("Platform").await;
    let mut owner = board.connect(OWNER);
    let mut admin = board.connect(ADMIN);
    let mut outsider = board.connect(OUTSIDER);

    let result = board
        .service
        .create_task(ADMIN, ws, TaskDraft::new("Rotate keys", OUTSIDER))
        .await;

    assert_eq!(result.unwrap_err().kind(), ErrorKind::InvalidArgument);
    assert!(board.store.list_tasks(ws).await.unwrap().is_empty());
    assert!(owner.is_quiet().await);
    assert!(admin.is_quiet().await);
    assert!(outsider.is_quiet().await);
}

// =============================================================================
// ROLE CHANGES
// =============================================================================

#[tokio::test]
async fn test_admin_cannot_touch_admin_or_owner() {
    let board = Board::new();
    let ws = board.team("Platform").await;
    let second_admin = UserId(5);
    board.grant(ws, second_admin, Role::Admin).await;

    for target in [second_admin, OWNER] {
        let result = board
            .service
            .update_member_role(ADMIN, ws, target, Role::StandardUser)
            .await;
        assert_eq!(result.unwrap_err().kind(), ErrorKind::AccessDenied, "target {target}");
    }
    assert_eq!(board.store.get_role(second_admin, ws).await, Ok(Role::Admin));
    assert_eq!(board.store.get_role(OWNER, ws).await, Ok(Role::Owner));

    let promoted = board
        .service
        .update_member_role(ADMIN, ws, STANDARD, Role::Admin)
        .await
        .unwrap();
    assert_eq!(promoted.role, Role::Admin);
}

#[tokio::test]
async fn test_owner_may_demote_admin_but_not_grant_ownership() {
    let board = Board::new();
    let ws = board.team("Platform").await;

    board
        .service
        .update_member_role(OWNER, ws, ADMIN, Role::StandardUser)
        .await
        .unwrap();
    let grant = board
        .service
        .update_member_role(OWNER, ws, STANDARD, Role::Owner)
        .await;

    assert_eq!(board.store.get_role(ADMIN, ws).await, Ok(Role::StandardUser));
    assert_eq!(grant.unwrap_err().kind(), ErrorKind::AccessDenied);
}

#[tokio::test]
async fn test_owner_cannot_be_removed() {
    let board = Board::new();
    let ws = board.team("Platform").await;

    let result = board.service.remove_member(ADMIN, ws, OWNER).await;

    assert!(result.is_err());
    assert_eq!(board.store.get_role(OWNER, ws).await, Ok(Role::Owner));
}

// =============================================================================
// CROSS-CHECKS AND OUTAGES
// =============================================================================

#[tokio::test]
async fn test_task_named_under_wrong_workspace_is_invalid() {
    let board = Board::new();
    let platform = board.team("Platform").await;
    let mobile = board.team("Mobile").await;
    let task = board.seed_task(platform, "Deploy", STANDARD).await;

    let result = board.service.get_task(OWNER, mobile, task).await;

    assert_eq!(result.unwrap_err().kind(), ErrorKind::InvalidArgument);
}

#[tokio::test]
async fn test_role_store_outage_is_upstream_not_denial() {
    let board = Board::new();
    let ws = board.team("Platform").await;
    board.store.set_roles_unavailable(true);

    let result = board
        .service
        .create_task(OWNER, ws, TaskDraft::new("Deploy", ADMIN))
        .await;

    assert_eq!(result.unwrap_err().kind(), ErrorKind::Upstream);

    board.store.set_roles_unavailable(false);
    assert!(board.store.list_tasks(ws).await.unwrap().is_empty());
}
