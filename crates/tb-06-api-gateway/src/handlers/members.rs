use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use shared_types::{Membership, Role, UserId, WorkspaceId};

use crate::domain::error::ApiError;
use crate::identity::Requester;
use crate::router::AppState;

#[derive(Debug, Deserialize)]
pub struct AddMemberRequest {
    pub user_id: UserId,
    pub role: Role,
}

#[derive(Debug, Deserialize)]
pub struct RoleRequest {
    pub role: Role,
}

pub async fn list(
    State(state): State<AppState>,
    Requester(user): Requester,
    Path(workspace_id): Path<WorkspaceId>,
) -> Result<Json<Vec<Membership>>, ApiError> {
    Ok(Json(state.service.list_members(user, workspace_id).await?))
}

pub async fn add(
    State(state): State<AppState>,
    Requester(user): Requester,
    Path(workspace_id): Path<WorkspaceId>,
    Json(request): Json<AddMemberRequest>,
) -> Result<(StatusCode, Json<Membership>), ApiError> {
    let membership = state
        .service
        .add_member(user, workspace_id, request.user_id, request.role)
        .await?;
    Ok((StatusCode::CREATED, Json(membership)))
}

pub async fn update_role(
    State(state): State<AppState>,
    Requester(user): Requester,
    Path((workspace_id, target)): Path<(WorkspaceId, UserId)>,
    Json(request): Json<RoleRequest>,
) -> Result<Json<Membership>, ApiError> {
    Ok(Json(
        state
            .service
            .update_member_role(user, workspace_id, target, request.role)
            .await?,
    ))
}

pub async fn remove(
    State(state): State<AppState>,
    Requester(user): Requester,
    Path((workspace_id, target)): Path<(WorkspaceId, UserId)>,
) -> Result<StatusCode, ApiError> {
    state
        .service
        .remove_member(user, workspace_id, target)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn leave(
    State(state): State<AppState>,
    Requester(user): Requester,
    Path(workspace_id): Path<WorkspaceId>,
) -> Result<StatusCode, ApiError> {
    state.service.leave_workspace(user, workspace_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
