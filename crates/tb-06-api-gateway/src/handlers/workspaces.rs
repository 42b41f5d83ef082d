use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use shared_types::{Workspace, WorkspaceDraft, WorkspaceId};

use crate::domain::error::ApiError;
use crate::identity::Requester;
use crate::router::AppState;

pub async fn list(
    State(state): State<AppState>,
    Requester(user): Requester,
) -> Result<Json<Vec<Workspace>>, ApiError> {
    Ok(Json(state.service.list_workspaces(user).await?))
}

pub async fn create(
    State(state): State<AppState>,
    Requester(user): Requester,
    Json(draft): Json<WorkspaceDraft>,
) -> Result<(StatusCode, Json<Workspace>), ApiError> {
    let workspace = state.service.create_workspace(user, draft).await?;
    Ok((StatusCode::CREATED, Json(workspace)))
}

pub async fn get_one(
    State(state): State<AppState>,
    Requester(user): Requester,
    Path(workspace_id): Path<WorkspaceId>,
) -> Result<Json<Workspace>, ApiError> {
    Ok(Json(state.service.get_workspace(user, workspace_id).await?))
}

pub async fn update(
    State(state): State<AppState>,
    Requester(user): Requester,
    Path(workspace_id): Path<WorkspaceId>,
    Json(draft): Json<WorkspaceDraft>,
) -> Result<Json<Workspace>, ApiError> {
    Ok(Json(
        state
            .service
            .update_workspace(user, workspace_id, draft)
            .await?,
    ))
}

pub async fn delete(
    State(state): State<AppState>,
    Requester(user): Requester,
    Path(workspace_id): Path<WorkspaceId>,
) -> Result<StatusCode, ApiError> {
    state.service.delete_workspace(user, workspace_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
