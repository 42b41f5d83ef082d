//! Comment and watch routes.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use shared_types::{Comment, TaskId, WatchStatus, WorkspaceId};

use crate::domain::error::ApiError;
use crate::identity::Requester;
use crate::router::AppState;

#[derive(Debug, Deserialize)]
pub struct CommentRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct WatchResponse {
    pub watching: WatchStatus,
}

pub async fn list(
    State(state): State<AppState>,
    Requester(user): Requester,
    Path((workspace_id, task_id)): Path<(WorkspaceId, TaskId)>,
) -> Result<Json<Vec<Comment>>, ApiError> {
    Ok(Json(
        state
            .service
            .list_comments(user, workspace_id, task_id)
            .await?,
    ))
}

pub async fn add(
    State(state): State<AppState>,
    Requester(user): Requester,
    Path((workspace_id, task_id)): Path<(WorkspaceId, TaskId)>,
    Json(request): Json<CommentRequest>,
) -> Result<(StatusCode, Json<Comment>), ApiError> {
    let comment = state
        .service
        .add_comment(user, workspace_id, task_id, request.text)
        .await?;
    Ok((StatusCode::CREATED, Json(comment)))
}

pub async fn watch_status(
    State(state): State<AppState>,
    Requester(user): Requester,
    Path((workspace_id, task_id)): Path<(WorkspaceId, TaskId)>,
) -> Result<Json<WatchResponse>, ApiError> {
    let watching = state
        .service
        .watch_status(user, workspace_id, task_id)
        .await?;
    Ok(Json(WatchResponse { watching }))
}

pub async fn watch(
    State(state): State<AppState>,
    Requester(user): Requester,
    Path((workspace_id, task_id)): Path<(WorkspaceId, TaskId)>,
) -> Result<StatusCode, ApiError> {
    state
        .service
        .watch_task(user, workspace_id, task_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn unwatch(
    State(state): State<AppState>,
    Requester(user): Requester,
    Path((workspace_id, task_id)): Path<(WorkspaceId, TaskId)>,
) -> Result<StatusCode, ApiError> {
    state
        .service
        .unwatch_task(user, workspace_id, task_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
