use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use shared_types::{Task, TaskDraft, TaskId, TaskStatus, WorkspaceId};

use crate::domain::error::ApiError;
use crate::identity::Requester;
use crate::router::AppState;

#[derive(Debug, Deserialize)]
pub struct StatusRequest {
    pub status: TaskStatus,
}

pub async fn assigned(
    State(state): State<AppState>,
    Requester(user): Requester,
) -> Result<Json<Vec<Task>>, ApiError> {
    Ok(Json(state.service.assigned_tasks(user).await?))
}

pub async fn list(
    State(state): State<AppState>,
    Requester(user): Requester,
    Path(workspace_id): Path<WorkspaceId>,
) -> Result<Json<Vec<Task>>, ApiError> {
    Ok(Json(state.service.list_tasks(user, workspace_id).await?))
}

pub async fn create(
    State(state): State<AppState>,
    Requester(user): Requester,
    Path(workspace_id): Path<WorkspaceId>,
    Json(draft): Json<TaskDraft>,
) -> Result<(StatusCode, Json<Task>), ApiError> {
    let task = state.service.create_task(user, workspace_id, draft).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

pub async fn get_one(
    State(state): State<AppState>,
    Requester(user): Requester,
    Path((workspace_id, task_id)): Path<(WorkspaceId, TaskId)>,
) -> Result<Json<Task>, ApiError> {
    Ok(Json(
        state.service.get_task(user, workspace_id, task_id).await?,
    ))
}

pub async fn update(
    State(state): State<AppState>,
    Requester(user): Requester,
    Path((workspace_id, task_id)): Path<(WorkspaceId, TaskId)>,
    Json(draft): Json<TaskDraft>,
) -> Result<Json<Task>, ApiError> {
    Ok(Json(
        state
            .service
            .update_task(user, workspace_id, task_id, draft)
            .await?,
    ))
}

pub async fn update_status(
    State(state): State<AppState>,
    Requester(user): Requester,
    Path((workspace_id, task_id)): Path<(WorkspaceId, TaskId)>,
    Json(request): Json<StatusRequest>,
) -> Result<Json<Task>, ApiError> {
    Ok(Json(
        state
            .service
            .update_task_status(user, workspace_id, task_id, request.status)
            .await?,
    ))
}

pub async fn delete(
    State(state): State<AppState>,
    Requester(user): Requester,
    Path((workspace_id, task_id)): Path<(WorkspaceId, TaskId)>,
) -> Result<StatusCode, ApiError> {
    state
        .service
        .delete_task(user, workspace_id, task_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
