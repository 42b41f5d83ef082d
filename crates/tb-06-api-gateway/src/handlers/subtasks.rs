//! Subtask routes. The single-field `PUT` routes are shorthands for a
//! `SubtaskPatch` with one field set.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use shared_types::{Subtask, SubtaskDraft, SubtaskId, SubtaskPatch, TaskId, UserId};

use crate::domain::error::ApiError;
use crate::identity::Requester;
use crate::router::AppState;

#[derive(Debug, Deserialize)]
pub struct CompletionRequest {
    pub is_completed: bool,
}

#[derive(Debug, Deserialize)]
pub struct TitleRequest {
    pub title: String,
}

#[derive(Debug, Deserialize)]
pub struct AssigneeRequest {
    pub assignee_id: UserId,
}

pub async fn list(
    State(state): State<AppState>,
    Requester(user): Requester,
    Path(task_id): Path<TaskId>,
) -> Result<Json<Vec<Subtask>>, ApiError> {
    Ok(Json(state.service.list_subtasks(user, task_id).await?))
}

pub async fn create(
    State(state): State<AppState>,
    Requester(user): Requester,
    Path(task_id): Path<TaskId>,
    Json(draft): Json<SubtaskDraft>,
) -> Result<(StatusCode, Json<Subtask>), ApiError> {
    let subtask = state.service.create_subtask(user, task_id, draft).await?;
    Ok((StatusCode::CREATED, Json(subtask)))
}

pub async fn get_one(
    State(state): State<AppState>,
    Requester(user): Requester,
    Path((task_id, subtask_id)): Path<(TaskId, SubtaskId)>,
) -> Result<Json<Subtask>, ApiError> {
    Ok(Json(
        state
            .service
            .get_subtask(user, task_id, subtask_id)
            .await?,
    ))
}

pub async fn update(
    State(state): State<AppState>,
    Requester(user): Requester,
    Path((task_id, subtask_id)): Path<(TaskId, SubtaskId)>,
    Json(patch): Json<SubtaskPatch>,
) -> Result<Json<Subtask>, ApiError> {
    apply(&state, user, task_id, subtask_id, patch).await
}

pub async fn update_status(
    State(state): State<AppState>,
    Requester(user): Requester,
    Path((task_id, subtask_id)): Path<(TaskId, SubtaskId)>,
    Json(request): Json<CompletionRequest>,
) -> Result<Json<Subtask>, ApiError> {
    let patch = SubtaskPatch {
        is_completed: Some(request.is_completed),
        ..SubtaskPatch::default()
    };
    apply(&state, user, task_id, subtask_id, patch).await
}

pub async fn update_title(
    State(state): State<AppState>,
    Requester(user): Requester,
    Path((task_id, subtask_id)): Path<(TaskId, SubtaskId)>,
    Json(request): Json<TitleRequest>,
) -> Result<Json<Subtask>, ApiError> {
    let patch = SubtaskPatch {
        title: Some(request.title),
        ..SubtaskPatch::default()
    };
    apply(&state, user, task_id, subtask_id, patch).await
}

pub async fn update_assignee(
    State(state): State<AppState>,
    Requester(user): Requester,
    Path((task_id, subtask_id)): Path<(TaskId, SubtaskId)>,
    Json(request): Json<AssigneeRequest>,
) -> Result<Json<Subtask>, ApiError> {
    let patch = SubtaskPatch {
        assignee_id: Some(request.assignee_id),
        ..SubtaskPatch::default()
    };
    apply(&state, user, task_id, subtask_id, patch).await
}

pub async fn delete(
    State(state): State<AppState>,
    Requester(user): Requester,
    Path((task_id, subtask_id)): Path<(TaskId, SubtaskId)>,
) -> Result<StatusCode, ApiError> {
    state
        .service
        .delete_subtask(user, task_id, subtask_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn apply(
    state: &AppState,
    user: UserId,
    task_id: TaskId,
    subtask_id: SubtaskId,
    patch: SubtaskPatch,
) -> Result<Json<Subtask>, ApiError> {
    Ok(Json(
        state
            .service
            .update_subtask(user, task_id, subtask_id, patch)
            .await?,
    ))
}
