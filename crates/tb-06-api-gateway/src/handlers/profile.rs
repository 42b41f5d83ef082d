//! The requester's own account.

use axum::extract::State;
use axum::http::StatusCode;

use crate::domain::error::ApiError;
use crate::identity::Requester;
use crate::router::AppState;

pub async fn delete_self(
    State(state): State<AppState>,
    Requester(user): Requester,
) -> Result<StatusCode, ApiError> {
    state.service.delete_self(user).await?;
    Ok(StatusCode::NO_CONTENT)
}
