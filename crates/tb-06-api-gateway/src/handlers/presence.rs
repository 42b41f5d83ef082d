//! Presence query and the live notification socket.

use axum::extract::ws::WebSocketUpgrade;
use axum::extract::{Path, State};
use axum::response::Response;
use axum::Json;
use serde::Serialize;
use shared_types::UserId;
use tb_03_notification_hub::{serve_websocket, Presence};
use tracing::debug;

use crate::domain::error::ApiError;
use crate::identity::Requester;
use crate::router::AppState;

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: Presence,
}

pub async fn status(
    State(state): State<AppState>,
    Requester(user): Requester,
    Path(target): Path<UserId>,
) -> Result<Json<StatusResponse>, ApiError> {
    let status = state.service.user_status(user, target).await?;
    Ok(Json(StatusResponse { status }))
}

/// Upgrade to a websocket and attach it to the hub for the requester.
pub async fn connect(
    State(state): State<AppState>,
    Requester(user): Requester,
    ws: WebSocketUpgrade,
) -> Response {
    let max_message_size = state.config.max_message_size;
    debug!(user_id = %user, "Websocket upgrade requested");

    ws.max_message_size(max_message_size)
        .on_upgrade(move |socket| {
            serve_websocket(state.hub, state.audience, user, socket, max_message_size)
        })
}
