//! Gateway errors and their HTTP status codes.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use shared_types::{BoardError, ErrorKind};
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("missing or invalid identity")]
    Unauthenticated,

    #[error(transparent)]
    Board(#[from] BoardError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Unauthenticated => StatusCode::UNAUTHORIZED,
            ApiError::Board(e) => match e.kind() {
                ErrorKind::AccessDenied => StatusCode::FORBIDDEN,
                ErrorKind::InvalidArgument | ErrorKind::Conflict => StatusCode::BAD_REQUEST,
                ErrorKind::NotFound => StatusCode::NOT_FOUND,
                ErrorKind::Upstream => StatusCode::SERVICE_UNAVAILABLE,
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            warn!(error = %self, "Request failed upstream");
        }
        (status, Json(serde_json::json!({ "error": self.to_string() }))).into_response()
    }
}
