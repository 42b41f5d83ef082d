//! Route table.

use std::sync::Arc;

use axum::response::IntoResponse;
use axum::routing::{delete, get, put};
use axum::{Json, Router};
use tb_02_audience::AudienceResolver;
use tb_03_notification_hub::HubHandle;
use tb_04_board_service::BoardService;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::domain::config::GatewayConfig;
use crate::handlers::{comments, members, presence, profile, subtasks, tasks, workspaces};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub service: BoardService,
    pub hub: HubHandle,
    pub audience: AudienceResolver,
    pub config: Arc<GatewayConfig>,
}

impl AppState {
    pub fn new(
        service: BoardService,
        hub: HubHandle,
        audience: AudienceResolver,
        config: GatewayConfig,
    ) -> Self {
        Self {
            service,
            hub,
            audience,
            config: Arc::new(config),
        }
    }
}

/// Build the HTTP router: `/health` plus everything under `/api`.
pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        // Workspaces
        .route(
            "/workspaces",
            get(workspaces::list).post(workspaces::create),
        )
        .route(
            "/workspaces/:workspace_id",
            get(workspaces::get_one)
                .put(workspaces::update)
                .delete(workspaces::delete),
        )
        // Members
        .route(
            "/workspaces/:workspace_id/users",
            get(members::list).post(members::add),
        )
        .route(
            "/workspaces/:workspace_id/users/:user_id",
            put(members::update_role).delete(members::remove),
        )
        .route(
            "/workspaces/:workspace_id/users/leave",
            delete(members::leave),
        )
        // Tasks
        .route("/self/tasks", get(tasks::assigned))
        .route(
            "/workspaces/:workspace_id/tasks",
            get(tasks::list).post(tasks::create),
        )
        .route(
            "/workspaces/:workspace_id/tasks/:task_id",
            get(tasks::get_one).put(tasks::update).delete(tasks::delete),
        )
        .route(
            "/workspaces/:workspace_id/tasks/:task_id/status",
            put(tasks::update_status),
        )
        // Comments and watches
        .route(
            "/workspaces/:workspace_id/tasks/:task_id/comments",
            get(comments::list).post(comments::add),
        )
        .route(
            "/workspaces/:workspace_id/tasks/:task_id/watch",
            get(comments::watch_status)
                .post(comments::watch)
                .delete(comments::unwatch),
        )
        // Subtasks
        .route(
            "/tasks/:task_id/subtasks",
            get(subtasks::list).post(subtasks::create),
        )
        .route(
            "/tasks/:task_id/subtasks/:subtask_id",
            get(subtasks::get_one)
                .put(subtasks::update)
                .delete(subtasks::delete),
        )
        .route(
            "/tasks/:task_id/subtasks/:subtask_id/status",
            put(subtasks::update_status),
        )
        .route(
            "/tasks/:task_id/subtasks/:subtask_id/title",
            put(subtasks::update_title),
        )
        .route(
            "/tasks/:task_id/subtasks/:subtask_id/assigneeid",
            put(subtasks::update_assignee),
        )
        // Users and presence
        .route("/users/self/profile", delete(profile::delete_self))
        .route("/users/:user_id/status", get(presence::status))
        .route("/ws", get(presence::connect));

    Router::new()
        .route("/health", get(health_check))
        .nest("/api", api)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "task-board",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
