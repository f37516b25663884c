//! API Routes
//!
//! Configures the Axum router with the task resource endpoints.

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    create_task_handler, delete_task_handler, get_task_handler, health_handler,
    list_tasks_handler, update_task_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /tasks` - List all tasks
/// - `POST /tasks` - Create a task
/// - `GET /tasks/:id` - Fetch a task
/// - `PUT /tasks/:id` - Replace a task's title and completion flag
/// - `DELETE /tasks/:id` - Delete a task
/// - `GET /health` - Backend reachability
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/tasks", get(list_tasks_handler).post(create_task_handler))
        .route(
            "/tasks/:id",
            get(get_task_handler)
                .put(update_task_handler)
                .delete(delete_task_handler),
        )
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
