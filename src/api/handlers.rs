//! API Handlers
//!
//! HTTP request handlers for the task resource.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::error::{ApiError, Result};
use crate::models::{HealthResponse, Task, TaskInput};
use crate::store::TaskStore;

/// Application state shared across all handlers.
#[derive(Clone, Debug)]
pub struct AppState {
    pub store: TaskStore,
}

impl AppState {
    pub fn new(store: TaskStore) -> Self {
        Self { store }
    }
}

/// Handler for GET /tasks
pub async fn list_tasks_handler(State(state): State<AppState>) -> Result<Json<Vec<Task>>> {
    let tasks = state.store.get_all().await?;
    Ok(Json(tasks))
}

/// Handler for GET /tasks/:id
pub async fn get_task_handler(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<Task>> {
    let id = parse_id(&raw_id)?;
    let task = state
        .store
        .get_by_id(id)
        .await?
        .ok_or(ApiError::NotFound(id))?;

    Ok(Json(task))
}

/// Handler for POST /tasks
///
/// Responds with the stored task including its assigned identifier.
pub async fn create_task_handler(
    State(state): State<AppState>,
    Json(input): Json<TaskInput>,
) -> Result<Json<Task>> {
    validate(&input)?;

    let id = state.store.create(&input).await?;
    Ok(Json(Task::from_input(id, input)))
}

/// Handler for PUT /tasks/:id
pub async fn update_task_handler(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    Json(input): Json<TaskInput>,
) -> Result<Json<Task>> {
    let id = parse_id(&raw_id)?;
    validate(&input)?;

    if !state.store.update(id, &input).await? {
        return Err(ApiError::NotFound(id));
    }

    Ok(Json(Task::from_input(id, input)))
}

/// Handler for DELETE /tasks/:id
pub async fn delete_task_handler(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<StatusCode> {
    let id = parse_id(&raw_id)?;

    if !state.store.delete(id).await? {
        return Err(ApiError::NotFound(id));
    }

    Ok(StatusCode::OK)
}

/// Handler for GET /health
///
/// 503 when either backend fails its ping.
pub async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    let status = state.store.health().await;
    let code = if status.is_healthy() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (code, Json(HealthResponse::from_status(&status)))
}

fn parse_id(raw: &str) -> Result<i64> {
    raw.parse()
        .map_err(|_| ApiError::InvalidRequest(format!("Invalid id param: {}", raw)))
}

fn validate(input: &TaskInput) -> Result<()> {
    match input.validate() {
        Some(error_msg) => Err(ApiError::InvalidRequest(error_msg)),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("42").unwrap(), 42);
        assert!(matches!(parse_id("abc"), Err(ApiError::InvalidRequest(_))));
        assert!(matches!(parse_id(""), Err(ApiError::InvalidRequest(_))));
    }

    #[test]
    fn test_validate_rejects_blank_title() {
        let input = TaskInput::new("", false);
        assert!(matches!(validate(&input), Err(ApiError::InvalidRequest(_))));
    }
}
