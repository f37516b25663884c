//! Error types for the task service
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Cache Error Enum ==
/// Errors raised by a cache backend.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Could not open a connection to the cache service
    #[error("Cache connection failed: {0}")]
    Connection(String),

    /// The cache service rejected or failed a command
    #[error("Cache backend error: {0}")]
    Backend(String),

    /// Key or value violates the cache limits
    #[error("Invalid cache request: {0}")]
    InvalidRequest(String),

    /// Cache is full and eviction failed
    #[error("Cache full: {0}")]
    CacheFull(String),
}

// == Store Error Enum ==
/// Errors surfaced by the task store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// A backing store could not be reached at startup
    #[error("Backend unavailable: {0}")]
    BackendUnavailable(String),

    /// The relational store failed a statement
    #[error("Query failed: {0}")]
    Query(#[from] sqlx::Error),

    /// The cache failed a lookup or a write-back
    #[error(transparent)]
    Cache(#[from] CacheError),

    /// A task could not be encoded, or a cached value could not be decoded
    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

// == Api Error Enum ==
/// Errors returned by HTTP handlers.
#[derive(Error, Debug)]
pub enum ApiError {
    /// No task matched the identifier
    #[error("Task not found: {0}")]
    NotFound(i64),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The store failed the operation
    #[error(transparent)]
    Store(#[from] StoreError),
}

// == IntoResponse Implementation ==
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Store(err) => {
                tracing::error!(error = %err, "Task store operation failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

// == Result Type Aliases ==
/// Result type for cache backends.
pub type CacheResult<T> = std::result::Result<T, CacheError>;

/// Result type for the task store.
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Result type for HTTP handlers.
pub type Result<T> = std::result::Result<T, ApiError>;
