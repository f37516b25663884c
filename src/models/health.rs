//! Health check response

use serde::Serialize;

use crate::store::HealthStatus;

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// "healthy" when both backends answer, "degraded" otherwise
    pub status: String,
    /// Relational store reachability
    pub database: bool,
    /// Cache reachability
    pub cache: bool,
    /// Cache provider name
    pub cache_backend: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    pub fn from_status(status: &HealthStatus) -> Self {
        let label = if status.is_healthy() {
            "healthy"
        } else {
            "degraded"
        };

        Self {
            status: label.to_string(),
            database: status.database,
            cache: status.cache,
            cache_backend: status.cache_backend.to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
