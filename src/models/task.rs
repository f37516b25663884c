//! Task model
//!
//! The persisted row type and the request body accepted by create/update.

use serde::{Deserialize, Serialize};

/// Maximum title length in characters.
pub const MAX_TITLE_LENGTH: usize = 255;

/// A task row as stored in the relational store and the cache.
///
/// Serialized as `{"id": int, "title": string, "is_done": bool}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub is_done: bool,
}

impl Task {
    /// Attaches an identifier to the submitted fields.
    pub fn from_input(id: i64, input: TaskInput) -> Self {
        Self {
            id,
            title: input.title,
            is_done: input.is_done,
        }
    }
}

/// Request body for POST /tasks and PUT /tasks/:id
///
/// An `id` field in the body is ignored; identifiers come from the store or
/// the path.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TaskInput {
    pub title: String,
    #[serde(default)]
    pub is_done: bool,
}

impl TaskInput {
    pub fn new(title: impl Into<String>, is_done: bool) -> Self {
        Self {
            title: title.into(),
            is_done,
        }
    }

    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.title.trim().is_empty() {
            return Some("Title cannot be empty".to_string());
        }
        if self.title.chars().count() > MAX_TITLE_LENGTH {
            return Some(format!(
                "Title exceeds maximum length of {} characters",
                MAX_TITLE_LENGTH
            ));
        }
        None
    }
}
