//! Request and Response models for the task API
//!
//! This module defines the task types shared by the store and the HTTP
//! layer, plus response-only DTOs.

pub mod health;
pub mod task;

// Re-export commonly used types
pub use health::HealthResponse;
pub use task::{Task, TaskInput};
