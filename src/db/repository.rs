//! Task repository trait
//!
//! Interface to the authoritative relational store.

use async_trait::async_trait;

use crate::error::StoreResult;
use crate::models::{Task, TaskInput};

/// Repository interface for task CRUD operations
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// All rows, in no particular order
    async fn list(&self) -> StoreResult<Vec<Task>>;

    /// Row by identifier, `None` when no row matches
    async fn find(&self, id: i64) -> StoreResult<Option<Task>>;

    /// Inserts a row, returning the generated identifier
    async fn insert(&self, input: &TaskInput) -> StoreResult<i64>;

    /// Overwrites a row, returning whether one was affected
    async fn update(&self, id: i64, input: &TaskInput) -> StoreResult<bool>;

    /// Deletes a row, returning whether one was affected
    async fn delete(&self, id: i64) -> StoreResult<bool>;

    /// Round-trips to the database
    async fn ping(&self) -> StoreResult<()>;
}
