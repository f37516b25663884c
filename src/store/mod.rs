//! Task store
//!
//! Cache-aside coordination between the relational store and the cache.

mod keys;
mod task_store;

pub use keys::{task_key, ALL_TASKS_KEY};
pub use task_store::{HealthStatus, TaskStore, DEFAULT_CACHE_TTL};
