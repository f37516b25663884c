//! Task Store - a tasks REST service with a cache-aside read path
//!
//! PostgreSQL holds the tasks; Redis (or an embedded TTL cache) serves reads
//! and is invalidated after every successful write.

pub mod api;
pub mod background;
pub mod cache;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod store;

pub use api::AppState;
pub use background::spawn_cleanup_task;
pub use config::Config;
pub use store::TaskStore;
