//! Background Tasks Module
//!
//! Contains background jobs that run periodically during server operation.
//!
//! # Jobs
//! - TTL Cleanup: Removes expired entries from the embedded cache

mod cleanup;

pub use cleanup::spawn_cleanup_task;
