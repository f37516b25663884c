//! Relational store
//!
//! The `tasks` table is the source of truth; the cache is derived from it.

mod postgres;
mod repository;

pub use postgres::PgTaskRepository;
pub use repository::TaskRepository;
