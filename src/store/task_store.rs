//! Cache-aside task store
//!
//! Reads are served from the cache when possible and repopulate it on miss.
//! Writes go to the relational store first and only then invalidate the
//! affected cache keys. There is no transaction spanning the two, so a crash
//! between the write and the invalidation leaves a stale entry until its TTL
//! runs out or the next write to the same keys.

use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::cache::CacheBackend;
use crate::db::TaskRepository;
use crate::error::StoreResult;
use crate::models::{Task, TaskInput};
use crate::store::keys::{task_key, ALL_TASKS_KEY};

/// Default lifetime of every cache entry.
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(60 * 60);

/// Reachability of both backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HealthStatus {
    pub database: bool,
    pub cache: bool,
    pub cache_backend: &'static str,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.database && self.cache
    }
}

/// Task store fronting a [`TaskRepository`] with a [`CacheBackend`].
///
/// Holds no mutable state of its own; clones share both backends.
#[derive(Clone)]
pub struct TaskStore {
    repository: Arc<dyn TaskRepository>,
    cache: Arc<dyn CacheBackend>,
    ttl: Duration,
}

impl TaskStore {
    pub fn new(
        repository: Arc<dyn TaskRepository>,
        cache: Arc<dyn CacheBackend>,
        ttl: Duration,
    ) -> Self {
        Self {
            repository,
            cache,
            ttl,
        }
    }

    // == Get All ==
    /// Returns every task, from `all_tasks` when cached.
    ///
    /// A cache lookup failure or an undecodable cached value is an error; the
    /// database is only consulted on a clean miss.
    pub async fn get_all(&self) -> StoreResult<Vec<Task>> {
        if let Some(tasks) = self.cached::<Vec<Task>>(ALL_TASKS_KEY).await? {
            return Ok(tasks);
        }

        let tasks = self.repository.list().await?;
        self.populate(ALL_TASKS_KEY, &tasks).await?;

        Ok(tasks)
    }

    // == Get By Id ==
    /// Returns the task with `id`, `None` if no row matches.
    ///
    /// Absent rows are not cached.
    pub async fn get_by_id(&self, id: i64) -> StoreResult<Option<Task>> {
        let key = task_key(id);
        if let Some(task) = self.cached::<Task>(&key).await? {
            return Ok(Some(task));
        }

        let Some(task) = self.repository.find(id).await? else {
            debug!(task_id = id, "Task not found");
            return Ok(None);
        };
        self.populate(&key, &task).await?;

        Ok(Some(task))
    }

    // == Create ==
    /// Inserts a task and returns its identifier.
    pub async fn create(&self, input: &TaskInput) -> StoreResult<i64> {
        let id = self.repository.insert(input).await?;
        self.invalidate(&[ALL_TASKS_KEY]).await;
        Ok(id)
    }

    // == Update ==
    /// Overwrites the task with `id`, returning whether it existed.
    pub async fn update(&self, id: i64, input: &TaskInput) -> StoreResult<bool> {
        let updated = self.repository.update(id, input).await?;
        if updated {
            let key = task_key(id);
            self.invalidate(&[ALL_TASKS_KEY, key.as_str()]).await;
        }
        Ok(updated)
    }

    // == Delete ==
    /// Removes the task with `id`, returning whether it existed.
    pub async fn delete(&self, id: i64) -> StoreResult<bool> {
        let deleted = self.repository.delete(id).await?;
        if deleted {
            let key = task_key(id);
            self.invalidate(&[ALL_TASKS_KEY, key.as_str()]).await;
        }
        Ok(deleted)
    }

    /// Pings both backends.
    pub async fn health(&self) -> HealthStatus {
        let database = match self.repository.ping().await {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, "Database health check failed");
                false
            }
        };
        let cache = match self.cache.ping().await {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, "Cache health check failed");
                false
            }
        };

        HealthStatus {
            database,
            cache,
            cache_backend: self.cache.name(),
        }
    }

    async fn cached<T: DeserializeOwned>(&self, key: &str) -> StoreResult<Option<T>> {
        match self.cache.get(key).await? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    async fn populate<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> StoreResult<()> {
        let raw = serde_json::to_string(value)?;
        self.cache.set(key, &raw, self.ttl).await?;
        Ok(())
    }

    // Best-effort: a failed delete is logged and the write still succeeds.
    async fn invalidate(&self, keys: &[&str]) {
        if let Err(e) = self.cache.delete(keys).await {
            warn!(keys = ?keys, error = %e, "Could not invalidate cache");
        }
    }
}

impl std::fmt::Debug for TaskStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskStore")
            .field("cache", &self.cache.name())
            .field("ttl", &self.ttl)
            .finish()
    }
}
