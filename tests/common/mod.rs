//! Shared test doubles for the store and API tests.

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use task_store::cache::{CacheBackend, MemoryCache};
use task_store::db::TaskRepository;
use task_store::error::{CacheError, CacheResult, StoreError, StoreResult};
use task_store::models::{Task, TaskInput};
use task_store::store::{TaskStore, DEFAULT_CACHE_TTL};

pub fn task(id: i64, title: &str, is_done: bool) -> Task {
    Task {
        id,
        title: title.to_string(),
        is_done,
    }
}

/// The two rows used by the seeded scenarios.
pub fn seed_tasks() -> Vec<Task> {
    vec![task(1, "Task 1", false), task(2, "Task 2", true)]
}

pub const SEED_JSON: &str =
    r#"[{"id":1,"title":"Task 1","is_done":false},{"id":2,"title":"Task 2","is_done":true}]"#;

pub fn store_with(repository: Arc<dyn TaskRepository>, cache: Arc<dyn CacheBackend>) -> TaskStore {
    TaskStore::new(repository, cache, DEFAULT_CACHE_TTL)
}

// == In-Memory Repository ==
/// Relational store double that counts every statement it runs.
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    rows: Mutex<BTreeMap<i64, Task>>,
    next_id: AtomicI64,
    calls: AtomicUsize,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self {
            next_id: AtomicI64::new(1),
            ..Self::default()
        }
    }

    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        let next = tasks.iter().map(|t| t.id).max().unwrap_or(0) + 1;
        let rows = tasks.into_iter().map(|t| (t.id, t)).collect();
        Self {
            rows: Mutex::new(rows),
            next_id: AtomicI64::new(next),
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of statements executed so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn record(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl TaskRepository for InMemoryRepository {
    async fn list(&self) -> StoreResult<Vec<Task>> {
        self.record();
        Ok(self.rows.lock().unwrap().values().cloned().collect())
    }

    async fn find(&self, id: i64) -> StoreResult<Option<Task>> {
        self.record();
        Ok(self.rows.lock().unwrap().get(&id).cloned())
    }

    async fn insert(&self, input: &TaskInput) -> StoreResult<i64> {
        self.record();
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.rows
            .lock()
            .unwrap()
            .insert(id, Task::from_input(id, input.clone()));
        Ok(id)
    }

    async fn update(&self, id: i64, input: &TaskInput) -> StoreResult<bool> {
        self.record();
        let mut rows = self.rows.lock().unwrap();
        match rows.get_mut(&id) {
            Some(row) => {
                row.title = input.title.clone();
                row.is_done = input.is_done;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: i64) -> StoreResult<bool> {
        self.record();
        Ok(self.rows.lock().unwrap().remove(&id).is_some())
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }
}

// == Unreachable Repository ==
/// Relational store double that fails every statement and counts attempts.
#[derive(Debug, Default)]
pub struct UnreachableRepository {
    calls: AtomicUsize,
}

impl UnreachableRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn fail<T>(&self) -> StoreResult<T> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(StoreError::Query(sqlx::Error::PoolClosed))
    }
}

#[async_trait]
impl TaskRepository for UnreachableRepository {
    async fn list(&self) -> StoreResult<Vec<Task>> {
        self.fail()
    }

    async fn find(&self, _id: i64) -> StoreResult<Option<Task>> {
        self.fail()
    }

    async fn insert(&self, _input: &TaskInput) -> StoreResult<i64> {
        self.fail()
    }

    async fn update(&self, _id: i64, _input: &TaskInput) -> StoreResult<bool> {
        self.fail()
    }

    async fn delete(&self, _id: i64) -> StoreResult<bool> {
        self.fail()
    }

    async fn ping(&self) -> StoreResult<()> {
        Err(StoreError::Query(sqlx::Error::PoolClosed))
    }
}

// == Cache Doubles ==
/// Cache whose every command fails.
#[derive(Debug, Default)]
pub struct DownCache;

#[async_trait]
impl CacheBackend for DownCache {
    async fn get(&self, _key: &str) -> CacheResult<Option<String>> {
        Err(CacheError::Backend("connection reset".to_string()))
    }

    async fn set(&self, _key: &str, _value: &str, _ttl: Duration) -> CacheResult<()> {
        Err(CacheError::Backend("connection reset".to_string()))
    }

    async fn delete(&self, _keys: &[&str]) -> CacheResult<u64> {
        Err(CacheError::Backend("connection reset".to_string()))
    }

    async fn ping(&self) -> CacheResult<()> {
        Err(CacheError::Backend("connection reset".to_string()))
    }

    fn name(&self) -> &'static str {
        "down"
    }
}

/// Embedded cache that refuses deletes, for exercising best-effort invalidation.
#[derive(Debug, Clone)]
pub struct NoDeleteCache {
    pub inner: MemoryCache,
}

#[async_trait]
impl CacheBackend for NoDeleteCache {
    async fn get(&self, key: &str) -> CacheResult<Option<String>> {
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> CacheResult<()> {
        self.inner.set(key, value, ttl).await
    }

    async fn delete(&self, _keys: &[&str]) -> CacheResult<u64> {
        Err(CacheError::Backend("DEL rejected".to_string()))
    }

    async fn ping(&self) -> CacheResult<()> {
        Ok(())
    }

    fn name(&self) -> &'static str {
        "no-delete"
    }
}
