//! Embedded cache backend
//!
//! In-process alternative to Redis, selected with `REDIS_CONN_STR=memory://`.
//! Values are capped at [`MAX_VALUE_SIZE`](crate::cache::MAX_VALUE_SIZE)
//! (16 MB), which bounds the serialized `all_tasks` collection.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::cache::{CacheBackend, EntryTable};
use crate::error::CacheResult;

/// Shared handle to an [`EntryTable`].
///
/// Clones share the same table; reads take the write lock because a hit
/// updates LRU order.
#[derive(Debug, Clone)]
pub struct MemoryCache {
    table: Arc<RwLock<EntryTable>>,
}

impl MemoryCache {
    /// A capacity of zero is raised to one so write-backs can always evict.
    pub fn new(max_entries: usize) -> Self {
        Self {
            table: Arc::new(RwLock::new(EntryTable::new(max_entries.max(1)))),
        }
    }

    /// Remaining lifetime of a live entry.
    pub async fn ttl(&self, key: &str) -> Option<Duration> {
        self.table.read().await.ttl(key)
    }

    /// Drops expired entries, returning how many were removed.
    pub async fn cleanup_expired(&self) -> usize {
        self.table.write().await.cleanup_expired()
    }

    pub async fn len(&self) -> usize {
        self.table.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.table.read().await.is_empty()
    }
}

#[async_trait]
impl CacheBackend for MemoryCache {
    async fn get(&self, key: &str) -> CacheResult<Option<String>> {
        let value = self.table.write().await.get(key);
        if value.is_some() {
            debug!(key = key, "Cache HIT");
        } else {
            debug!(key = key, "Cache MISS");
        }
        Ok(value)
    }

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> CacheResult<()> {
        self.table
            .write()
            .await
            .set(key.to_string(), value.to_string(), ttl)?;
        debug!(key = key, ttl_seconds = ttl.as_secs(), "Cache SET");
        Ok(())
    }

    async fn delete(&self, keys: &[&str]) -> CacheResult<u64> {
        let mut table = self.table.write().await;
        let deleted = keys.iter().filter(|key| table.remove(key)).count() as u64;
        debug!(keys = ?keys, deleted = deleted, "Cache DEL");
        Ok(deleted)
    }

    async fn ping(&self) -> CacheResult<()> {
        Ok(())
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}
