//! Cache backend trait

use std::time::Duration;

use async_trait::async_trait;

use crate::error::CacheResult;

/// Key-value cache with per-entry expiration.
///
/// Implemented by [`RedisCache`](super::RedisCache) and
/// [`MemoryCache`](super::MemoryCache).
#[async_trait]
pub trait CacheBackend: Send + Sync {
    /// Returns `Ok(Some(value))` on hit, `Ok(None)` on miss.
    async fn get(&self, key: &str) -> CacheResult<Option<String>>;

    /// Stores a value that expires after `ttl`.
    async fn set(&self, key: &str, value: &str, ttl: Duration) -> CacheResult<()>;

    /// Deletes every listed key, returning how many existed.
    async fn delete(&self, keys: &[&str]) -> CacheResult<u64>;

    /// Round-trips to the backend.
    async fn ping(&self) -> CacheResult<()>;

    /// Short provider name for logs and health output.
    fn name(&self) -> &'static str;
}
