//! Redis cache backend
//!
//! Uses `redis::aio::ConnectionManager` for a multiplexed connection with
//! automatic reconnection.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::cache::CacheBackend;
use crate::error::{CacheError, CacheResult};

/// How long `connect` waits for the server before giving up.
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Redis-backed cache.
#[derive(Clone)]
pub struct RedisCache {
    connection_manager: redis::aio::ConnectionManager,
}

impl std::fmt::Debug for RedisCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisCache")
            .field("connection_manager", &"ConnectionManager")
            .finish()
    }
}

impl RedisCache {
    /// Connects and pings the server.
    ///
    /// Accepts a full `redis://` URL or a bare `host:port` address.
    pub async fn connect(address: &str) -> CacheResult<Self> {
        let url = normalize_url(address);

        let client = redis::Client::open(url.as_str()).map_err(|e| {
            CacheError::Connection(format!("Failed to create Redis client: {}", e))
        })?;

        // The manager retries the initial connection with backoff; bound it.
        let connection_manager =
            tokio::time::timeout(CONNECT_TIMEOUT, redis::aio::ConnectionManager::new(client))
                .await
                .map_err(|_| {
                    CacheError::Connection(format!(
                        "Timed out connecting to Redis after {:?}",
                        CONNECT_TIMEOUT
                    ))
                })?
                .map_err(|e| {
                    CacheError::Connection(format!("Failed to connect to Redis: {}", e))
                })?;

        let cache = Self { connection_manager };
        cache
            .ping()
            .await
            .map_err(|e| CacheError::Connection(e.to_string()))?;

        info!(url = %redact_url(&url), "Redis cache connected");
        Ok(cache)
    }
}

#[async_trait]
impl CacheBackend for RedisCache {
    async fn get(&self, key: &str) -> CacheResult<Option<String>> {
        let mut conn = self.connection_manager.clone();
        let result: Option<String> = redis::cmd("GET")
            .arg(key)
            .query_async(&mut conn)
            .await
            .map_err(|e| CacheError::Backend(format!("Redis GET failed: {}", e)))?;

        if result.is_some() {
            debug!(key = key, "Cache HIT");
        } else {
            debug!(key = key, "Cache MISS");
        }

        Ok(result)
    }

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> CacheResult<()> {
        let mut conn = self.connection_manager.clone();
        let ttl_seconds = ttl.as_secs().max(1);

        let _: () = redis::cmd("SETEX")
            .arg(key)
            .arg(ttl_seconds)
            .arg(value)
            .query_async(&mut conn)
            .await
            .map_err(|e| CacheError::Backend(format!("Redis SETEX failed: {}", e)))?;

        debug!(key = key, ttl_seconds = ttl_seconds, "Cache SET");
        Ok(())
    }

    async fn delete(&self, keys: &[&str]) -> CacheResult<u64> {
        if keys.is_empty() {
            return Ok(0);
        }

        let mut conn = self.connection_manager.clone();
        let deleted: u64 = redis::cmd("DEL")
            .arg(keys)
            .query_async(&mut conn)
            .await
            .map_err(|e| CacheError::Backend(format!("Redis DEL failed: {}", e)))?;

        debug!(keys = ?keys, deleted = deleted, "Cache DEL");
        Ok(deleted)
    }

    async fn ping(&self) -> CacheResult<()> {
        let mut conn = self.connection_manager.clone();
        let pong: String = redis::cmd("PING")
            .query_async(&mut conn)
            .await
            .map_err(|e| CacheError::Backend(format!("Redis PING failed: {}", e)))?;

        if pong == "PONG" {
            Ok(())
        } else {
            Err(CacheError::Backend(format!(
                "Unexpected PING reply: {}",
                pong
            )))
        }
    }

    fn name(&self) -> &'static str {
        "redis"
    }
}

/// Prefixes a bare `host:port` address with the `redis://` scheme.
fn normalize_url(address: &str) -> String {
    if address.contains("://") {
        address.to_string()
    } else {
        format!("redis://{}", address)
    }
}

/// Redact credentials from a Redis URL for logging
fn redact_url(url: &str) -> String {
    if let Some(at_pos) = url.find('@') {
        if let Some(colon_pos) = url[..at_pos].rfind(':') {
            let prefix = &url[..=colon_pos];
            let suffix = &url[at_pos..];
            return format!("{}***{}", prefix, suffix);
        }
    }
    url.to_string()
}
