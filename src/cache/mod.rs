//! Cache Module
//!
//! Key-value cache backends used by the task store: Redis, and an embedded
//! TTL cache with LRU eviction.

mod backend;
mod entry;
mod lru;
mod memory;
mod redis;
mod table;


// Re-export public types
pub use backend::CacheBackend;
pub use entry::CacheEntry;
pub use lru::LruTracker;
pub use memory::MemoryCache;
pub use self::redis::RedisCache;
pub use table::EntryTable;

// == Public Constants ==
/// Maximum allowed key length in bytes
pub const MAX_KEY_LENGTH: usize = 256;

/// Maximum allowed value size in bytes
///
/// Applies to the embedded cache only. Redis accepts larger values, so with
/// `memory://` a task table whose JSON exceeds this cannot be cached and
/// collection reads fail with `InvalidRequest`.
pub const MAX_VALUE_SIZE: usize = 16 * 1024 * 1024; // 16 MB
