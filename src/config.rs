//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::time::Duration;

use thiserror::Error;

/// Connection string that selects the embedded in-process cache.
///
/// Each cached value is limited to 16 MB
/// ([`MAX_VALUE_SIZE`](crate::cache::MAX_VALUE_SIZE)).
pub const MEMORY_CACHE_URL: &str = "memory://";

/// Errors raised while loading configuration.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// A required environment variable is not set
    #[error("{0} environment variable not set")]
    Missing(&'static str),
}

/// Server configuration parameters.
///
/// Connection strings are required; everything else has a default.
#[derive(Debug, Clone)]
pub struct Config {
    /// PostgreSQL connection string
    pub database_url: String,
    /// Redis address or URL, or `memory://` for the embedded cache
    pub cache_url: String,
    /// HTTP server port
    pub server_port: u16,
    /// Expiration applied to every cache write, in seconds
    pub cache_ttl: u64,
    /// Capacity of the embedded cache
    pub max_entries: usize,
    /// Embedded cache sweep interval in seconds
    pub cleanup_interval: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `POSTGRES_CONN_STR` - PostgreSQL connection string (required)
    /// - `REDIS_CONN_STR` - Redis address, or `memory://` (required). The embedded
    ///   cache rejects values over 16 MB, so a very large task table cannot be
    ///   cached as `all_tasks` and collection reads fail; use Redis for that.
    /// - `SERVER_PORT` - HTTP server port (default: 8081)
    /// - `CACHE_TTL` - Cache entry TTL in seconds, must be positive (default: 3600)
    /// - `MAX_ENTRIES` - Embedded cache capacity, must be positive (default: 10000)
    /// - `CLEANUP_INTERVAL` - Embedded cache sweep frequency in seconds (default: 1)
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        Ok(Self {
            database_url: required("POSTGRES_CONN_STR")?,
            cache_url: required("REDIS_CONN_STR")?,
            server_port: parsed("SERVER_PORT").unwrap_or(defaults.server_port),
            cache_ttl: parsed::<u64>("CACHE_TTL")
                .filter(|ttl| *ttl > 0)
                .unwrap_or(defaults.cache_ttl),
            max_entries: parsed::<usize>("MAX_ENTRIES")
                .filter(|n| *n > 0)
                .unwrap_or(defaults.max_entries),
            cleanup_interval: parsed("CLEANUP_INTERVAL").unwrap_or(defaults.cleanup_interval),
        })
    }

    /// TTL applied to cache writes.
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl)
    }

    /// Whether the embedded cache was selected instead of Redis.
    pub fn uses_memory_cache(&self) -> bool {
        self.cache_url == MEMORY_CACHE_URL
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: String::new(),
            cache_url: MEMORY_CACHE_URL.to_string(),
            server_port: 8081,
            cache_ttl: 3600,
            max_entries: 10_000,
            cleanup_interval: 1,
        }
    }
}

fn required(name: &'static str) -> Result<String, ConfigError> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::Missing(name)),
    }
}

fn parsed<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    // Environment variables are process-wide, so every env-touching
    // assertion lives in this one test.
    #[test]
    fn test_config_from_env() {
        env::remove_var("POSTGRES_CONN_STR");
        env::remove_var("REDIS_CONN_STR");
        assert_eq!(
            Config::from_env().unwrap_err(),
            ConfigError::Missing("POSTGRES_CONN_STR")
        );

        env::set_var("POSTGRES_CONN_STR", "postgres://localhost/tasks");
        assert_eq!(
            Config::from_env().unwrap_err(),
            ConfigError::Missing("REDIS_CONN_STR")
        );

        env::set_var("REDIS_CONN_STR", "localhost:6379");
        env::remove_var("SERVER_PORT");
        env::set_var("CACHE_TTL", "not-a-number");
        env::remove_var("MAX_ENTRIES");
        env::set_var("CLEANUP_INTERVAL", "5");

        let config = Config::from_env().unwrap();
        assert_eq!(config.database_url, "postgres://localhost/tasks");
        assert_eq!(config.cache_url, "localhost:6379");
        assert_eq!(config.server_port, 8081);
        assert_eq!(config.cache_ttl, 3600);
        assert_eq!(config.max_entries, 10_000);
        assert_eq!(config.cleanup_interval, 5);
        assert!(!config.uses_memory_cache());

        // Zero capacity falls back to the default
        env::set_var("MAX_ENTRIES", "0");
        assert_eq!(Config::from_env().unwrap().max_entries, 10_000);
        env::set_var("MAX_ENTRIES", "250");
        assert_eq!(Config::from_env().unwrap().max_entries, 250);

        env::remove_var("POSTGRES_CONN_STR");
        env::remove_var("REDIS_CONN_STR");
        env::remove_var("CACHE_TTL");
        env::remove_var("MAX_ENTRIES");
        env::remove_var("CLEANUP_INTERVAL");
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.server_port, 8081);
        assert_eq!(config.cache_ttl(), Duration::from_secs(3600));
        assert!(config.uses_memory_cache());
    }
}
