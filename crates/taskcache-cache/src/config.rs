//! Cache configuration.
//!
//! This module provides configuration for the cache backend loaded from
//! environment variables.

use std::env;
use std::time::Duration;

/// Upper bound for `CACHE_TTL_SECONDS` (one year).
pub const MAX_TTL_SECONDS: u64 = 365 * 24 * 60 * 60;

/// Which cache backend to build at startup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CacheBackend {
    Redis,
    Memory,
    Disabled,
}

impl CacheBackend {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "redis" => Some(Self::Redis),
            "memory" => Some(Self::Memory),
            "disabled" | "none" | "off" => Some(Self::Disabled),
            _ => None,
        }
    }
}

/// Cache configuration loaded from environment variables.
///
/// # Environment Variables
///
/// - `REDIS_URL`: Redis connection URL (default: `redis://127.0.0.1:6379`)
/// - `CACHE_BACKEND`: `redis`, `memory` or `disabled` (default: `redis`)
/// - `CACHE_TTL_SECONDS`: TTL of the cached task collection (default: `60`,
///   capped at [`MAX_TTL_SECONDS`])
/// - `CACHE_PREFIX`: Namespace prepended to every key (default: none)
/// - `CACHE_TIMEOUT_MS`: Per-operation timeout for cache calls (default: `500`)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CacheConfig {
    /// Redis connection URL.
    pub redis_url: String,

    pub backend: CacheBackend,

    /// Time-to-live for the cached collection snapshot in seconds.
    pub default_ttl_seconds: u64,

    /// Prefix for all cache keys. Empty means keys are used verbatim.
    pub key_prefix: String,

    /// Upper bound on a single cache round trip.
    pub operation_timeout: Duration,
}

impl CacheConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            redis_url: env::var("REDIS_URL").unwrap_or(defaults.redis_url),
            backend: env::var("CACHE_BACKEND")
                .ok()
                .and_then(|v| CacheBackend::parse(&v))
                .unwrap_or(defaults.backend),
            default_ttl_seconds: parse_ttl(env::var("CACHE_TTL_SECONDS").ok().as_deref())
                .unwrap_or(defaults.default_ttl_seconds),
            key_prefix: env::var("CACHE_PREFIX").unwrap_or(defaults.key_prefix),
            operation_timeout: env::var("CACHE_TIMEOUT_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .map(Duration::from_millis)
                .unwrap_or(defaults.operation_timeout),
        }
    }

    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.default_ttl_seconds)
    }

    /// Build a prefixed cache key.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let config = CacheConfig { key_prefix: "taskcache".into(), ..Default::default() };
    /// assert_eq!(config.prefixed_key("tasks"), "taskcache:tasks");
    /// ```
    pub fn prefixed_key(&self, key: &str) -> String {
        if self.key_prefix.is_empty() {
            key.to_string()
        } else {
            format!("{}:{}", self.key_prefix, key)
        }
    }
}

fn parse_ttl(value: Option<&str>) -> Option<u64> {
    value
        .and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|ttl| *ttl > 0)
        .map(|ttl| ttl.min(MAX_TTL_SECONDS))
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            redis_url: "redis://127.0.0.1:6379".into(),
            backend: CacheBackend::Redis,
            default_ttl_seconds: 60,
            key_prefix: String::new(),
            operation_timeout: Duration::from_millis(500),
        }
    }
}
