//! # taskcache Cache
//!
//! Key-value cache backends for the cache-aside task collection.
//!
//! This crate provides:
//! - The [`Cache`] trait: byte values, per-key TTL, idempotent delete
//! - [`RedisCache`]: Redis via a multiplexed `ConnectionManager`
//! - [`MemoryCache`]: in-process map with lazy expiry
//! - [`CacheConfig`]: backend selection and TTL from environment variables
//! - [`keys`]: cache key names
//! - [`snapshot`]: encoding of the cached task list
//!
//! # Example
//!
//! ```ignore
//! use taskcache_cache::{CacheConfig, connect};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = CacheConfig::from_env();
//!     let cache = connect(&config).await;
//!
//!     if let Some(cache) = cache {
//!         cache.set_with_ttl("tasks", b"[]", config.ttl()).await.unwrap();
//!     }
//! }
//! ```

pub mod config;
pub mod error;
pub mod keys;
pub mod memory;
pub mod redis;
pub mod snapshot;
pub mod traits;

pub use config::{CacheBackend, CacheConfig};
pub use error::CacheError;
pub use memory::MemoryCache;
pub use crate::redis::RedisCache;
pub use snapshot::SnapshotError;
pub use traits::Cache;

use std::sync::Arc;
use tracing::{info, warn};

/// Builds the configured cache backend.
///
/// Returns `None` when caching is disabled or Redis cannot be reached; the
/// service then reads straight from the store.
pub async fn connect(config: &CacheConfig) -> Option<Arc<dyn Cache>> {
    match config.backend {
        CacheBackend::Disabled => {
            info!("Caching disabled by configuration");
            None
        }
        CacheBackend::Memory => {
            info!("Using in-memory cache");
            Some(Arc::new(MemoryCache::new()))
        }
        CacheBackend::Redis => {
            match RedisCache::new(&config.redis_url, config.operation_timeout).await {
                Ok(cache) => {
                    info!(cache.ttl_secs = config.default_ttl_seconds, "Connected to Redis");
                    Some(Arc::new(cache))
                }
                Err(e) => {
                    warn!(error = %e, "Redis unavailable, continuing without cache");
                    None
                }
            }
        }
    }
}
