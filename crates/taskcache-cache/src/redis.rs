//! Redis cache client.
//!
//! Every command is bounded by the configured operation timeout so a stalled
//! Redis only delays the request that issued the command.

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use redis::{AsyncCommands, Client, RedisResult, aio::ConnectionManager};
use tracing::{debug, instrument};

use crate::{Cache, CacheError};

/// Redis cache client with a multiplexed, auto-reconnecting connection.
#[derive(Clone)]
pub struct RedisCache {
    conn: ConnectionManager,
    timeout: Duration,
}

impl std::fmt::Debug for RedisCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisCache")
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl RedisCache {
    /// Creates a new Redis cache client.
    ///
    /// # Arguments
    ///
    /// * `redis_url` - Redis connection URL (e.g., "redis://localhost:6379")
    /// * `timeout` - Upper bound for connecting and for each command
    ///
    /// # Errors
    ///
    /// Returns `CacheError::Connection` if the URL is invalid or the
    /// connection fails, `CacheError::Timeout` if it takes too long.
    pub async fn new(redis_url: &str, timeout: Duration) -> Result<Self, CacheError> {
        let client = Client::open(redis_url)?;
        let conn = bounded("CONNECT", timeout, ConnectionManager::new(client)).await?;

        Ok(Self { conn, timeout })
    }

    /// Remaining TTL of `key` in seconds, `None` if absent or persistent.
    #[instrument(skip(self), fields(cache.operation = "TTL"))]
    pub async fn ttl(&self, key: &str) -> Result<Option<i64>, CacheError> {
        let mut conn = self.conn.clone();
        let ttl: i64 = bounded("TTL", self.timeout, conn.ttl(key)).await?;

        // -1 (no expiry) or -2 (doesn't exist)
        Ok((ttl > 0).then_some(ttl))
    }
}

async fn bounded<T, F>(operation: &'static str, timeout: Duration, fut: F) -> Result<T, CacheError>
where
    F: Future<Output = RedisResult<T>>,
{
    match tokio::time::timeout(timeout, fut).await {
        Ok(result) => result.map_err(CacheError::from),
        Err(_) => Err(CacheError::Timeout { operation, timeout }),
    }
}

#[async_trait]
impl Cache for RedisCache {
    #[instrument(skip(self), fields(cache.operation = "GET"))]
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError> {
        let mut conn = self.conn.clone();
        let value: Option<Vec<u8>> = bounded("GET", self.timeout, conn.get(key)).await?;

        debug!(cache.key = %key, cache.hit = value.is_some(), "Cache lookup");

        Ok(value)
    }

    #[instrument(skip(self, value), fields(cache.operation = "SETEX"))]
    async fn set_with_ttl(&self, key: &str, value: &[u8], ttl: Duration) -> Result<(), CacheError> {
        let mut conn = self.conn.clone();
        let seconds = ttl.as_secs().max(1);

        bounded::<(), _>("SETEX", self.timeout, conn.set_ex(key, value, seconds)).await?;

        debug!(cache.key = %key, cache.ttl_secs = %seconds, "Cache set");

        Ok(())
    }

    #[instrument(skip(self), fields(cache.operation = "DEL"))]
    async fn delete(&self, key: &str) -> Result<(), CacheError> {
        let mut conn = self.conn.clone();

        bounded::<(), _>("DEL", self.timeout, conn.del(key)).await?;

        debug!(cache.key = %key, "Cache invalidated");

        Ok(())
    }
}
