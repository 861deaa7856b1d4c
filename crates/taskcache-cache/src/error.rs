use std::time::Duration;

/// Error type for cache operations.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("Redis connection error: {0}")]
    Connection(#[from] ::redis::RedisError),

    #[error("Cache {operation} timed out after {timeout:?}")]
    Timeout {
        operation: &'static str,
        timeout: Duration,
    },

    #[error("Cache TTL {0:?} is out of range")]
    InvalidTtl(Duration),

    #[error("Cache unavailable: {0}")]
    Unavailable(String),
}
