use std::time::Duration;

use async_trait::async_trait;

use crate::CacheError;

/// A key-value cache with per-key expiry.
///
/// Implementations must treat an expired entry exactly like an absent one.
#[async_trait]
pub trait Cache: Send + Sync {
    /// Returns the stored bytes, or `None` on a miss.
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError>;

    /// Stores `value` under `key`, replacing any previous value and TTL.
    async fn set_with_ttl(&self, key: &str, value: &[u8], ttl: Duration) -> Result<(), CacheError>;

    /// Removes `key`. Deleting an absent key succeeds.
    async fn delete(&self, key: &str) -> Result<(), CacheError>;
}
