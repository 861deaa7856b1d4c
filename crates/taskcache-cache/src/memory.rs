//! In-memory cache implementation.
//!
//! Expiry is lazy: an expired entry is dropped on the next read of its key.
//! Uses `tokio::time::Instant` so tests can drive expiry with a paused clock.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tokio::time::Instant;

use crate::{Cache, CacheError};

#[derive(Debug, Clone)]
struct CacheEntry {
    value: Vec<u8>,
    expires_at: Instant,
}

impl CacheEntry {
    fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryCache {
    store: Arc<RwLock<HashMap<String, CacheEntry>>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time left before `key` expires, `None` if absent or expired.
    pub async fn ttl(&self, key: &str) -> Option<Duration> {
        let store = self.store.read().await;
        store
            .get(key)
            .filter(|entry| !entry.is_expired())
            .map(|entry| entry.expires_at - Instant::now())
    }
}

#[async_trait]
impl Cache for MemoryCache {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError> {
        {
            let store = self.store.read().await;
            match store.get(key) {
                Some(entry) if !entry.is_expired() => return Ok(Some(entry.value.clone())),
                Some(_) => {}
                None => return Ok(None),
            }
        }

        let mut store = self.store.write().await;
        if store.get(key).is_some_and(CacheEntry::is_expired) {
            store.remove(key);
        }
        Ok(None)
    }

    async fn set_with_ttl(&self, key: &str, value: &[u8], ttl: Duration) -> Result<(), CacheError> {
        let expires_at = Instant::now()
            .checked_add(ttl)
            .ok_or(CacheError::InvalidTtl(ttl))?;
        let entry = CacheEntry {
            value: value.to_vec(),
            expires_at,
        };
        self.store.write().await.insert(key.to_string(), entry);
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), CacheError> {
        self.store.write().await.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_and_get() {
        let cache = MemoryCache::new();
        cache
            .set_with_ttl("tasks", b"[]", Duration::from_secs(60))
            .await
            .unwrap();

        assert_eq!(cache.get("tasks").await.unwrap(), Some(b"[]".to_vec()));
        assert_eq!(cache.get("other").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_delete_absent_key_is_noop() {
        let cache = MemoryCache::new();
        cache.delete("tasks").await.unwrap();
        cache.delete("tasks").await.unwrap();
        assert_eq!(cache.get("tasks").await.unwrap(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_entry_expires_after_ttl() {
        let cache = MemoryCache::new();
        cache
            .set_with_ttl("tasks", b"[]", Duration::from_secs(60))
            .await
            .unwrap();

        tokio::time::advance(Duration::from_secs(59)).await;
        assert!(cache.get("tasks").await.unwrap().is_some());
        assert_eq!(cache.ttl("tasks").await, Some(Duration::from_secs(1)));

        tokio::time::advance(Duration::from_secs(1)).await;
        assert_eq!(cache.get("tasks").await.unwrap(), None);
        assert_eq!(cache.ttl("tasks").await, None);
    }

    #[tokio::test]
    async fn test_unrepresentable_ttl_is_rejected() {
        let cache = MemoryCache::new();
        let ttl = Duration::from_secs(u64::MAX);

        let result = cache.set_with_ttl("tasks", b"[]", ttl).await;
        assert!(matches!(result, Err(CacheError::InvalidTtl(d)) if d == ttl));
        assert_eq!(cache.get("tasks").await.unwrap(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_overwrite_resets_ttl() {
        let cache = MemoryCache::new();
        cache
            .set_with_ttl("tasks", b"[1]", Duration::from_secs(60))
            .await
            .unwrap();
        tokio::time::advance(Duration::from_secs(50)).await;
        cache
            .set_with_ttl("tasks", b"[2]", Duration::from_secs(60))
            .await
            .unwrap();
        tokio::time::advance(Duration::from_secs(50)).await;

        assert_eq!(cache.get("tasks").await.unwrap(), Some(b"[2]".to_vec()));
    }
}
