//! Cache-aside coordination for the task collection.
//!
//! The store is the source of truth. The full task list is additionally kept
//! as a single JSON snapshot in the cache under the collection key. Reads of
//! the collection go through the cache; every successful mutation deletes the
//! snapshot after the store write, so the next read repopulates it.
//!
//! Cache failures never fail a request. On the read path they count as a
//! miss; on invalidation and repopulation they are logged and counted in the
//! `cache_errors_total` metric. A failed invalidation leaves the previous
//! snapshot in place until its TTL expires.

use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tracing::{debug, instrument, warn};

use taskcache_cache::{Cache, CacheConfig, keys, snapshot};
use taskcache_db::{StoreError, TaskStore};
use taskcache_models::{DeleteTaskResponse, Task, TaskInput};
use taskcache_observability::{
    CacheLookup, track_cache_error, track_cache_lookup, track_task_mutation,
};

#[derive(Debug, Error)]
pub enum TaskError {
    #[error("Task not found")]
    NotFound(i64),

    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Clone)]
pub struct TaskService {
    store: Arc<dyn TaskStore>,
    cache: Option<Arc<dyn Cache>>,
    collection_key: String,
    ttl: Duration,
}

impl TaskService {
    /// `cache: None` runs every read against the store.
    pub fn new(
        store: Arc<dyn TaskStore>,
        cache: Option<Arc<dyn Cache>>,
        cache_config: &CacheConfig,
    ) -> Self {
        Self {
            store,
            cache,
            collection_key: keys::tasks::collection(cache_config),
            ttl: cache_config.ttl(),
        }
    }

    pub fn collection_key(&self) -> &str {
        &self.collection_key
    }

    #[instrument(skip(self, input), fields(task.title = %input.title))]
    pub async fn create(&self, input: TaskInput) -> Result<Task, TaskError> {
        let task = self.store.insert(input).await?;
        track_task_mutation("create");

        self.invalidate().await;
        Ok(task)
    }

    #[instrument(skip(self), fields(cache.key = %self.collection_key))]
    pub async fn get_all(&self) -> Result<Vec<Task>, TaskError> {
        if let Some(tasks) = self.read_snapshot().await {
            return Ok(tasks);
        }

        let tasks = self.store.list().await?;
        self.write_snapshot(&tasks).await;
        Ok(tasks)
    }

    #[instrument(skip(self), fields(task.id = id))]
    pub async fn get_by_id(&self, id: i64) -> Result<Task, TaskError> {
        self.store.get(id).await?.ok_or(TaskError::NotFound(id))
    }

    #[instrument(skip(self, input), fields(task.id = id))]
    pub async fn update(&self, id: i64, input: TaskInput) -> Result<Task, TaskError> {
        let task = self
            .store
            .update(id, input)
            .await?
            .ok_or(TaskError::NotFound(id))?;
        track_task_mutation("update");

        self.invalidate().await;
        Ok(task)
    }

    #[instrument(skip(self), fields(task.id = id))]
    pub async fn delete(&self, id: i64) -> Result<DeleteTaskResponse, TaskError> {
        if !self.store.delete(id).await? {
            return Err(TaskError::NotFound(id));
        }
        track_task_mutation("delete");

        self.invalidate().await;
        Ok(DeleteTaskResponse::deleted())
    }

    /// Returns `None` on a miss, on a cache error, or on an undecodable value.
    async fn read_snapshot(&self) -> Option<Vec<Task>> {
        let cache = self.cache.as_ref()?;

        let bytes = match cache.get(&self.collection_key).await {
            Ok(Some(bytes)) => bytes,
            Ok(None) => {
                debug!("Cache miss");
                track_cache_lookup(CacheLookup::Miss);
                return None;
            }
            Err(e) => {
                warn!(error = %e, "Cache read failed, falling back to store");
                track_cache_lookup(CacheLookup::Error);
                return None;
            }
        };

        match snapshot::decode(&bytes) {
            Ok(tasks) => {
                debug!(count = tasks.len(), "Cache hit");
                track_cache_lookup(CacheLookup::Hit);
                Some(tasks)
            }
            Err(e) => {
                warn!(error = %e, "Cached snapshot is unreadable, falling back to store");
                track_cache_lookup(CacheLookup::Error);
                None
            }
        }
    }

    async fn write_snapshot(&self, tasks: &[Task]) {
        let Some(cache) = &self.cache else {
            return;
        };

        let bytes = match snapshot::encode(tasks) {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!(error = %e, "Failed to encode task snapshot");
                track_cache_error("populate");
                return;
            }
        };

        if let Err(e) = cache
            .set_with_ttl(&self.collection_key, &bytes, self.ttl)
            .await
        {
            warn!(error = %e, "Failed to populate task cache");
            track_cache_error("populate");
        }
    }

    async fn invalidate(&self) {
        if let Some(cache) = &self.cache
            && let Err(e) = cache.delete(&self.collection_key).await
        {
            warn!(cache.key = %self.collection_key, error = %e, "Failed to invalidate task cache");
            track_cache_error("invalidate");
        }
    }
}
