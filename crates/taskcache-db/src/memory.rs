//! In-memory [`TaskStore`] for tests and local experiments.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use taskcache_models::{Task, TaskInput};

use crate::store::{StoreError, TaskStore};

#[derive(Debug, Default)]
struct Inner {
    next_id: i64,
    rows: BTreeMap<i64, Task>,
}

/// Ids start at 1 and are never reused, like a `BIGSERIAL` column.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskStore {
    inner: Arc<RwLock<Inner>>,
}

impl InMemoryTaskStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TaskStore for InMemoryTaskStore {
    async fn insert(&self, input: TaskInput) -> Result<Task, StoreError> {
        let mut inner = self.inner.write().await;
        inner.next_id += 1;
        let task = Task::from_input(inner.next_id, input);
        inner.rows.insert(task.id, task.clone());
        Ok(task)
    }

    async fn list(&self) -> Result<Vec<Task>, StoreError> {
        Ok(self.inner.read().await.rows.values().cloned().collect())
    }

    async fn get(&self, id: i64) -> Result<Option<Task>, StoreError> {
        Ok(self.inner.read().await.rows.get(&id).cloned())
    }

    async fn update(&self, id: i64, input: TaskInput) -> Result<Option<Task>, StoreError> {
        let mut inner = self.inner.write().await;
        Ok(inner.rows.get_mut(&id).map(|task| {
            task.apply(input);
            task.clone()
        }))
    }

    async fn delete(&self, id: i64) -> Result<bool, StoreError> {
        Ok(self.inner.write().await.rows.remove(&id).is_some())
    }
}
