#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use taskcache::modules::tasks::TaskService;
use taskcache::router::init_router;
use taskcache::state::AppState;
use taskcache_cache::{Cache, CacheConfig, CacheError, MemoryCache};
use taskcache_config::{CorsConfig, ServerConfig};
use taskcache_db::{InMemoryTaskStore, StoreError, TaskStore};
use taskcache_models::{Task, TaskInput};

/// Wraps [`InMemoryTaskStore`] and counts collection reads.
#[derive(Clone, Default)]
pub struct CountingStore {
    inner: InMemoryTaskStore,
    list_calls: Arc<AtomicUsize>,
}

impl CountingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TaskStore for CountingStore {
    async fn insert(&self, input: TaskInput) -> Result<Task, StoreError> {
        self.inner.insert(input).await
    }

    async fn list(&self) -> Result<Vec<Task>, StoreError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.list().await
    }

    async fn get(&self, id: i64) -> Result<Option<Task>, StoreError> {
        self.inner.get(id).await
    }

    async fn update(&self, id: i64, input: TaskInput) -> Result<Option<Task>, StoreError> {
        self.inner.update(id, input).await
    }

    async fn delete(&self, id: i64) -> Result<bool, StoreError> {
        self.inner.delete(id).await
    }
}

/// Every operation fails.
pub struct FailingStore;

#[async_trait]
impl TaskStore for FailingStore {
    async fn insert(&self, _input: TaskInput) -> Result<Task, StoreError> {
        Err(StoreError::Unavailable("store down".to_string()))
    }

    async fn list(&self) -> Result<Vec<Task>, StoreError> {
        Err(StoreError::Unavailable("store down".to_string()))
    }

    async fn get(&self, _id: i64) -> Result<Option<Task>, StoreError> {
        Err(StoreError::Unavailable("store down".to_string()))
    }

    async fn update(&self, _id: i64, _input: TaskInput) -> Result<Option<Task>, StoreError> {
        Err(StoreError::Unavailable("store down".to_string()))
    }

    async fn delete(&self, _id: i64) -> Result<bool, StoreError> {
        Err(StoreError::Unavailable("store down".to_string()))
    }
}

/// Every operation fails, like an unreachable Redis.
#[derive(Clone, Default)]
pub struct FailingCache {
    delete_calls: Arc<AtomicUsize>,
}

impl FailingCache {
    pub fn delete_calls(&self) -> usize {
        self.delete_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Cache for FailingCache {
    async fn get(&self, _key: &str) -> Result<Option<Vec<u8>>, CacheError> {
        Err(CacheError::Unavailable("connection refused".to_string()))
    }

    async fn set_with_ttl(&self, _key: &str, _value: &[u8], _ttl: Duration) -> Result<(), CacheError> {
        Err(CacheError::Unavailable("connection refused".to_string()))
    }

    async fn delete(&self, _key: &str) -> Result<(), CacheError> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        Err(CacheError::Unavailable("connection refused".to_string()))
    }
}

pub fn service(store: impl TaskStore + 'static, cache: Option<Arc<dyn Cache>>) -> TaskService {
    TaskService::new(Arc::new(store), cache, &CacheConfig::default())
}

pub fn memory_service() -> (TaskService, CountingStore, MemoryCache) {
    let store = CountingStore::new();
    let cache = MemoryCache::new();
    let service = service(store.clone(), Some(Arc::new(cache.clone())));
    (service, store, cache)
}

pub fn setup_test_app(tasks: TaskService) -> Router {
    setup_test_app_with_cors(tasks, CorsConfig::default())
}

pub fn setup_test_app_with_cors(tasks: TaskService, cors_config: CorsConfig) -> Router {
    let state = AppState::new(tasks, ServerConfig::default(), cors_config);
    init_router(state)
}

pub async fn send(
    app: Router,
    method: &str,
    uri: &str,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(serde_json::to_vec(&json).unwrap())
        }
        None => Body::empty(),
    };

    let response = app.oneshot(builder.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null)
    };

    (status, json)
}
