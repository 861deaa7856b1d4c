//! The authoritative task store contract.

use async_trait::async_trait;
use taskcache_models::{Task, TaskInput};

/// Failure talking to the store. Always fatal to the calling operation.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// For [`TaskStore`] implementations not backed by sqlx, e.g. a remote
    /// service or a circuit breaker that is open.
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// Durable CRUD over tasks with single-row atomicity.
///
/// Absence is reported through `Option`/`bool`, never as an error.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Inserts a task; the store assigns `id`.
    async fn insert(&self, input: TaskInput) -> Result<Task, StoreError>;

    /// Returns every task ordered by ascending `id`.
    async fn list(&self) -> Result<Vec<Task>, StoreError>;

    async fn get(&self, id: i64) -> Result<Option<Task>, StoreError>;

    /// Replaces title, description and completed. `None` if no such row.
    async fn update(&self, id: i64, input: TaskInput) -> Result<Option<Task>, StoreError>;

    /// Removes the row. `false` if no such row.
    async fn delete(&self, id: i64) -> Result<bool, StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_display() {
        let error = StoreError::Unavailable("circuit open".to_string());
        assert_eq!(error.to_string(), "Store unavailable: circuit open");

        let error = StoreError::from(sqlx::Error::PoolTimedOut);
        assert!(matches!(error, StoreError::Database(_)));
        assert!(error.to_string().starts_with("Database error: "));
    }
}
