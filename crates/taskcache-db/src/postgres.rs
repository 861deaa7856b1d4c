use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::{debug, error, instrument};

use taskcache_models::{Task, TaskInput};

use crate::store::{StoreError, TaskStore};

const TASK_COLUMNS: &str = "id, title, description, completed";

/// PostgreSQL-backed [`TaskStore`].
#[derive(Clone, Debug)]
pub struct PgTaskStore {
    db: PgPool,
}

impl PgTaskStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    pub fn pool(&self) -> &PgPool {
        &self.db
    }

    /// Inserts many tasks in one transaction, chunked into multi-row INSERTs.
    #[instrument(skip(self, inputs), fields(count = inputs.len(), db.operation = "INSERT", db.table = "tasks"))]
    pub async fn insert_many(&self, inputs: &[TaskInput]) -> Result<u64, StoreError> {
        const BATCH_SIZE: usize = 500;

        let mut tx = self.db.begin().await?;
        let mut inserted = 0;

        for chunk in inputs.chunks(BATCH_SIZE) {
            let mut builder: QueryBuilder<Postgres> =
                QueryBuilder::new("INSERT INTO tasks (title, description, completed) ");
            builder.push_values(chunk, |mut row, input| {
                row.push_bind(&input.title)
                    .push_bind(&input.description)
                    .push_bind(input.completed);
            });

            inserted += builder.build().execute(&mut *tx).await?.rows_affected();
        }

        tx.commit().await?;
        Ok(inserted)
    }

    /// Deletes every task. Returns the number of removed rows.
    #[instrument(skip(self), fields(db.operation = "DELETE", db.table = "tasks"))]
    pub async fn clear(&self) -> Result<u64, StoreError> {
        let result = sqlx::query("DELETE FROM tasks").execute(&self.db).await?;
        Ok(result.rows_affected())
    }
}

#[async_trait]
impl TaskStore for PgTaskStore {
    #[instrument(skip(self, input), fields(task.title = %input.title, db.operation = "INSERT", db.table = "tasks"))]
    async fn insert(&self, input: TaskInput) -> Result<Task, StoreError> {
        let task = sqlx::query_as::<_, Task>(&format!(
            "INSERT INTO tasks (title, description, completed) VALUES ($1, $2, $3) RETURNING {TASK_COLUMNS}"
        ))
        .bind(&input.title)
        .bind(&input.description)
        .bind(input.completed)
        .fetch_one(&self.db)
        .await
        .map_err(|e| {
            error!(error = %e, "Database error inserting task");
            StoreError::from(e)
        })?;

        debug!(task.id = task.id, "Task inserted");
        Ok(task)
    }

    #[instrument(skip(self), fields(db.operation = "SELECT", db.table = "tasks"))]
    async fn list(&self) -> Result<Vec<Task>, StoreError> {
        let tasks =
            sqlx::query_as::<_, Task>(&format!("SELECT {TASK_COLUMNS} FROM tasks ORDER BY id"))
                .fetch_all(&self.db)
                .await
                .map_err(|e| {
                    error!(error = %e, "Database error listing tasks");
                    StoreError::from(e)
                })?;

        debug!(count = tasks.len(), "Tasks listed");
        Ok(tasks)
    }

    #[instrument(skip(self), fields(task.id = id, db.operation = "SELECT", db.table = "tasks"))]
    async fn get(&self, id: i64) -> Result<Option<Task>, StoreError> {
        sqlx::query_as::<_, Task>(&format!("SELECT {TASK_COLUMNS} FROM tasks WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.db)
            .await
            .map_err(|e| {
                error!(task.id = id, error = %e, "Database error fetching task");
                StoreError::from(e)
            })
    }

    #[instrument(skip(self, input), fields(task.id = id, db.operation = "UPDATE", db.table = "tasks"))]
    async fn update(&self, id: i64, input: TaskInput) -> Result<Option<Task>, StoreError> {
        sqlx::query_as::<_, Task>(&format!(
            "UPDATE tasks SET title = $1, description = $2, completed = $3 WHERE id = $4 RETURNING {TASK_COLUMNS}"
        ))
        .bind(&input.title)
        .bind(&input.description)
        .bind(input.completed)
        .bind(id)
        .fetch_optional(&self.db)
        .await
        .map_err(|e| {
            error!(task.id = id, error = %e, "Database error updating task");
            StoreError::from(e)
        })
    }

    #[instrument(skip(self), fields(task.id = id, db.operation = "DELETE", db.table = "tasks"))]
    async fn delete(&self, id: i64) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await
            .map_err(|e| {
                error!(task.id = id, error = %e, "Database error deleting task");
                StoreError::from(e)
            })?;

        Ok(result.rows_affected() > 0)
    }
}
