//! # taskcache DB
//!
//! Database pool, migrations and the authoritative task store.
//!
//! The [`TaskStore`] trait is the seam the cache-aside coordinator writes
//! through. [`PgTaskStore`] is the PostgreSQL implementation; an in-memory
//! implementation is available behind the `test-utils` feature.
//!
//! # Example
//!
//! ```ignore
//! use taskcache_db::{DatabaseConfig, PgTaskStore, init_db_pool, run_migrations};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = DatabaseConfig::from_env().expect("DATABASE_URL must be set");
//!     let pool = init_db_pool(&config).await.unwrap();
//!     run_migrations(&pool).await.unwrap();
//!     let store = PgTaskStore::new(pool);
//! }
//! ```

pub mod config;
#[cfg(any(test, feature = "test-utils"))]
pub mod memory;
pub mod postgres;
pub mod store;

pub use config::DatabaseConfig;
#[cfg(any(test, feature = "test-utils"))]
pub use memory::InMemoryTaskStore;
pub use postgres::PgTaskStore;
pub use store::{StoreError, TaskStore};

// Re-export PgPool for convenience
pub use sqlx::PgPool;

use sqlx::postgres::PgPoolOptions;
use tracing::info;

/// Creates a PostgreSQL connection pool.
///
/// Connections are checked out per query and returned to the pool on every
/// exit path. `acquire_timeout` bounds how long a request waits for one.
///
/// # Note
///
/// Call this once during startup. The returned pool is cheaply cloneable and
/// is shared by every request through the application state.
pub async fn init_db_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect(&config.url)
        .await?;

    info!(
        db.max_connections = config.max_connections,
        db.acquire_timeout_ms = config.acquire_timeout.as_millis() as u64,
        "Database pool initialized"
    );

    Ok(pool)
}

/// Applies the embedded migrations (creates the `tasks` table).
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../migrations").run(pool).await?;
    info!("Database migrations applied");
    Ok(())
}
