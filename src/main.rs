use std::sync::Arc;

use anyhow::Context;
use dotenvy::dotenv;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{error, info};

use taskcache::modules::tasks::TaskService;
use taskcache::router::init_router;
use taskcache::state::AppState;
use taskcache_cache::CacheConfig;
use taskcache_config::{CorsConfig, ServerConfig};
use taskcache_db::{DatabaseConfig, PgTaskStore, init_db_pool, run_migrations};
use taskcache_observability::{init_metrics, init_tracing, metrics_app, shutdown_tracer};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    init_tracing(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let server_config = ServerConfig::from_env();
    let db_config = DatabaseConfig::from_env().context("DATABASE_URL must be set")?;

    let pool = init_db_pool(&db_config)
        .await
        .context("Failed to connect to database")?;
    run_migrations(&pool)
        .await
        .context("Failed to run database migrations")?;

    let cache_config = CacheConfig::from_env();
    let cache = taskcache_cache::connect(&cache_config).await;

    let tasks = TaskService::new(Arc::new(PgTaskStore::new(pool)), cache, &cache_config);
    let state = AppState::new(tasks, server_config.clone(), CorsConfig::from_env());

    if let Some(handle) = init_metrics() {
        let metrics_address = server_config.metrics_address();
        let listener = TcpListener::bind(&metrics_address)
            .await
            .with_context(|| format!("Failed to bind metrics listener on {metrics_address}"))?;
        info!(address = %metrics_address, "Metrics available at /metrics");

        tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, metrics_app(handle)).await {
                error!(error = %e, "Metrics server stopped");
            }
        });
    }

    let app = init_router(state);

    let bind_address = server_config.bind_address();
    let listener = TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {bind_address}"))?;

    println!("🚀 Server running on http://{}", bind_address);
    println!("📖 Scalar UI available at http://{}/scalar", bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    shutdown_tracer();
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, shutting down..."),
        _ = terminate => info!("Received SIGTERM, shutting down..."),
    }
}
