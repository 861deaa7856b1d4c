use std::time::Instant;

use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use sqlx::PgPool;

use taskcache_cache::{Cache, CacheConfig, keys};
use taskcache_cli::seeder;
use taskcache_db::{DatabaseConfig, PgTaskStore, init_db_pool, run_migrations};

#[derive(Parser)]
#[command(name = "taskcache-cli")]
#[command(about = "taskcache CLI - seeding and cache maintenance", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply pending database migrations
    Migrate,
    /// Insert fake tasks
    Seed {
        /// Number of tasks to create
        #[arg(short = 'c', long, default_value = "50")]
        count: usize,
    },
    /// Delete every task
    Clear,
    /// Drop the cached task collection
    FlushCache,
}

#[tokio::main]
async fn main() {
    dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Migrate => handle_migrate(&connect_db().await).await,
        Commands::Seed { count } => handle_seed(&connect_db().await, count).await,
        Commands::Clear => handle_clear(&connect_db().await).await,
        Commands::FlushCache => flush_cache().await,
    }
}

async fn connect_db() -> PgPool {
    let Some(config) = DatabaseConfig::from_env() else {
        eprintln!("❌ DATABASE_URL must be set");
        std::process::exit(1);
    };

    match init_db_pool(&config).await {
        Ok(pool) => pool,
        Err(e) => {
            eprintln!("❌ Failed to connect to database: {}", e);
            std::process::exit(1);
        }
    }
}

async fn handle_migrate(pool: &PgPool) {
    match run_migrations(pool).await {
        Ok(()) => println!("✅ Migrations applied"),
        Err(e) => {
            eprintln!("\n❌ Error running migrations: {}", e);
            std::process::exit(1);
        }
    }
}

async fn handle_seed(pool: &PgPool, count: usize) {
    let start_time = Instant::now();
    println!("📝 Seeding {} tasks...", count);

    let inputs = seeder::generate_tasks(count);
    let store = PgTaskStore::new(pool.clone());

    match store.insert_many(&inputs).await {
        Ok(inserted) => {
            println!(
                "   ✓ Inserted {} tasks in {:?}",
                inserted,
                start_time.elapsed()
            );
            flush_cache().await;
        }
        Err(e) => {
            eprintln!("\n❌ Error seeding tasks: {}", e);
            std::process::exit(1);
        }
    }
}

async fn handle_clear(pool: &PgPool) {
    println!("🗑️  Clearing tasks...");

    match PgTaskStore::new(pool.clone()).clear().await {
        Ok(removed) => {
            println!("   ✓ Removed {} tasks", removed);
            flush_cache().await;
        }
        Err(e) => {
            eprintln!("\n❌ Error clearing tasks: {}", e);
            std::process::exit(1);
        }
    }
}

/// Failures here are reported but not fatal; the entry still expires on its TTL.
async fn flush_cache() {
    let config = CacheConfig::from_env();
    let key = keys::tasks::collection(&config);

    let Some(cache) = taskcache_cache::connect(&config).await else {
        println!("   ⚠️  Cache not available, skipping flush");
        return;
    };

    match cache.delete(&key).await {
        Ok(()) => println!("   ✓ Dropped cache key '{}'", key),
        Err(e) => eprintln!("   ⚠️  Failed to drop cache key '{}': {}", key, e),
    }
}
