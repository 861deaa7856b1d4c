//! # taskcache CLI
//!
//! Seeding and maintenance utilities for local development.
//!
//! Every command that writes to the `tasks` table also drops the cached
//! collection afterwards, so a running API server never serves a snapshot
//! older than the table.
//!
//! ```ignore
//! use taskcache_cli::seeder;
//!
//! let inputs = seeder::generate_tasks(100);
//! store.insert_many(&inputs).await?;
//! ```

pub mod seeder;
