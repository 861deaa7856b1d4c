//! # taskcache Config
//!
//! Configuration types for the taskcache API.
//!
//! This crate provides configuration structures loaded from environment variables:
//!
//! - [`server`]: Bind address, project metadata, API prefix
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//!
//! Database and cache settings live next to the code that uses them
//! (`taskcache_db::DatabaseConfig`, `taskcache_cache::CacheConfig`).
//!
//! # Example
//!
//! ```ignore
//! use taskcache_config::{CorsConfig, ServerConfig};
//!
//! let server_config = ServerConfig::from_env();
//! let cors_config = CorsConfig::from_env();
//! ```

pub mod cors;
pub mod server;

pub use cors::CorsConfig;
pub use server::ServerConfig;
