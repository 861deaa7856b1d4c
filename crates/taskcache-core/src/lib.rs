//! # taskcache Core
//!
//! Foundational types shared by the taskcache crates.
//!
//! - [`errors`]: Application error type with HTTP response conversion
//!
//! # Example
//!
//! ```ignore
//! use taskcache_core::AppError;
//!
//! let error = AppError::not_found(anyhow::anyhow!("Task not found"));
//! ```

pub mod errors;

pub use errors::AppError;
