//! # taskcache Models
//!
//! Domain models and DTOs for the taskcache API.
//!
//! # Modules
//!
//! - [`tasks`]: Task entity and request/response payloads
//! - [`health`]: Health check response
//!
//! # Example
//!
//! ```ignore
//! use taskcache_models::{Task, TaskInput};
//!
//! let input = TaskInput::new("Write docs", "Cover the cache contract");
//! ```

pub mod health;
pub mod tasks;

pub use health::HealthResponse;
pub use tasks::{DeleteTaskResponse, Task, TaskInput};
