//! Task domain models and DTOs.
//!
//! [`Task`] is both the database row and the element type of the cached
//! collection snapshot, so its serde representation is part of the cache
//! contract: `{"id", "title", "description", "completed"}`.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// A persisted task. `id` is assigned by the store and never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub completed: bool,
}

impl Task {
    pub fn from_input(id: i64, input: TaskInput) -> Self {
        Self {
            id,
            title: input.title,
            description: input.description,
            completed: input.completed,
        }
    }

    /// Replaces every mutable field with the values from `input`.
    pub fn apply(&mut self, input: TaskInput) {
        self.title = input.title;
        self.description = input.description;
        self.completed = input.completed;
    }
}

/// Payload for creating a task or fully replacing an existing one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct TaskInput {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub completed: bool,
}

impl TaskInput {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            completed: false,
        }
    }

    pub fn completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DeleteTaskResponse {
    pub detail: String,
}

impl DeleteTaskResponse {
    pub fn deleted() -> Self {
        Self {
            detail: "Task deleted".to_string(),
        }
    }
}
