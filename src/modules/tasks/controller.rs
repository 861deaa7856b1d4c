use anyhow::anyhow;
use axum::{
    Json,
    extract::{Path, State},
};
use tracing::instrument;

use taskcache_core::AppError;
use taskcache_models::{DeleteTaskResponse, Task, TaskInput};

use crate::modules::tasks::service::TaskError;
use crate::state::AppState;
use crate::validator::ValidatedJson;

impl From<TaskError> for AppError {
    fn from(err: TaskError) -> Self {
        match err {
            TaskError::NotFound(_) => AppError::not_found(anyhow!(err)),
            TaskError::Store(e) => AppError::internal(e),
        }
    }
}

#[utoipa::path(
    post,
    path = "/tasks",
    request_body = TaskInput,
    responses(
        (status = 200, description = "Task created", body = Task),
        (status = 400, description = "Malformed request body"),
        (status = 422, description = "Validation failed")
    ),
    tag = "Tasks"
)]
#[instrument(skip(state, input))]
pub async fn create_task(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<TaskInput>,
) -> Result<Json<Task>, AppError> {
    let task = state.tasks.create(input).await?;
    Ok(Json(task))
}

#[utoipa::path(
    get,
    path = "/tasks",
    responses(
        (status = 200, description = "All tasks ordered by id", body = Vec<Task>)
    ),
    tag = "Tasks"
)]
#[instrument(skip(state))]
pub async fn get_tasks(State(state): State<AppState>) -> Result<Json<Vec<Task>>, AppError> {
    let tasks = state.tasks.get_all().await?;
    Ok(Json(tasks))
}

#[utoipa::path(
    get,
    path = "/tasks/{id}",
    params(
        ("id" = i64, Path, description = "Task ID")
    ),
    responses(
        (status = 200, description = "Task details", body = Task),
        (status = 404, description = "Task not found")
    ),
    tag = "Tasks"
)]
#[instrument(skip(state))]
pub async fn get_task(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Task>, AppError> {
    let task = state.tasks.get_by_id(id).await?;
    Ok(Json(task))
}

#[utoipa::path(
    put,
    path = "/tasks/{id}",
    params(
        ("id" = i64, Path, description = "Task ID")
    ),
    request_body = TaskInput,
    responses(
        (status = 200, description = "Task replaced", body = Task),
        (status = 404, description = "Task not found"),
        (status = 422, description = "Validation failed")
    ),
    tag = "Tasks"
)]
#[instrument(skip(state, input))]
pub async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidatedJson(input): ValidatedJson<TaskInput>,
) -> Result<Json<Task>, AppError> {
    let task = state.tasks.update(id, input).await?;
    Ok(Json(task))
}

#[utoipa::path(
    delete,
    path = "/tasks/{id}",
    params(
        ("id" = i64, Path, description = "Task ID")
    ),
    responses(
        (status = 200, description = "Task deleted", body = DeleteTaskResponse),
        (status = 404, description = "Task not found")
    ),
    tag = "Tasks"
)]
#[instrument(skip(state))]
pub async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<DeleteTaskResponse>, AppError> {
    let response = state.tasks.delete(id).await?;
    Ok(Json(response))
}
