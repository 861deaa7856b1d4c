use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{create_task, delete_task, get_task, get_tasks, update_task};

pub fn init_tasks_router() -> Router<AppState> {
    Router::new()
        .route("/tasks", get(get_tasks).post(create_task))
        .route("/tasks/", get(get_tasks).post(create_task))
        .route(
            "/tasks/{id}",
            get(get_task).put(update_task).delete(delete_task),
        )
}
