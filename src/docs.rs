use utoipa::OpenApi;

use taskcache_models::{DeleteTaskResponse, HealthResponse, Task, TaskInput};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::tasks::controller::create_task,
        crate::modules::tasks::controller::get_tasks,
        crate::modules::tasks::controller::get_task,
        crate::modules::tasks::controller::update_task,
        crate::modules::tasks::controller::delete_task,
        crate::modules::health::health_check,
    ),
    components(schemas(Task, TaskInput, DeleteTaskResponse, HealthResponse)),
    tags(
        (name = "Tasks", description = "Task CRUD with a cached collection read"),
        (name = "Health", description = "Liveness probe")
    ),
    info(
        title = "taskcache API",
        version = "0.1.0",
        description = "Task CRUD service backed by PostgreSQL with a cache-aside Redis snapshot of the task list.",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// The generated document with its title replaced by the configured project name.
pub fn openapi(project_name: &str) -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    doc.info.title = project_name.to_string();
    doc
}
