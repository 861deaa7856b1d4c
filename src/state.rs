use taskcache_config::{CorsConfig, ServerConfig};

use crate::modules::tasks::TaskService;

#[derive(Clone)]
pub struct AppState {
    pub tasks: TaskService,
    pub server_config: ServerConfig,
    pub cors_config: CorsConfig,
}

impl AppState {
    pub fn new(tasks: TaskService, server_config: ServerConfig, cors_config: CorsConfig) -> Self {
        Self {
            tasks,
            server_config,
            cors_config,
        }
    }
}
