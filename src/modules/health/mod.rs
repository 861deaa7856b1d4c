use axum::{Json, Router, routing::get};

use taskcache_models::HealthResponse;

use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    ),
    tag = "Health"
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

pub fn init_health_router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
