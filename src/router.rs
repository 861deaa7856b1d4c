use axum::http::{HeaderValue, Method, header};
use axum::{Json, Router, middleware, routing::get};
use tower_http::cors::{AllowOrigin, CorsLayer};
use utoipa_scalar::{Scalar, Servable as _};

use taskcache_observability::{logging_middleware, metrics_middleware};

use crate::docs;
use crate::modules::health::init_health_router;
use crate::modules::tasks::router::init_tasks_router;
use crate::state::AppState;

pub fn init_router(state: AppState) -> Router {
    let openapi = docs::openapi(&state.server_config.project_name);
    let openapi_json = Json(openapi.clone());

    Router::new()
        .merge(Scalar::with_url("/scalar", openapi))
        .route(
            &state.server_config.openapi_path(),
            get(move || async move { openapi_json }),
        )
        .merge(init_tasks_router())
        .merge(init_health_router())
        .with_state(state.clone())
        .layer(cors_layer(&state))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(middleware::from_fn(logging_middleware))
}

/// A `*` origin echoes the request origin, since credentials rule out a literal wildcard.
fn cors_layer(state: &AppState) -> CorsLayer {
    let allow_origin = if state.cors_config.allows_any_origin() {
        AllowOrigin::mirror_request()
    } else {
        let allowed_origins: Vec<HeaderValue> = state
            .cors_config
            .allowed_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();
        AllowOrigin::list(allowed_origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT])
        .allow_credentials(true)
}
