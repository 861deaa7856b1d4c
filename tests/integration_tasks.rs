mod common;

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use serde_json::json;
use tower::ServiceExt;

use common::{
    CountingStore, FailingCache, FailingStore, memory_service, send, service, setup_test_app,
    setup_test_app_with_cors,
};
use taskcache_config::CorsConfig;

#[tokio::test]
async fn test_create_task() {
    let (tasks, _store, _cache) = memory_service();
    let app = setup_test_app(tasks);

    let (status, body) = send(
        app,
        "POST",
        "/tasks",
        Some(json!({"title": "A", "description": "d", "completed": false})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"id": 1, "title": "A", "description": "d", "completed": false})
    );
}

#[tokio::test]
async fn test_create_defaults_completed_to_false() {
    let (tasks, _store, _cache) = memory_service();
    let app = setup_test_app(tasks);

    let (status, body) = send(
        app,
        "POST",
        "/tasks",
        Some(json!({"title": "A", "description": "d"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["completed"], false);
}

#[tokio::test]
async fn test_create_with_empty_title_is_rejected() {
    let (tasks, _store, _cache) = memory_service();
    let app = setup_test_app(tasks);

    let (status, body) = send(
        app,
        "POST",
        "/tasks",
        Some(json!({"title": "", "description": "d"})),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "title must not be empty");
}

#[tokio::test]
async fn test_create_with_missing_field_is_rejected() {
    let (tasks, _store, _cache) = memory_service();
    let app = setup_test_app(tasks);

    let (status, body) = send(app, "POST", "/tasks", Some(json!({"description": "d"}))).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "title is required");
}

#[tokio::test]
async fn test_collection_routes_accept_trailing_slash() {
    let (tasks, _store, _cache) = memory_service();
    let app = setup_test_app(tasks);

    let (status, _) = send(
        app.clone(),
        "POST",
        "/tasks/",
        Some(json!({"title": "A", "description": ""})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(app, "GET", "/tasks/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_list_tasks_is_cached_between_requests() {
    let (tasks, store, _cache) = memory_service();
    let app = setup_test_app(tasks);

    for title in ["A", "B"] {
        send(
            app.clone(),
            "POST",
            "/tasks",
            Some(json!({"title": title, "description": ""})),
        )
        .await;
    }

    let (status, first) = send(app.clone(), "GET", "/tasks", None).await;
    assert_eq!(status, StatusCode::OK);
    let (_, second) = send(app, "GET", "/tasks", None).await;

    assert_eq!(first, second);
    assert_eq!(first[0]["title"], "A");
    assert_eq!(first[1]["title"], "B");
    assert_eq!(store.list_calls(), 1);
}

#[tokio::test]
async fn test_get_missing_task_returns_404() {
    let (tasks, _store, _cache) = memory_service();
    let app = setup_test_app(tasks);

    let (status, body) = send(app, "GET", "/tasks/999", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Task not found"}));
}

#[tokio::test]
async fn test_update_task_is_visible_in_list() {
    let (tasks, _store, _cache) = memory_service();
    let app = setup_test_app(tasks);

    send(
        app.clone(),
        "POST",
        "/tasks",
        Some(json!({"title": "A", "description": "d"})),
    )
    .await;
    send(app.clone(), "GET", "/tasks", None).await;

    let (status, body) = send(
        app.clone(),
        "PUT",
        "/tasks/1",
        Some(json!({"title": "B", "description": "d", "completed": true})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "B");
    assert_eq!(body["completed"], true);

    let (_, list) = send(app, "GET", "/tasks", None).await;
    assert_eq!(list, json!([body]));
}

#[tokio::test]
async fn test_update_missing_task_returns_404() {
    let (tasks, _store, _cache) = memory_service();
    let app = setup_test_app(tasks);

    let (status, _) = send(
        app,
        "PUT",
        "/tasks/3",
        Some(json!({"title": "B", "description": ""})),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_task() {
    let (tasks, _store, _cache) = memory_service();
    let app = setup_test_app(tasks);

    send(
        app.clone(),
        "POST",
        "/tasks",
        Some(json!({"title": "A", "description": ""})),
    )
    .await;

    let (status, body) = send(app.clone(), "DELETE", "/tasks/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"detail": "Task deleted"}));

    let (status, _) = send(app.clone(), "GET", "/tasks/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(app, "DELETE", "/tasks/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unreachable_cache_does_not_fail_requests() {
    let app = setup_test_app(service(
        CountingStore::new(),
        Some(Arc::new(FailingCache::default())),
    ));

    let (status, _) = send(
        app.clone(),
        "POST",
        "/tasks",
        Some(json!({"title": "A", "description": ""})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(app, "GET", "/tasks", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_store_failure_returns_500() {
    let app = setup_test_app(service(FailingStore, None));

    let (status, body) = send(app, "GET", "/tasks", None).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].as_str().unwrap().contains("store down"));
}

#[tokio::test]
async fn test_health_check() {
    let (tasks, _store, _cache) = memory_service();
    let app = setup_test_app(tasks);

    let (status, body) = send(app, "GET", "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "healthy"}));
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let (tasks, _store, _cache) = memory_service();
    let app = setup_test_app(tasks);

    let (status, body) = send(app, "GET", "/api/v1/openapi.json", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["info"]["title"], "taskcache");
    assert!(body["paths"]["/tasks"].is_object());
    assert!(body["paths"]["/tasks/{id}"].is_object());
}

async fn preflight(app: Router, origin: &str) -> Response<Body> {
    let request = Request::builder()
        .method("OPTIONS")
        .uri("/tasks")
        .header("origin", origin)
        .header("access-control-request-method", "POST")
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

#[tokio::test]
async fn test_wildcard_origin_echoes_request_origin() {
    let (tasks, _store, _cache) = memory_service();
    let app = setup_test_app_with_cors(tasks, CorsConfig::from_value(Some(r#"["*"]"#)));

    let response = preflight(app, "http://anywhere.test").await;

    let headers = response.headers();
    assert_eq!(
        headers["access-control-allow-origin"],
        "http://anywhere.test"
    );
    assert_eq!(headers["access-control-allow-credentials"], "true");
}

#[tokio::test]
async fn test_unlisted_origin_is_not_allowed() {
    let (tasks, _store, _cache) = memory_service();
    let app = setup_test_app(tasks);

    let allowed = preflight(app.clone(), "http://localhost:4200").await;
    assert_eq!(
        allowed.headers()["access-control-allow-origin"],
        "http://localhost:4200"
    );

    let denied = preflight(app, "http://evil.test").await;
    assert!(denied.headers().get("access-control-allow-origin").is_none());
}
