/// HTTP tests for the user endpoints
/// Drives the full router against an in-memory database
use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::util::ServiceExt;
use user_service::{api::AppState, build_router, Database, NewProject, ProjectStorage};

async fn create_test_app() -> (Router, Database) {
    let db = Database::in_memory().await.unwrap();
    let app = build_router(AppState::new(&db), false);
    (app, db)
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Vec<u8>) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, bytes.to_vec())
}

async fn post_raw(app: &Router, content_type: Option<&str>, body: &str) -> (StatusCode, Vec<u8>) {
    let mut builder = Request::builder().method("POST").uri("/api/users");
    if let Some(content_type) = content_type {
        builder = builder.header(header::CONTENT_TYPE, content_type);
    }
    let request = builder.body(Body::from(body.to_string())).unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, bytes.to_vec())
}

fn detail(bytes: &[u8]) -> String {
    json_body(bytes)["detail"]
        .as_str()
        .expect("error body carries a string detail")
        .to_string()
}

fn json_body(bytes: &[u8]) -> Value {
    serde_json::from_slice(bytes).unwrap()
}

#[tokio::test]
async fn test_health() {
    let (app, _db) = create_test_app().await;

    let (status, body) = send(&app, "GET", "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json_body(&body), json!({ "status": "ok" }));
}

#[tokio::test]
async fn test_user_lifecycle() {
    let (app, _db) = create_test_app().await;

    let (status, body) = send(&app, "POST", "/api/users", Some(json!({ "email": "a@x.com" }))).await;
    assert_eq!(status, StatusCode::CREATED);
    let created = json_body(&body);
    assert_eq!(created, json!({ "id": 1, "email": "a@x.com", "name": null }));

    let (status, body) = send(&app, "POST", "/api/users", Some(json!({ "email": "a@x.com" }))).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json_body(&body), json!({ "detail": "User already exists" }));

    let (status, body) = send(&app, "GET", "/api/users/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json_body(&body), created);

    let (status, body) = send(&app, "DELETE", "/api/users/1", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_empty());

    let (status, body) = send(&app, "GET", "/api/users/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json_body(&body), json!({ "detail": "User not found" }));
}

#[tokio::test]
async fn test_list_users_ordered() {
    let (app, _db) = create_test_app().await;

    let (status, body) = send(&app, "GET", "/api/users", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json_body(&body), json!([]));

    for email in ["c@x.com", "a@x.com", "b@x.com"] {
        let (status, _) = send(&app, "POST", "/api/users", Some(json!({ "email": email }))).await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (_, body) = send(&app, "GET", "/api/users", None).await;
    let ids: Vec<i64> = json_body(&body)
        .as_array()
        .unwrap()
        .iter()
        .map(|u| u["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[tokio::test]
async fn test_delete_cascades_projects() {
    let (app, db) = create_test_app().await;
    let projects = ProjectStorage::new(db.pool().clone());

    let (_, body) = send(
        &app,
        "POST",
        "/api/users",
        Some(json!({ "email": "owner@x.com", "name": "Owner" })),
    )
    .await;
    let owner_id = json_body(&body)["id"].as_i64().unwrap();

    for name in ["one", "two"] {
        projects.create_project(owner_id, &NewProject::new(name)).await.unwrap();
    }

    let (status, _) = send(&app, "DELETE", &format!("/api/users/{owner_id}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    assert!(projects.list_projects_for_owner(owner_id).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_delete_missing_user() {
    let (app, _db) = create_test_app().await;

    let (status, body) = send(&app, "DELETE", "/api/users/42", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json_body(&body), json!({ "detail": "User not found" }));
}

#[tokio::test]
async fn test_create_rejects_invalid_payloads() {
    let (app, _db) = create_test_app().await;

    let (status, body) = send(&app, "POST", "/api/users", Some(json!({ "email": "not-an-email" }))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(detail(&body), "email: expected local@domain");

    let (status, body) = send(&app, "POST", "/api/users", Some(json!({ "name": "missing email" }))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(detail(&body).contains("missing field `email`"));

    let (_, body) = send(&app, "GET", "/api/users", None).await;
    assert_eq!(json_body(&body), json!([]));
}

#[tokio::test]
async fn test_create_rejects_malformed_json() {
    let (app, _db) = create_test_app().await;

    let (status, body) = post_raw(&app, Some("application/json"), r#"{"email":"#).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(!detail(&body).is_empty());
}

#[tokio::test]
async fn test_create_requires_json_content_type() {
    let (app, _db) = create_test_app().await;

    let (status, body) = post_raw(&app, None, r#"{"email":"a@x.com"}"#).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(detail(&body).contains("Content-Type"));

    let (_, body) = send(&app, "GET", "/api/users", None).await;
    assert_eq!(json_body(&body), json!([]));
}

#[tokio::test]
async fn test_non_numeric_id_is_bad_request() {
    let (app, _db) = create_test_app().await;

    let (status, _) = send(&app, "GET", "/api/users/abc", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}
