//! End-to-end smoke tests for the full shoewashd stack.
//!
//! Each test spins up the complete application (real PostgREST repository,
//! real service, real axum router) against an in-process fake store, and
//! exercises the HTTP layer via `tower::ServiceExt::oneshot`; the router
//! itself binds no TCP port.

mod common;

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use shoewash_adapter_http_axum::router;
use shoewash_adapter_http_axum::state::AppState;
use shoewash_adapter_storage_postgrest::{Config, PostgrestItemRepository};
use shoewash_app::services::item_service::ItemService;
use shoewash_domain::item::INITIAL_STATUS;
use tower::ServiceExt;

use common::FakeTable;

const API_KEY: &str = "test-anon-key";

/// Build a fully-wired router backed by a fresh fake store.
async fn app() -> (axum::Router, Arc<FakeTable>) {
    app_with_key(API_KEY).await
}

async fn app_with_key(key: &str) -> (axum::Router, Arc<FakeTable>) {
    let (url, table) = common::start(API_KEY).await;
    let client = Config {
        url,
        key: key.to_string(),
        ..Config::default()
    }
    .build()
    .expect("store client should initialise");

    let state = AppState::new(ItemService::new(PostgrestItemRepository::new(client)));
    (router::build(state), table)
}

async fn call(
    app: &axum::Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let resp = app.clone().oneshot(request).await.unwrap();
    let status = resp.status();
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

async fn create(app: &axum::Router, customer_name: &str, service_type: &str) -> Value {
    let (status, body) = call(
        app,
        Method::POST,
        "/items",
        Some(json!({ "customer_name": customer_name, "service_type": service_type })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body
}

fn item_uri(item: &Value) -> String {
    format!("/items/{}", item["id"].as_str().unwrap())
}

// ---------------------------------------------------------------------------
// Liveness
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_serve_liveness_banner() {
    let (app, table) = app().await;
    let resp = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(body, router::LIVENESS_MESSAGE.as_bytes());
    assert_eq!(table.requests(), 0);
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_create_item_and_read_it_back_identically() {
    let (app, _) = app().await;
    let (status, created) = call(
        &app,
        Method::POST,
        "/items",
        Some(json!({
            "customer_name": "A",
            "service_type": "Wash",
            "status": "Done",
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["status"], INITIAL_STATUS);
    assert!(!created["id"].as_str().unwrap().is_empty());
    assert!(created["created_at"].is_string());
    assert!(created["shoe_type"].is_null());

    let (status, fetched) = call(&app, Method::GET, &item_uri(&created), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn should_reject_invalid_create_without_reaching_store() {
    let (app, table) = app().await;

    let (status, body) = call(
        &app,
        Method::POST,
        "/items",
        Some(json!({ "customer_name": "", "service_type": "Wash" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    let (status, _) = call(
        &app,
        Method::POST,
        "/items",
        Some(json!({ "service_type": "Wash" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    assert_eq!(table.requests(), 0);
    assert_eq!(table.len(), 0);
}

// ---------------------------------------------------------------------------
// List
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_list_newest_first_and_filter_exactly() {
    let (app, _) = app().await;
    create(&app, "A", "Wash").await;
    let second = create(&app, "B", "Repaint").await;
    create(&app, "C", "Wash").await;

    call(
        &app,
        Method::PUT,
        &item_uri(&second),
        Some(json!({ "status": "In Progress" })),
    )
    .await;

    let (status, body) = call(&app, Method::GET, "/items", None).await;
    assert_eq!(status, StatusCode::OK);
    let items = body.as_array().unwrap();
    let names: Vec<&str> = items
        .iter()
        .map(|i| i["customer_name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["C", "B", "A"]);
    assert!(items.windows(2).all(|w| {
        w[0]["created_at"].as_str().unwrap() > w[1]["created_at"].as_str().unwrap()
    }));

    let (_, body) = call(&app, Method::GET, "/items?status=In%20Progress", None).await;
    let filtered = body.as_array().unwrap();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0]["customer_name"], "B");

    let (_, body) = call(&app, Method::GET, "/items?status=in%20progress", None).await;
    assert!(body.as_array().unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// Get / update / delete
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_not_found_for_unknown_id() {
    let (app, _) = app().await;
    let (status, body) = call(
        &app,
        Method::GET,
        "/items/6f1c2a9e-0000-4000-8000-000000000000",
        None,
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Item not found" }));
}

#[tokio::test]
async fn should_update_only_targeted_fields() {
    let (app, _) = app().await;
    let created = create(&app, "A", "Wash").await;

    let (status, updated) = call(
        &app,
        Method::PUT,
        &item_uri(&created),
        Some(json!({ "status": "Done", "shoe_type": "Boots" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["status"], "Done");
    assert_eq!(updated["shoe_type"], "Boots");
    assert_eq!(updated["customer_name"], "A");
    assert_eq!(updated["service_type"], "Wash");
    assert_eq!(updated["id"], created["id"]);
    assert_eq!(updated["created_at"], created["created_at"]);
}

#[tokio::test]
async fn should_return_existing_item_for_empty_update() {
    let (app, _) = app().await;
    let created = create(&app, "A", "Wash").await;

    let (status, body) = call(&app, Method::PUT, &item_uri(&created), Some(json!({}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, created);
}

#[tokio::test]
async fn should_not_create_row_when_updating_unknown_id() {
    let (app, table) = app().await;
    let (status, body) = call(
        &app,
        Method::PUT,
        "/items/6f1c2a9e-0000-4000-8000-000000000000",
        Some(json!({ "status": "Done" })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Item not found" }));
    assert_eq!(table.len(), 0);
}

#[tokio::test]
async fn should_delete_idempotently_then_report_not_found() {
    let (app, table) = app().await;
    let created = create(&app, "A", "Wash").await;
    let uri = item_uri(&created);

    let (status, body) = call(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Item deleted successfully" }));
    assert_eq!(table.len(), 0);

    let (status, _) = call(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = call(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Item deleted successfully" }));
}

// ---------------------------------------------------------------------------
// Store failures
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_surface_store_rejection_as_internal_error() {
    let (app, _) = app_with_key("wrong-key").await;

    let (status, body) = call(&app, Method::GET, "/items", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Invalid API key" }));

    let (status, body) = call(
        &app,
        Method::POST,
        "/items",
        Some(json!({ "customer_name": "A", "service_type": "Wash" })),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Invalid API key" }));
}
