//! In-process stand-in for a PostgREST `items` table.
//!
//! Supports exactly the dialect the storage adapter speaks: `eq.` filters,
//! `order=created_at.desc`, `Prefer: return=representation`, and the
//! `apikey` header. Rows live in memory; ids are uuids and `created_at`
//! advances one second per insert so ordering is strict.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::Json;
use axum::Router;
use axum::extract::{Query, State};
use axum::http::{HeaderMap, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::any;
use chrono::{Duration, TimeZone, Utc};
use serde_json::{Map, Value, json};

type Row = Map<String, Value>;

/// Shared state of the fake store.
pub struct FakeTable {
    api_key: String,
    rows: Mutex<Vec<Row>>,
    requests: Mutex<usize>,
}

impl FakeTable {
    /// Number of rows currently stored.
    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    /// Number of requests that reached the store.
    pub fn requests(&self) -> usize {
        *self.requests.lock().unwrap()
    }
}

/// Start the fake store on an ephemeral port and return its base URL.
pub async fn start(api_key: &str) -> (String, Arc<FakeTable>) {
    let table = Arc::new(FakeTable {
        api_key: api_key.to_string(),
        rows: Mutex::new(Vec::new()),
        requests: Mutex::new(0),
    });
    let app = Router::new()
        .route("/rest/v1/items", any(handle))
        .with_state(Arc::clone(&table));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}"), table)
}

fn error(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(json!({ "code": null, "details": null, "hint": null, "message": message })),
    )
        .into_response()
}

fn cell_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn matches(row: &Row, filters: &[(String, String)]) -> bool {
    filters.iter().all(|(column, expected)| {
        row.get(column)
            .is_some_and(|value| &cell_text(value) == expected)
    })
}

async fn handle(
    State(table): State<Arc<FakeTable>>,
    method: Method,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
    body: axum::body::Bytes,
) -> Response {
    *table.requests.lock().unwrap() += 1;

    if headers.get("apikey").and_then(|v| v.to_str().ok()) != Some(table.api_key.as_str()) {
        return error(StatusCode::UNAUTHORIZED, "Invalid API key");
    }

    let mut filters = Vec::new();
    for (column, value) in &params {
        if column == "select" || column == "order" {
            continue;
        }
        match value.strip_prefix("eq.") {
            Some(expected) => filters.push((column.clone(), expected.to_string())),
            None => return error(StatusCode::BAD_REQUEST, "unsupported operator"),
        }
    }

    let mut rows = table.rows.lock().unwrap();
    match method {
        Method::GET => {
            let mut found: Vec<Row> = rows.iter().filter(|r| matches(r, &filters)).cloned().collect();
            if params.get("order").map(String::as_str) == Some("created_at.desc") {
                found.sort_by(|a, b| cell_text(&b["created_at"]).cmp(&cell_text(&a["created_at"])));
            }
            Json(found).into_response()
        }
        Method::POST => {
            let Ok(inserted) = serde_json::from_slice::<Vec<Row>>(&body) else {
                return error(StatusCode::BAD_REQUEST, "malformed insert body");
            };
            let mut created = Vec::new();
            for mut row in inserted {
                let seq = i64::try_from(rows.len()).unwrap();
                let created_at =
                    Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap() + Duration::seconds(seq);
                row.insert("id".into(), json!(uuid::Uuid::new_v4().to_string()));
                row.insert("created_at".into(), json!(created_at.to_rfc3339()));
                rows.push(row.clone());
                created.push(row);
            }
            (StatusCode::CREATED, Json(created)).into_response()
        }
        Method::PATCH => {
            let Ok(changes) = serde_json::from_slice::<Row>(&body) else {
                return error(StatusCode::BAD_REQUEST, "malformed update body");
            };
            let mut updated = Vec::new();
            for row in rows.iter_mut().filter(|r| matches(r, &filters)) {
                for (column, value) in &changes {
                    row.insert(column.clone(), value.clone());
                }
                updated.push(row.clone());
            }
            Json(updated).into_response()
        }
        Method::DELETE => {
            rows.retain(|r| !matches(r, &filters));
            StatusCode::NO_CONTENT.into_response()
        }
        _ => error(StatusCode::METHOD_NOT_ALLOWED, "method not allowed"),
    }
}
