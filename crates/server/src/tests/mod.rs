// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod booking_tests;

use super::{AppState, build_router};
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::{Value, json};
use shareit_api::USER_ID_HEADER;
use shareit_domain::{current_timestamp, format_timestamp};
use shareit_persistence::Persistence;
use std::sync::Arc;
use time::Duration;
use tokio::sync::Mutex;
use tower::ServiceExt;

/// Helper to create test app state with in-memory persistence.
pub fn create_test_app_state() -> AppState {
    let persistence: Persistence =
        Persistence::new_in_memory().expect("Failed to create in-memory persistence");
    AppState {
        persistence: Arc::new(Mutex::new(persistence)),
    }
}

pub fn create_test_app() -> (AppState, Router) {
    let app_state: AppState = create_test_app_state();
    let app: Router = build_router(app_state.clone());
    (app_state, app)
}

/// Sends one request and decodes the JSON response body, if any.
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    user_id: Option<i64>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(user_id) = user_id {
        builder = builder.header(USER_ID_HEADER, user_id.to_string());
    }
    let body: Body = match body {
        Some(value) => {
            builder = builder.header("content-type", "application/json");
            Body::from(value.to_string())
        }
        None => Body::empty(),
    };

    send_request(app, builder.body(body).unwrap()).await
}

/// Sends a prebuilt request and decodes the JSON response body, if any.
pub async fn send_request(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status: StatusCode = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value: Value = if body_bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body_bytes).unwrap()
    };
    (status, value)
}

pub async fn create_user(app: &Router, name: &str) -> i64 {
    let (status, body) = send(
        app,
        "POST",
        "/users",
        None,
        Some(json!({"name": name, "email": format!("{}@example.com", name.to_lowercase())})),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    body["id"].as_i64().unwrap()
}

pub async fn create_item(app: &Router, owner_id: i64, name: &str) -> i64 {
    let (status, body) = send(
        app,
        "POST",
        "/items",
        Some(owner_id),
        Some(json!({"name": name, "description": format!("A {name}"), "available": true})),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    body["id"].as_i64().unwrap()
}

/// Renders the current time shifted by `hours` in wire form.
pub fn hours_from_now(hours: i64) -> String {
    format_timestamp(current_timestamp() + Duration::hours(hours)).unwrap()
}

pub fn assert_error(body: &Value, message: &str) {
    assert_eq!(body["error"], json!(true));
    assert_eq!(body["message"], json!(message));
}
