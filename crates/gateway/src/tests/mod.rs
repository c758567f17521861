// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]


use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use axum::{
    Json, Router,
    body::{Body, Bytes},
    extract::State as AxumState,
    http::{HeaderMap, Method, Request, StatusCode, Uri},
};
use reqwest::Url;
use serde_json::{Value, json};
use shareit_api::USER_ID_HEADER;
use tokio::net::TcpListener;
use tower::ServiceExt;

use crate::client::UpstreamClient;
use crate::{AppState, build_router};

/// State of the stub server standing in for the real one.
#[derive(Clone, Default)]
pub struct StubState {
    hits: Arc<AtomicUsize>,
}

impl StubState {
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

/// Echoes what was received. Paths ending in `/409` answer with a conflict.
async fn echo(
    AxumState(stub): AxumState<StubState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> (StatusCode, Json<Value>) {
    stub.hits.fetch_add(1, Ordering::SeqCst);
    if uri.path().ends_with("/409") {
        return (
            StatusCode::CONFLICT,
            Json(json!({"error": true, "message": "upstream says no"})),
        );
    }
    let body: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (
        StatusCode::OK,
        Json(json!({
            "method": method.as_str(),
            "path": uri.path(),
            "query": uri.query(),
            "user": headers.get(USER_ID_HEADER).and_then(|v| v.to_str().ok()),
            "body": body,
        })),
    )
}

pub async fn spawn_stub_upstream() -> (Url, StubState) {
    let stub: StubState = StubState::default();
    let app: Router = Router::new().fallback(echo).with_state(stub.clone());
    let listener: TcpListener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (Url::parse(&format!("http://{addr}")).unwrap(), stub)
}

/// Returns a URL nothing is listening on.
pub async fn unreachable_upstream() -> Url {
    let listener: TcpListener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    Url::parse(&format!("http://{addr}")).unwrap()
}

pub fn create_test_gateway(upstream: Url) -> Router {
    let client: UpstreamClient = UpstreamClient::new(upstream, Duration::from_secs(5)).unwrap();
    build_router(AppState {
        upstream: Arc::new(client),
    })
}

pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    user_id: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(user_id) = user_id {
        builder = builder.header(USER_ID_HEADER, user_id);
    }
    let body: Body = match body {
        Some(value) => {
            builder = builder.header("content-type", "application/json");
            Body::from(value.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
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
