// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod client;
mod error;
mod validation;

use std::sync::Arc;
use std::time::Duration;

use axum::{
    Router,
    body::Bytes,
    extract::State as AxumState,
    http::{HeaderMap, Method, Uri},
    routing::{get, post},
};
use clap::Parser;
use reqwest::Url;
use shareit_api::{
    BookingListParams, CreateBookingRequest, CreateCommentRequest, CreateItemRequest,
    CreateItemRequestRequest, CreateUserRequest, DEFAULT_BOOKINGS_PAGE_SIZE,
    DEFAULT_ITEMS_PAGE_SIZE, DEFAULT_REQUESTS_PAGE_SIZE, DEFAULT_SEARCH_PAGE_SIZE,
    DecisionParams, PageParams, SearchParams, UpdateItemRequest, UpdateUserRequest,
};
use tracing::info;

use crate::client::{UpstreamClient, UpstreamResponse};
use crate::error::GatewayError;
use crate::validation::{
    Caller, PathId, parse_body, parse_query, validate_booking_list, validate_create_booking,
    validate_create_comment, validate_create_item, validate_create_request, validate_create_user,
    validate_decision, validate_page, validate_update_user,
};

/// `ShareIt` Gateway - validating HTTP front for the `ShareIt` server
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Address to bind the gateway to
    #[arg(long, env = "SHAREIT_GATEWAY_HOST", default_value = "127.0.0.1")]
    host: String,

    /// Port to bind the gateway to
    #[arg(short, long, env = "SHAREIT_GATEWAY_PORT", default_value_t = 8080)]
    port: u16,

    /// Base URL of the `ShareIt` server
    #[arg(
        long,
        env = "SHAREIT_SERVER_URL",
        default_value = "http://127.0.0.1:9090"
    )]
    server_url: String,

    /// Upstream request timeout in seconds
    #[arg(long, env = "SHAREIT_GATEWAY_TIMEOUT_SECS", default_value_t = 30)]
    timeout_secs: u64,
}

/// Application state shared across handlers.
#[derive(Clone)]
struct AppState {
    upstream: Arc<UpstreamClient>,
}

type GatewayResult = Result<UpstreamResponse, GatewayError>;

// ========================================================================
// Pass-through handlers
// ========================================================================

/// Forwards a request that needs no checks.
async fn handle_forward(
    AxumState(app_state): AxumState<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> GatewayResult {
    app_state.upstream.forward(method, &uri, &headers, body).await
}

/// Forwards a request addressed by a numeric ID.
async fn handle_forward_by_id(
    AxumState(app_state): AxumState<AppState>,
    PathId(_): PathId,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> GatewayResult {
    app_state.upstream.forward(method, &uri, &headers, body).await
}

/// Forwards a request that only needs a caller identity.
async fn handle_forward_identified(
    AxumState(app_state): AxumState<AppState>,
    Caller(_): Caller,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> GatewayResult {
    app_state.upstream.forward(method, &uri, &headers, body).await
}

/// Forwards a request that needs a caller identity and a numeric ID.
async fn handle_forward_identified_by_id(
    AxumState(app_state): AxumState<AppState>,
    Caller(_): Caller,
    PathId(_): PathId,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> GatewayResult {
    app_state.upstream.forward(method, &uri, &headers, body).await
}

// ========================================================================
// Validating handlers
// ========================================================================

/// Handler for POST /users endpoint.
async fn handle_create_user(
    AxumState(app_state): AxumState<AppState>,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> GatewayResult {
    validate_create_user(&parse_body::<CreateUserRequest>(&body)?)?;
    app_state
        .upstream
        .forward(Method::POST, &uri, &headers, body)
        .await
}

/// Handler for PATCH /users/{user_id} endpoint.
async fn handle_update_user(
    AxumState(app_state): AxumState<AppState>,
    PathId(_): PathId,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> GatewayResult {
    validate_update_user(&parse_body::<UpdateUserRequest>(&body)?)?;
    app_state
        .upstream
        .forward(Method::PATCH, &uri, &headers, body)
        .await
}

/// Handler for POST /items endpoint.
async fn handle_create_item(
    AxumState(app_state): AxumState<AppState>,
    Caller(_): Caller,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> GatewayResult {
    validate_create_item(&parse_body::<CreateItemRequest>(&body)?)?;
    app_state
        .upstream
        .forward(Method::POST, &uri, &headers, body)
        .await
}

/// Handler for GET /items endpoint.
async fn handle_list_owner_items(
    AxumState(app_state): AxumState<AppState>,
    Caller(_): Caller,
    uri: Uri,
    headers: HeaderMap,
) -> GatewayResult {
    validate_page(parse_query::<PageParams>(&uri)?, DEFAULT_ITEMS_PAGE_SIZE)?;
    app_state
        .upstream
        .forward(Method::GET, &uri, &headers, Bytes::new())
        .await
}

/// Handler for GET /items/search endpoint.
async fn handle_search_items(
    AxumState(app_state): AxumState<AppState>,
    uri: Uri,
    headers: HeaderMap,
) -> GatewayResult {
    let params: SearchParams = parse_query(&uri)?;
    validate_page(params.page_params(), DEFAULT_SEARCH_PAGE_SIZE)?;
    app_state
        .upstream
        .forward(Method::GET, &uri, &headers, Bytes::new())
        .await
}

/// Handler for PATCH /items/{item_id} endpoint.
async fn handle_update_item(
    AxumState(app_state): AxumState<AppState>,
    Caller(_): Caller,
    PathId(_): PathId,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> GatewayResult {
    parse_body::<UpdateItemRequest>(&body)?;
    app_state
        .upstream
        .forward(Method::PATCH, &uri, &headers, body)
        .await
}

/// Handler for POST /items/{item_id}/comment endpoint.
async fn handle_add_comment(
    AxumState(app_state): AxumState<AppState>,
    Caller(_): Caller,
    PathId(_): PathId,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> GatewayResult {
    validate_create_comment(&parse_body::<CreateCommentRequest>(&body)?)?;
    app_state
        .upstream
        .forward(Method::POST, &uri, &headers, body)
        .await
}

/// Handler for POST /bookings endpoint.
async fn handle_create_booking(
    AxumState(app_state): AxumState<AppState>,
    Caller(_): Caller,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> GatewayResult {
    validate_create_booking(&parse_body::<CreateBookingRequest>(&body)?)?;
    app_state
        .upstream
        .forward(Method::POST, &uri, &headers, body)
        .await
}

/// Handler for PATCH /bookings/{booking_id} endpoint.
async fn handle_decide_booking(
    AxumState(app_state): AxumState<AppState>,
    Caller(_): Caller,
    PathId(_): PathId,
    uri: Uri,
    headers: HeaderMap,
) -> GatewayResult {
    validate_decision(parse_query::<DecisionParams>(&uri)?)?;
    app_state
        .upstream
        .forward(Method::PATCH, &uri, &headers, Bytes::new())
        .await
}

/// Handler for GET /bookings and GET /bookings/owner endpoints.
async fn handle_list_bookings(
    AxumState(app_state): AxumState<AppState>,
    Caller(_): Caller,
    uri: Uri,
    headers: HeaderMap,
) -> GatewayResult {
    validate_booking_list(
        &parse_query::<BookingListParams>(&uri)?,
        DEFAULT_BOOKINGS_PAGE_SIZE,
    )?;
    app_state
        .upstream
        .forward(Method::GET, &uri, &headers, Bytes::new())
        .await
}

/// Handler for POST /requests endpoint.
async fn handle_create_request(
    AxumState(app_state): AxumState<AppState>,
    Caller(_): Caller,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> GatewayResult {
    validate_create_request(&parse_body::<CreateItemRequestRequest>(&body)?)?;
    app_state
        .upstream
        .forward(Method::POST, &uri, &headers, body)
        .await
}

/// Handler for GET /requests/all endpoint.
async fn handle_list_other_requests(
    AxumState(app_state): AxumState<AppState>,
    Caller(_): Caller,
    uri: Uri,
    headers: HeaderMap,
) -> GatewayResult {
    validate_page(parse_query::<PageParams>(&uri)?, DEFAULT_REQUESTS_PAGE_SIZE)?;
    app_state
        .upstream
        .forward(Method::GET, &uri, &headers, Bytes::new())
        .await
}

fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/users", post(handle_create_user).get(handle_forward))
        .route(
            "/users/{user_id}",
            get(handle_forward_by_id)
                .patch(handle_update_user)
                .delete(handle_forward_by_id),
        )
        .route(
            "/items",
            post(handle_create_item).get(handle_list_owner_items),
        )
        .route("/items/search", get(handle_search_items))
        .route(
            "/items/{item_id}",
            get(handle_forward_identified_by_id).patch(handle_update_item),
        )
        .route("/items/{item_id}/comment", post(handle_add_comment))
        .route(
            "/bookings",
            post(handle_create_booking).get(handle_list_bookings),
        )
        .route("/bookings/owner", get(handle_list_bookings))
        .route(
            "/bookings/{booking_id}",
            get(handle_forward_identified_by_id).patch(handle_decide_booking),
        )
        .route(
            "/requests",
            post(handle_create_request).get(handle_forward_identified),
        )
        .route("/requests/all", get(handle_list_other_requests))
        .route(
            "/requests/{request_id}",
            get(handle_forward_identified_by_id),
        )
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing ShareIt Gateway");

    let server_url: Url = Url::parse(&args.server_url)?;
    let upstream: UpstreamClient =
        UpstreamClient::new(server_url.clone(), Duration::from_secs(args.timeout_secs))?;
    info!("Forwarding to {}", server_url);

    let app_state: AppState = AppState {
        upstream: Arc::new(upstream),
    };
    let app: Router = build_router(app_state);

    let addr: std::net::SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    info!("Gateway listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests;
