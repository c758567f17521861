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

mod extract;

use axum::{
    Json, Router,
    extract::State as AxumState,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use shareit_api::{
    ApiError, BookingListParams, BookingResponse, CommentResponse, CreateBookingRequest,
    CreateCommentRequest, CreateItemRequest, CreateItemRequestRequest, CreateUserRequest,
    DecisionParams, ItemRequestResponse, ItemResponse, PageParams, SearchParams,
    UpdateItemRequest, UpdateUserRequest, UserResponse,
};
use shareit_domain::current_timestamp;
use shareit_persistence::{Persistence, PersistenceError};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info};

use crate::extract::{JsonBody, PathParam, QueryParams, SharerUser};

/// `ShareIt` Server - HTTP server for the item-sharing marketplace
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long, env = "SHAREIT_DATABASE")]
    database: Option<String>,

    /// Address to bind the server to
    #[arg(long, env = "SHAREIT_HOST", default_value = "127.0.0.1")]
    host: String,

    /// Port to bind the server to
    #[arg(short, long, env = "SHAREIT_PORT", default_value_t = 9090)]
    port: u16,
}

/// Application state shared across handlers.
///
/// Every operation runs while holding the lock, so each request is one
/// serialised unit of work against the store.
#[derive(Clone)]
struct AppState {
    persistence: Arc<Mutex<Persistence>>,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
#[derive(Debug)]
pub struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl HttpError {
    /// A 400 response with the given message.
    const fn bad_request(message: String) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message,
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let status: StatusCode = match &err {
            ApiError::AuthenticationFailed { .. } => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden { .. } => StatusCode::FORBIDDEN,
            ApiError::DomainRuleViolation { .. } => StatusCode::CONFLICT,
            ApiError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            ApiError::ResourceNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Internal { message } => {
                error!(message = %message, "Internal error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl From<PersistenceError> for HttpError {
    fn from(err: PersistenceError) -> Self {
        Self::from(ApiError::from(err))
    }
}

// ========================================================================
// Users
// ========================================================================

/// Handler for POST /users endpoint.
async fn handle_create_user(
    AxumState(app_state): AxumState<AppState>,
    JsonBody(req): JsonBody<CreateUserRequest>,
) -> Result<Json<UserResponse>, HttpError> {
    info!("Handling create_user request");
    let mut persistence = app_state.persistence.lock().await;
    let user: UserResponse = shareit_api::register_user(&mut persistence, req)?;
    Ok(Json(user))
}

/// Handler for GET /users endpoint.
async fn handle_list_users(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<Vec<UserResponse>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(shareit_api::list_users(&mut persistence)?))
}

/// Handler for GET /users/{user_id} endpoint.
async fn handle_get_user(
    AxumState(app_state): AxumState<AppState>,
    PathParam(user_id): PathParam<i64>,
) -> Result<Json<UserResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(shareit_api::get_user(&mut persistence, user_id)?))
}

/// Handler for PATCH /users/{user_id} endpoint.
async fn handle_update_user(
    AxumState(app_state): AxumState<AppState>,
    PathParam(user_id): PathParam<i64>,
    JsonBody(req): JsonBody<UpdateUserRequest>,
) -> Result<Json<UserResponse>, HttpError> {
    info!(user_id, "Handling update_user request");
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(shareit_api::update_user(
        &mut persistence,
        user_id,
        req,
    )?))
}

/// Handler for DELETE /users/{user_id} endpoint.
async fn handle_delete_user(
    AxumState(app_state): AxumState<AppState>,
    PathParam(user_id): PathParam<i64>,
) -> Result<StatusCode, HttpError> {
    info!(user_id, "Handling delete_user request");
    let mut persistence = app_state.persistence.lock().await;
    shareit_api::delete_user(&mut persistence, user_id)?;
    Ok(StatusCode::OK)
}

// ========================================================================
// Items
// ========================================================================

/// Handler for POST /items endpoint.
async fn handle_create_item(
    AxumState(app_state): AxumState<AppState>,
    SharerUser(user): SharerUser,
    JsonBody(req): JsonBody<CreateItemRequest>,
) -> Result<Json<ItemResponse>, HttpError> {
    info!(user_id = user.user_id, "Handling create_item request");
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(shareit_api::create_item(&mut persistence, &user, req)?))
}

/// Handler for GET /items endpoint: the caller's own items.
async fn handle_list_owner_items(
    AxumState(app_state): AxumState<AppState>,
    SharerUser(user): SharerUser,
    QueryParams(params): QueryParams<PageParams>,
) -> Result<Json<Vec<ItemResponse>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(shareit_api::list_owner_items(
        &mut persistence,
        &user,
        params,
        current_timestamp(),
    )?))
}

/// Handler for GET /items/search endpoint.
async fn handle_search_items(
    AxumState(app_state): AxumState<AppState>,
    QueryParams(params): QueryParams<SearchParams>,
) -> Result<Json<Vec<ItemResponse>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(shareit_api::search_items(
        &mut persistence,
        &params,
        current_timestamp(),
    )?))
}

/// Handler for GET /items/{item_id} endpoint.
async fn handle_get_item(
    AxumState(app_state): AxumState<AppState>,
    SharerUser(user): SharerUser,
    PathParam(item_id): PathParam<i64>,
) -> Result<Json<ItemResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(shareit_api::get_item(
        &mut persistence,
        &user,
        item_id,
        current_timestamp(),
    )?))
}

/// Handler for PATCH /items/{item_id} endpoint.
async fn handle_update_item(
    AxumState(app_state): AxumState<AppState>,
    SharerUser(user): SharerUser,
    PathParam(item_id): PathParam<i64>,
    JsonBody(req): JsonBody<UpdateItemRequest>,
) -> Result<Json<ItemResponse>, HttpError> {
    info!(user_id = user.user_id, item_id, "Handling update_item request");
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(shareit_api::update_item(
        &mut persistence,
        &user,
        item_id,
        req,
        current_timestamp(),
    )?))
}

/// Handler for POST /items/{item_id}/comment endpoint.
async fn handle_add_comment(
    AxumState(app_state): AxumState<AppState>,
    SharerUser(user): SharerUser,
    PathParam(item_id): PathParam<i64>,
    JsonBody(req): JsonBody<CreateCommentRequest>,
) -> Result<Json<CommentResponse>, HttpError> {
    info!(user_id = user.user_id, item_id, "Handling add_comment request");
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(shareit_api::add_comment(
        &mut persistence,
        &user,
        item_id,
        req,
        current_timestamp(),
    )?))
}

// ========================================================================
// Bookings
// ========================================================================

/// Handler for POST /bookings endpoint.
async fn handle_create_booking(
    AxumState(app_state): AxumState<AppState>,
    SharerUser(user): SharerUser,
    JsonBody(req): JsonBody<CreateBookingRequest>,
) -> Result<Json<BookingResponse>, HttpError> {
    info!(user_id = user.user_id, "Handling create_booking request");
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(shareit_api::create_booking(
        &mut persistence,
        &user,
        req,
        current_timestamp(),
    )?))
}

/// Handler for PATCH /bookings/{booking_id} endpoint.
async fn handle_decide_booking(
    AxumState(app_state): AxumState<AppState>,
    SharerUser(user): SharerUser,
    PathParam(booking_id): PathParam<i64>,
    QueryParams(params): QueryParams<DecisionParams>,
) -> Result<Json<BookingResponse>, HttpError> {
    info!(
        user_id = user.user_id,
        booking_id,
        approved = ?params.approved,
        "Handling decide_booking request"
    );
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(shareit_api::decide_booking(
        &mut persistence,
        &user,
        booking_id,
        params,
    )?))
}

/// Handler for GET /bookings/{booking_id} endpoint.
async fn handle_get_booking(
    AxumState(app_state): AxumState<AppState>,
    SharerUser(user): SharerUser,
    PathParam(booking_id): PathParam<i64>,
) -> Result<Json<BookingResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(shareit_api::get_booking(
        &mut persistence,
        &user,
        booking_id,
    )?))
}

/// Handler for GET /bookings endpoint: bookings made by the caller.
async fn handle_list_booker_bookings(
    AxumState(app_state): AxumState<AppState>,
    SharerUser(user): SharerUser,
    QueryParams(params): QueryParams<BookingListParams>,
) -> Result<Json<Vec<BookingResponse>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(shareit_api::list_bookings_for_booker(
        &mut persistence,
        &user,
        &params,
        current_timestamp(),
    )?))
}

/// Handler for GET /bookings/owner endpoint: bookings of the caller's items.
async fn handle_list_owner_bookings(
    AxumState(app_state): AxumState<AppState>,
    SharerUser(user): SharerUser,
    QueryParams(params): QueryParams<BookingListParams>,
) -> Result<Json<Vec<BookingResponse>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(shareit_api::list_bookings_for_owner(
        &mut persistence,
        &user,
        &params,
        current_timestamp(),
    )?))
}

// ========================================================================
// Requests
// ========================================================================

/// Handler for POST /requests endpoint.
async fn handle_create_request(
    AxumState(app_state): AxumState<AppState>,
    SharerUser(user): SharerUser,
    JsonBody(req): JsonBody<CreateItemRequestRequest>,
) -> Result<Json<ItemRequestResponse>, HttpError> {
    info!(user_id = user.user_id, "Handling create_request request");
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(shareit_api::create_request(
        &mut persistence,
        &user,
        req,
        current_timestamp(),
    )?))
}

/// Handler for GET /requests endpoint: the caller's own requests.
async fn handle_list_own_requests(
    AxumState(app_state): AxumState<AppState>,
    SharerUser(user): SharerUser,
) -> Result<Json<Vec<ItemRequestResponse>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(shareit_api::list_own_requests(&mut persistence, &user)?))
}

/// Handler for GET /requests/all endpoint: other users' requests.
async fn handle_list_other_requests(
    AxumState(app_state): AxumState<AppState>,
    SharerUser(user): SharerUser,
    QueryParams(params): QueryParams<PageParams>,
) -> Result<Json<Vec<ItemRequestResponse>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(shareit_api::list_other_requests(
        &mut persistence,
        &user,
        params,
    )?))
}

/// Handler for GET /requests/{request_id} endpoint.
async fn handle_get_request(
    AxumState(app_state): AxumState<AppState>,
    SharerUser(user): SharerUser,
    PathParam(request_id): PathParam<i64>,
) -> Result<Json<ItemRequestResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(shareit_api::get_request(
        &mut persistence,
        &user,
        request_id,
    )?))
}

fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/users", post(handle_create_user).get(handle_list_users))
        .route(
            "/users/{user_id}",
            get(handle_get_user)
                .patch(handle_update_user)
                .delete(handle_delete_user),
        )
        .route("/items", post(handle_create_item).get(handle_list_owner_items))
        .route("/items/search", get(handle_search_items))
        .route(
            "/items/{item_id}",
            get(handle_get_item).patch(handle_update_item),
        )
        .route("/items/{item_id}/comment", post(handle_add_comment))
        .route(
            "/bookings",
            post(handle_create_booking).get(handle_list_booker_bookings),
        )
        .route("/bookings/owner", get(handle_list_owner_bookings))
        .route(
            "/bookings/{booking_id}",
            get(handle_get_booking).patch(handle_decide_booking),
        )
        .route(
            "/requests",
            post(handle_create_request).get(handle_list_own_requests),
        )
        .route("/requests/all", get(handle_list_other_requests))
        .route("/requests/{request_id}", get(handle_get_request))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing ShareIt Server");

    // Initialize persistence (in-memory or file-based based on CLI argument)
    let persistence: Persistence = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        Persistence::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        Persistence::new_in_memory()?
    };

    let app_state: AppState = AppState {
        persistence: Arc::new(Mutex::new(persistence)),
    };

    let app: Router = build_router(app_state);

    let addr: std::net::SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests;
