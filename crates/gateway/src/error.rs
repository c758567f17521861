// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Gateway error type.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use shareit_api::AuthError;
use shareit_domain::DomainError;
use thiserror::Error;
use tracing::{debug, error};

/// Error response body, identical to the server's.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error indicator.
    pub error: bool,
    /// Error message.
    pub message: String,
}

/// Errors raised by the gateway itself.
///
/// Errors returned by the server are not represented here; they are passed
/// through unchanged.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// A request failed validation and was not forwarded.
    #[error("{0}")]
    Invalid(String),
    /// The caller identity header is missing or malformed.
    #[error("{0}")]
    Unauthenticated(String),
    /// The server could not be reached or its reply could not be read.
    #[error("Upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),
    /// The upstream URL could not be built.
    #[error("Invalid upstream URL: {0}")]
    UpstreamUrl(String),
}

impl GatewayError {
    /// The HTTP status this error is reported with.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Invalid(_) => StatusCode::BAD_REQUEST,
            Self::Unauthenticated(_) => StatusCode::UNAUTHORIZED,
            Self::Upstream(_) | Self::UpstreamUrl(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl From<DomainError> for GatewayError {
    fn from(err: DomainError) -> Self {
        Self::Invalid(err.to_string())
    }
}

impl From<AuthError> for GatewayError {
    fn from(err: AuthError) -> Self {
        Self::Unauthenticated(err.to_string())
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status: StatusCode = self.status();
        if status.is_server_error() {
            error!(error = %self, "Upstream failure");
        } else {
            debug!(error = %self, "Rejected request");
        }
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.to_string(),
        });
        (status, body).into_response()
    }
}
