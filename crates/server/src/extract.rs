// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Request extractors for the server.
//!
//! These wrap axum's own extractors so that every rejection is reported with
//! the standard JSON error body.

use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Path, Query, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use shareit_api::{ApiError, AuthenticatedUser, USER_ID_HEADER, authenticate};
use tracing::debug;

use crate::HttpError;

/// Extractor for the calling user.
///
/// Reads the `X-Sharer-User-Id` header. Whether the user exists is checked
/// by the operation itself.
///
/// # Errors
///
/// Rejects with HTTP 401 if the header is missing or not an integer.
pub struct SharerUser(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for SharerUser
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let raw: Option<&str> = parts
            .headers
            .get(USER_ID_HEADER)
            .map(|value| value.to_str().unwrap_or_default());

        let user: AuthenticatedUser = authenticate(raw).map_err(|e| {
            debug!(error = %e, "Caller identification failed");
            HttpError::from(ApiError::from(e))
        })?;
        Ok(Self(user))
    }
}

/// JSON body extractor that reports decoding failures as HTTP 400.
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| HttpError::bad_request(rejection.body_text()))?;
        Ok(Self(value))
    }
}

/// Query string extractor that reports decoding failures as HTTP 400.
pub struct QueryParams<T>(pub T);

impl<T, S> FromRequestParts<S> for QueryParams<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| HttpError::bad_request(rejection.body_text()))?;
        Ok(Self(value))
    }
}

/// Path parameter extractor that reports decoding failures as HTTP 400.
pub struct PathParam<T>(pub T);

impl<T, S> FromRequestParts<S> for PathParam<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| HttpError::bad_request(rejection.body_text()))?;
        Ok(Self(value))
    }
}
