// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Presence and format checks applied before a request is forwarded.
//!
//! These checks never consult stored state. Everything that needs the store
//! (existence, ownership, uniqueness, booking status) is left to the server.

use axum::{
    body::Bytes,
    extract::{FromRequestParts, Path, Query},
    http::{Uri, request::Parts},
};
use serde::de::DeserializeOwned;
use shareit_api::{
    AuthenticatedUser, BookingListParams, CreateBookingRequest, CreateCommentRequest,
    CreateItemRequest, CreateItemRequestRequest, CreateUserRequest, DecisionParams, PageParams,
    USER_ID_HEADER, UpdateUserRequest, authenticate, parse_booking_state,
};
use shareit_domain::{
    PageRequest, validate_comment_text, validate_email, validate_item_description,
    validate_item_name, validate_request_description, validate_user_name,
};

use crate::error::GatewayError;

/// Extractor requiring a well-formed `X-Sharer-User-Id` header.
pub struct Caller(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for Caller
where
    S: Send + Sync,
{
    type Rejection = GatewayError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let raw: Option<&str> = parts
            .headers
            .get(USER_ID_HEADER)
            .map(|value| value.to_str().unwrap_or_default());
        Ok(Self(authenticate(raw)?))
    }
}

/// Extractor requiring the single path parameter to be an integer ID.
pub struct PathId(pub i64);

impl<S> FromRequestParts<S> for PathId
where
    S: Send + Sync,
{
    type Rejection = GatewayError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i64>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| GatewayError::Invalid(rejection.body_text()))?;
        Ok(Self(id))
    }
}

/// Decodes a JSON body for validation.
///
/// # Errors
///
/// Returns `GatewayError::Invalid` if the body is not the expected JSON.
pub fn parse_body<T: DeserializeOwned>(body: &Bytes) -> Result<T, GatewayError> {
    serde_json::from_slice(body)
        .map_err(|e| GatewayError::Invalid(format!("Malformed request body: {e}")))
}

/// Decodes the query string for validation.
///
/// # Errors
///
/// Returns `GatewayError::Invalid` if the query string does not decode.
pub fn parse_query<T: DeserializeOwned>(uri: &Uri) -> Result<T, GatewayError> {
    let Query(params) = Query::<T>::try_from_uri(uri)
        .map_err(|rejection| GatewayError::Invalid(rejection.body_text()))?;
    Ok(params)
}

fn required<'a>(value: Option<&'a str>) -> &'a str {
    value.unwrap_or_default()
}

/// Checks a user registration body.
///
/// # Errors
///
/// Returns an error if the name is blank or the email is malformed.
pub fn validate_create_user(request: &CreateUserRequest) -> Result<(), GatewayError> {
    validate_user_name(required(request.name.as_deref()))?;
    validate_email(required(request.email.as_deref()).trim())?;
    Ok(())
}

/// Checks a user update body. Only a supplied email is checked.
///
/// # Errors
///
/// Returns an error if a supplied email is malformed.
pub fn validate_update_user(request: &UpdateUserRequest) -> Result<(), GatewayError> {
    if let Some(email) = request.email.as_value() {
        validate_email(email.trim())?;
    }
    Ok(())
}

/// Checks an item listing body.
///
/// # Errors
///
/// Returns an error if the name or description is blank or availability is
/// missing.
pub fn validate_create_item(request: &CreateItemRequest) -> Result<(), GatewayError> {
    validate_item_name(required(request.name.as_deref()))?;
    validate_item_description(required(request.description.as_deref()))?;
    if request.available.is_none() {
        return Err(GatewayError::Invalid(String::from(
            "Item availability must be specified",
        )));
    }
    Ok(())
}

/// Checks a comment body.
///
/// # Errors
///
/// Returns an error if the text is blank.
pub fn validate_create_comment(request: &CreateCommentRequest) -> Result<(), GatewayError> {
    validate_comment_text(required(request.text.as_deref()))?;
    Ok(())
}

/// Checks a booking body.
///
/// Whether the window lies in the future is left to the server, which owns
/// the clock the booking is judged against.
///
/// # Errors
///
/// Returns an error if a field is missing or the start is not before the
/// end.
pub fn validate_create_booking(request: &CreateBookingRequest) -> Result<(), GatewayError> {
    if request.item_id.is_none() {
        return Err(GatewayError::Invalid(String::from(
            "Item id must be specified!",
        )));
    }
    let Some(start) = request.start else {
        return Err(GatewayError::Invalid(String::from(
            "Invalid start time of booking!",
        )));
    };
    let Some(end) = request.end else {
        return Err(GatewayError::Invalid(String::from(
            "Invalid end time of booking!",
        )));
    };
    if start >= end {
        return Err(GatewayError::Invalid(String::from(
            "Invalid end time of booking!",
        )));
    }
    Ok(())
}

/// Checks a wanted-item request body.
///
/// # Errors
///
/// Returns an error if the description is blank.
pub fn validate_create_request(request: &CreateItemRequestRequest) -> Result<(), GatewayError> {
    validate_request_description(required(request.description.as_deref()))?;
    Ok(())
}

/// Checks paging parameters against their bounds.
///
/// # Errors
///
/// Returns an error if `from` is negative or `size` is less than one.
pub fn validate_page(params: PageParams, default_size: i64) -> Result<PageRequest, GatewayError> {
    Ok(params.to_page(default_size)?)
}

/// Checks booking listing parameters.
///
/// # Errors
///
/// Returns an error if the state is unknown or the page is out of bounds.
pub fn validate_booking_list(
    params: &BookingListParams,
    default_size: i64,
) -> Result<(), GatewayError> {
    parse_booking_state(params.state.as_deref())
        .map_err(|e| GatewayError::Invalid(e.to_string()))?;
    validate_page(params.page_params(), default_size)?;
    Ok(())
}

/// Checks a booking decision.
///
/// # Errors
///
/// Returns an error if `approved` is missing.
pub fn validate_decision(params: DecisionParams) -> Result<(), GatewayError> {
    if params.approved.is_none() {
        return Err(GatewayError::Invalid(String::from(
            "Parameter approved must be specified!",
        )));
    }
    Ok(())
}
