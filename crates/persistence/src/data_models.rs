// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Insertable row shapes and column encodings shared by queries and mutations.

use diesel::prelude::*;
use shareit_domain::{BookingStatus, format_timestamp, parse_timestamp};
use time::PrimitiveDateTime;

use crate::diesel_schema::{bookings, comments, item_requests, items, users};
use crate::error::PersistenceError;

#[derive(Insertable)]
#[diesel(table_name = users)]
pub struct NewUserRow<'a> {
    pub name: &'a str,
    pub email: &'a str,
}

#[derive(Insertable)]
#[diesel(table_name = items)]
pub struct NewItemRow<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub is_available: i32,
    pub owner_id: i64,
    pub request_id: Option<i64>,
}

#[derive(Insertable)]
#[diesel(table_name = bookings)]
pub struct NewBookingRow<'a> {
    pub start_at: &'a str,
    pub end_at: &'a str,
    pub item_id: i64,
    pub booker_id: i64,
    pub status: &'static str,
}

#[derive(Insertable)]
#[diesel(table_name = comments)]
pub struct NewCommentRow<'a> {
    pub text: &'a str,
    pub author_id: i64,
    pub author_name: &'a str,
    pub item_id: i64,
    pub created_at: &'a str,
}

#[derive(Insertable)]
#[diesel(table_name = item_requests)]
pub struct NewItemRequestRow<'a> {
    pub description: &'a str,
    pub requester_id: i64,
    pub created_at: &'a str,
}

/// Encodes a timestamp column.
///
/// # Errors
///
/// Returns `PersistenceError::InvalidRow` if the value cannot be formatted.
pub fn encode_timestamp(value: PrimitiveDateTime) -> Result<String, PersistenceError> {
    format_timestamp(value).map_err(|e| PersistenceError::InvalidRow(e.to_string()))
}

/// Decodes a timestamp column.
///
/// # Errors
///
/// Returns `PersistenceError::InvalidRow` if the stored text is malformed.
pub fn decode_timestamp(value: &str) -> Result<PrimitiveDateTime, PersistenceError> {
    parse_timestamp(value).map_err(|e| PersistenceError::InvalidRow(e.to_string()))
}

/// Decodes a booking status column.
///
/// # Errors
///
/// Returns `PersistenceError::InvalidRow` if the stored text is unknown.
pub fn decode_status(value: &str) -> Result<BookingStatus, PersistenceError> {
    value
        .parse::<BookingStatus>()
        .map_err(|e| PersistenceError::InvalidRow(e.to_string()))
}

#[must_use]
pub fn encode_flag(value: bool) -> i32 {
    i32::from(value)
}

#[must_use]
pub const fn decode_flag(value: i32) -> bool {
    value != 0
}
