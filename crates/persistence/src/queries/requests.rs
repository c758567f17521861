// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Wanted-item request queries.

use diesel::SqliteConnection;
use diesel::prelude::*;
use shareit_domain::{ItemRequest, PageRequest};

use crate::data_models::decode_timestamp;
use crate::diesel_schema::item_requests;
use crate::error::PersistenceError;

/// Diesel Queryable struct for request rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = item_requests)]
struct ItemRequestRow {
    request_id: i64,
    description: String,
    requester_id: i64,
    created_at: String,
}

impl TryFrom<ItemRequestRow> for ItemRequest {
    type Error = PersistenceError;

    fn try_from(row: ItemRequestRow) -> Result<Self, Self::Error> {
        Ok(Self {
            request_id: row.request_id,
            description: row.description,
            requester_id: row.requester_id,
            created: decode_timestamp(&row.created_at)?,
        })
    }
}

fn into_requests(rows: Vec<ItemRequestRow>) -> Result<Vec<ItemRequest>, PersistenceError> {
    rows.into_iter().map(ItemRequest::try_from).collect()
}

/// Retrieves a request by ID.
///
/// # Errors
///
/// Returns an error if the database query fails or the row is malformed.
/// Returns `Ok(None)` if the request is not found.
pub fn get_request(
    conn: &mut SqliteConnection,
    request_id: i64,
) -> Result<Option<ItemRequest>, PersistenceError> {
    let row: Option<ItemRequestRow> = item_requests::table
        .find(request_id)
        .select(ItemRequestRow::as_select())
        .first(conn)
        .optional()?;

    row.map(ItemRequest::try_from).transpose()
}

/// Lists every request posted by a user, newest first.
///
/// # Errors
///
/// Returns an error if the database query fails or a row is malformed.
pub fn list_requests_by_requester(
    conn: &mut SqliteConnection,
    requester_id: i64,
) -> Result<Vec<ItemRequest>, PersistenceError> {
    let rows: Vec<ItemRequestRow> = item_requests::table
        .filter(item_requests::requester_id.eq(requester_id))
        .order((
            item_requests::created_at.desc(),
            item_requests::request_id.desc(),
        ))
        .select(ItemRequestRow::as_select())
        .load(conn)?;

    into_requests(rows)
}

/// Lists one page of requests posted by anyone other than `requester_id`,
/// newest first.
///
/// # Errors
///
/// Returns an error if the database query fails or a row is malformed.
pub fn list_requests_excluding(
    conn: &mut SqliteConnection,
    requester_id: i64,
    page: PageRequest,
) -> Result<Vec<ItemRequest>, PersistenceError> {
    let rows: Vec<ItemRequestRow> = item_requests::table
        .filter(item_requests::requester_id.ne(requester_id))
        .order((
            item_requests::created_at.desc(),
            item_requests::request_id.desc(),
        ))
        .offset(page.offset())
        .limit(page.limit())
        .select(ItemRequestRow::as_select())
        .load(conn)?;

    into_requests(rows)
}
