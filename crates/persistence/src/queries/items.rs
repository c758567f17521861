// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Item catalog queries.

use diesel::SqliteConnection;
use diesel::prelude::*;
use shareit_domain::{Item, PageRequest};
use tracing::debug;

use crate::backend::sqlite::unicode_lower;
use crate::data_models::decode_flag;
use crate::diesel_schema::items;
use crate::error::PersistenceError;

/// Diesel Queryable struct for item rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = items)]
struct ItemRow {
    item_id: i64,
    name: String,
    description: String,
    is_available: i32,
    owner_id: i64,
    request_id: Option<i64>,
}

impl From<ItemRow> for Item {
    fn from(row: ItemRow) -> Self {
        Self {
            item_id: row.item_id,
            name: row.name,
            description: row.description,
            available: decode_flag(row.is_available),
            owner_id: row.owner_id,
            request_id: row.request_id,
        }
    }
}

/// Escapes `LIKE` wildcards so user text is matched literally.
fn like_pattern(text: &str) -> String {
    let mut escaped: String = String::with_capacity(text.len() + 2);
    escaped.push('%');
    for c in text.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}

/// Retrieves an item by ID.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the item is not found.
pub fn get_item(
    conn: &mut SqliteConnection,
    item_id: i64,
) -> Result<Option<Item>, PersistenceError> {
    debug!(item_id, "Looking up item");

    let row: Option<ItemRow> = items::table
        .find(item_id)
        .select(ItemRow::as_select())
        .first(conn)
        .optional()?;

    Ok(row.map(Item::from))
}

/// Retrieves the items with the given IDs. Unknown IDs are skipped.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn get_items_by_ids(
    conn: &mut SqliteConnection,
    item_ids: &[i64],
) -> Result<Vec<Item>, PersistenceError> {
    if item_ids.is_empty() {
        return Ok(Vec::new());
    }

    let rows: Vec<ItemRow> = items::table
        .filter(items::item_id.eq_any(item_ids.to_vec()))
        .order(items::item_id.asc())
        .select(ItemRow::as_select())
        .load(conn)?;

    Ok(rows.into_iter().map(Item::from).collect())
}

/// Lists one page of an owner's items, ordered by ID.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_items_by_owner(
    conn: &mut SqliteConnection,
    owner_id: i64,
    page: PageRequest,
) -> Result<Vec<Item>, PersistenceError> {
    let rows: Vec<ItemRow> = items::table
        .filter(items::owner_id.eq(owner_id))
        .order(items::item_id.asc())
        .offset(page.offset())
        .limit(page.limit())
        .select(ItemRow::as_select())
        .load(conn)?;

    Ok(rows.into_iter().map(Item::from).collect())
}

/// Searches available items whose name or description contains `text`.
///
/// Matching is case-insensitive over the full Unicode range: both sides
/// are lowercased with [`unicode_lower`] before the `LIKE`. Results are
/// ordered by ID.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn search_available_items(
    conn: &mut SqliteConnection,
    text: &str,
    page: PageRequest,
) -> Result<Vec<Item>, PersistenceError> {
    let pattern: String = like_pattern(&text.to_lowercase());
    debug!(pattern = %pattern, "Searching available items");

    let rows: Vec<ItemRow> = items::table
        .filter(items::is_available.eq(1))
        .filter(
            unicode_lower(items::name)
                .like(&pattern)
                .escape('\\')
                .or(unicode_lower(items::description)
                    .like(&pattern)
                    .escape('\\')),
        )
        .order(items::item_id.asc())
        .offset(page.offset())
        .limit(page.limit())
        .select(ItemRow::as_select())
        .load(conn)?;

    Ok(rows.into_iter().map(Item::from).collect())
}

/// Lists the items answering any of the given requests, ordered by ID.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_items_by_requests(
    conn: &mut SqliteConnection,
    request_ids: &[i64],
) -> Result<Vec<Item>, PersistenceError> {
    if request_ids.is_empty() {
        return Ok(Vec::new());
    }

    let rows: Vec<ItemRow> = items::table
        .filter(items::request_id.eq_any(request_ids.to_vec()))
        .order(items::item_id.asc())
        .select(ItemRow::as_select())
        .load(conn)?;

    Ok(rows.into_iter().map(Item::from).collect())
}
