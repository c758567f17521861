// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use shareit_domain::Item;
use tracing::info;

use crate::backend::PersistenceBackend;
use crate::data_models::{NewItemRow, encode_flag};
use crate::diesel_schema::items;
use crate::error::PersistenceError;

/// Creates a new item.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `name` - The item name
/// * `description` - The item description
/// * `available` - Whether the item can be booked
/// * `owner_id` - The owning user
/// * `request_id` - The request this listing answers, if any
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn create_item(
    conn: &mut SqliteConnection,
    name: &str,
    description: &str,
    available: bool,
    owner_id: i64,
    request_id: Option<i64>,
) -> Result<i64, PersistenceError> {
    diesel::insert_into(items::table)
        .values(&NewItemRow {
            name,
            description,
            is_available: encode_flag(available),
            owner_id,
            request_id,
        })
        .execute(conn)?;

    let item_id: i64 = conn.get_last_insert_rowid()?;

    info!(item_id, owner_id, "Item created");
    Ok(item_id)
}

/// Writes an item's mutable fields.
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if the item is gone, or another
/// error if the update fails.
pub fn update_item(conn: &mut SqliteConnection, item: &Item) -> Result<(), PersistenceError> {
    let updated: usize = diesel::update(items::table.find(item.item_id))
        .set((
            items::name.eq(&item.name),
            items::description.eq(&item.description),
            items::is_available.eq(encode_flag(item.available)),
        ))
        .execute(conn)?;

    if updated == 0 {
        return Err(PersistenceError::NotFound(format!("Item {}", item.item_id)));
    }

    info!(item_id = item.item_id, "Item updated");
    Ok(())
}
