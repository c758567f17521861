// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use time::PrimitiveDateTime;
use tracing::info;

use crate::backend::PersistenceBackend;
use crate::data_models::{NewItemRequestRow, encode_timestamp};
use crate::diesel_schema::item_requests;
use crate::error::PersistenceError;

/// Creates a wanted-item request.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn create_request(
    conn: &mut SqliteConnection,
    description: &str,
    requester_id: i64,
    created: PrimitiveDateTime,
) -> Result<i64, PersistenceError> {
    let created_at: String = encode_timestamp(created)?;

    diesel::insert_into(item_requests::table)
        .values(&NewItemRequestRow {
            description,
            requester_id,
            created_at: &created_at,
        })
        .execute(conn)?;

    let request_id: i64 = conn.get_last_insert_rowid()?;

    info!(request_id, requester_id, "Request created");
    Ok(request_id)
}
