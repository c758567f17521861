// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use time::PrimitiveDateTime;
use tracing::info;

use crate::backend::PersistenceBackend;
use crate::data_models::{NewCommentRow, encode_timestamp};
use crate::diesel_schema::comments;
use crate::error::PersistenceError;

/// Creates a comment.
///
/// `author_name` is stored as given; it is a snapshot of the author's
/// display name at write time.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn create_comment(
    conn: &mut SqliteConnection,
    text: &str,
    author_id: i64,
    author_name: &str,
    item_id: i64,
    created: PrimitiveDateTime,
) -> Result<i64, PersistenceError> {
    let created_at: String = encode_timestamp(created)?;

    diesel::insert_into(comments::table)
        .values(&NewCommentRow {
            text,
            author_id,
            author_name,
            item_id,
            created_at: &created_at,
        })
        .execute(conn)?;

    let comment_id: i64 = conn.get_last_insert_rowid()?;

    info!(comment_id, item_id, author_id, "Comment created");
    Ok(comment_id)
}
