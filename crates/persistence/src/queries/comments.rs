// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use shareit_domain::Comment;

use crate::data_models::decode_timestamp;
use crate::diesel_schema::comments;
use crate::error::PersistenceError;

/// Diesel Queryable struct for comment rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = comments)]
struct CommentRow {
    comment_id: i64,
    text: String,
    author_id: i64,
    author_name: String,
    item_id: i64,
    created_at: String,
}

impl TryFrom<CommentRow> for Comment {
    type Error = PersistenceError;

    fn try_from(row: CommentRow) -> Result<Self, Self::Error> {
        Ok(Self {
            comment_id: row.comment_id,
            text: row.text,
            author_id: row.author_id,
            author_name: row.author_name,
            item_id: row.item_id,
            created: decode_timestamp(&row.created_at)?,
        })
    }
}

/// Lists the comments on the given items, oldest first.
///
/// # Errors
///
/// Returns an error if the database query fails or a row is malformed.
pub fn list_comments_by_items(
    conn: &mut SqliteConnection,
    item_ids: &[i64],
) -> Result<Vec<Comment>, PersistenceError> {
    if item_ids.is_empty() {
        return Ok(Vec::new());
    }

    let rows: Vec<CommentRow> = comments::table
        .filter(comments::item_id.eq_any(item_ids.to_vec()))
        .order((comments::created_at.asc(), comments::comment_id.asc()))
        .select(CommentRow::as_select())
        .load(conn)?;

    rows.into_iter().map(Comment::try_from).collect()
}
