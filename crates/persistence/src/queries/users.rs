// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! User directory queries.

use diesel::SqliteConnection;
use diesel::dsl::exists;
use diesel::prelude::*;
use shareit_domain::User;
use tracing::debug;

use crate::diesel_schema::{bookings, comments, item_requests, items, users};
use crate::error::PersistenceError;

/// Diesel Queryable struct for user rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = users)]
struct UserRow {
    user_id: i64,
    name: String,
    email: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self::new(row.user_id, row.name, row.email)
    }
}

/// Retrieves a user by ID.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the user is not found.
pub fn get_user(
    conn: &mut SqliteConnection,
    user_id: i64,
) -> Result<Option<User>, PersistenceError> {
    debug!(user_id, "Looking up user");

    let row: Option<UserRow> = users::table
        .find(user_id)
        .select(UserRow::as_select())
        .first(conn)
        .optional()?;

    Ok(row.map(User::from))
}

/// Retrieves a user by email address.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn find_user_by_email(
    conn: &mut SqliteConnection,
    email: &str,
) -> Result<Option<User>, PersistenceError> {
    let row: Option<UserRow> = users::table
        .filter(users::email.eq(email))
        .select(UserRow::as_select())
        .first(conn)
        .optional()?;

    Ok(row.map(User::from))
}

/// Lists all users ordered by ID.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_users(conn: &mut SqliteConnection) -> Result<Vec<User>, PersistenceError> {
    let rows: Vec<UserRow> = users::table
        .order(users::user_id.asc())
        .select(UserRow::as_select())
        .load(conn)?;

    Ok(rows.into_iter().map(User::from).collect())
}

/// Retrieves the users with the given IDs. Unknown IDs are skipped.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn get_users_by_ids(
    conn: &mut SqliteConnection,
    user_ids: &[i64],
) -> Result<Vec<User>, PersistenceError> {
    if user_ids.is_empty() {
        return Ok(Vec::new());
    }

    let rows: Vec<UserRow> = users::table
        .filter(users::user_id.eq_any(user_ids.to_vec()))
        .order(users::user_id.asc())
        .select(UserRow::as_select())
        .load(conn)?;

    Ok(rows.into_iter().map(User::from).collect())
}

/// Finds the first kind of record that still references a user.
///
/// Checks owned items, bookings, comments, and wanted-item requests in
/// that order.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn find_user_reference(
    conn: &mut SqliteConnection,
    user_id: i64,
) -> Result<Option<&'static str>, PersistenceError> {
    let owns_items: bool = diesel::select(exists(
        items::table.filter(items::owner_id.eq(user_id)),
    ))
    .get_result(conn)?;
    if owns_items {
        return Ok(Some("items"));
    }

    let has_bookings: bool = diesel::select(exists(
        bookings::table.filter(bookings::booker_id.eq(user_id)),
    ))
    .get_result(conn)?;
    if has_bookings {
        return Ok(Some("bookings"));
    }

    let has_comments: bool = diesel::select(exists(
        comments::table.filter(comments::author_id.eq(user_id)),
    ))
    .get_result(conn)?;
    if has_comments {
        return Ok(Some("comments"));
    }

    let has_requests: bool = diesel::select(exists(
        item_requests::table.filter(item_requests::requester_id.eq(user_id)),
    ))
    .get_result(conn)?;
    if has_requests {
        return Ok(Some("requests"));
    }

    Ok(None)
}
