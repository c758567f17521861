// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Booking queries.

use diesel::SqliteConnection;
use diesel::prelude::*;
use shareit_domain::{Booking, BookingStatus};
use tracing::debug;

use crate::data_models::{decode_status, decode_timestamp};
use crate::diesel_schema::{bookings, items};
use crate::error::PersistenceError;

/// Diesel Queryable struct for booking rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = bookings)]
struct BookingRow {
    booking_id: i64,
    start_at: String,
    end_at: String,
    item_id: i64,
    booker_id: i64,
    status: String,
}

impl TryFrom<BookingRow> for Booking {
    type Error = PersistenceError;

    fn try_from(row: BookingRow) -> Result<Self, Self::Error> {
        Ok(Self {
            booking_id: row.booking_id,
            start: decode_timestamp(&row.start_at)?,
            end: decode_timestamp(&row.end_at)?,
            item_id: row.item_id,
            booker_id: row.booker_id,
            status: decode_status(&row.status)?,
        })
    }
}

fn into_bookings(rows: Vec<BookingRow>) -> Result<Vec<Booking>, PersistenceError> {
    rows.into_iter().map(Booking::try_from).collect()
}

/// Retrieves a booking by ID.
///
/// # Errors
///
/// Returns an error if the database query fails or the row is malformed.
/// Returns `Ok(None)` if the booking is not found.
pub fn get_booking(
    conn: &mut SqliteConnection,
    booking_id: i64,
) -> Result<Option<Booking>, PersistenceError> {
    debug!(booking_id, "Looking up booking");

    let row: Option<BookingRow> = bookings::table
        .find(booking_id)
        .select(BookingRow::as_select())
        .first(conn)
        .optional()?;

    row.map(Booking::try_from).transpose()
}

/// Lists every booking made by a user, newest start first.
///
/// # Errors
///
/// Returns an error if the database query fails or a row is malformed.
pub fn list_bookings_by_booker(
    conn: &mut SqliteConnection,
    booker_id: i64,
) -> Result<Vec<Booking>, PersistenceError> {
    let rows: Vec<BookingRow> = bookings::table
        .filter(bookings::booker_id.eq(booker_id))
        .order((bookings::start_at.desc(), bookings::booking_id.desc()))
        .select(BookingRow::as_select())
        .load(conn)?;

    into_bookings(rows)
}

/// Lists every booking of items owned by a user, newest start first.
///
/// # Errors
///
/// Returns an error if the database query fails or a row is malformed.
pub fn list_bookings_by_owner(
    conn: &mut SqliteConnection,
    owner_id: i64,
) -> Result<Vec<Booking>, PersistenceError> {
    let rows: Vec<BookingRow> = bookings::table
        .inner_join(items::table)
        .filter(items::owner_id.eq(owner_id))
        .order((bookings::start_at.desc(), bookings::booking_id.desc()))
        .select(BookingRow::as_select())
        .load(conn)?;

    into_bookings(rows)
}

/// Lists the bookings of the given items, earliest start first.
///
/// # Errors
///
/// Returns an error if the database query fails or a row is malformed.
pub fn list_bookings_by_items(
    conn: &mut SqliteConnection,
    item_ids: &[i64],
) -> Result<Vec<Booking>, PersistenceError> {
    if item_ids.is_empty() {
        return Ok(Vec::new());
    }

    let rows: Vec<BookingRow> = bookings::table
        .filter(bookings::item_id.eq_any(item_ids.to_vec()))
        .order((bookings::start_at.asc(), bookings::booking_id.asc()))
        .select(BookingRow::as_select())
        .load(conn)?;

    into_bookings(rows)
}

/// Lists a booker's bookings of one item in the given status, earliest
/// start first.
///
/// # Errors
///
/// Returns an error if the database query fails or a row is malformed.
pub fn list_bookings_by_item_and_booker(
    conn: &mut SqliteConnection,
    item_id: i64,
    booker_id: i64,
    status: BookingStatus,
) -> Result<Vec<Booking>, PersistenceError> {
    let rows: Vec<BookingRow> = bookings::table
        .filter(bookings::item_id.eq(item_id))
        .filter(bookings::booker_id.eq(booker_id))
        .filter(bookings::status.eq(status.as_str()))
        .order((bookings::start_at.asc(), bookings::booking_id.asc()))
        .select(BookingRow::as_select())
        .load(conn)?;

    into_bookings(rows)
}
