// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Booking mutations.

use diesel::SqliteConnection;
use diesel::prelude::*;
use shareit_domain::BookingStatus;
use time::PrimitiveDateTime;
use tracing::{info, warn};

use crate::backend::PersistenceBackend;
use crate::data_models::{NewBookingRow, encode_timestamp};
use crate::diesel_schema::bookings;
use crate::error::PersistenceError;

/// Creates a new booking in the `WAITING` state.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn create_booking(
    conn: &mut SqliteConnection,
    item_id: i64,
    booker_id: i64,
    start: PrimitiveDateTime,
    end: PrimitiveDateTime,
) -> Result<i64, PersistenceError> {
    let start_at: String = encode_timestamp(start)?;
    let end_at: String = encode_timestamp(end)?;

    diesel::insert_into(bookings::table)
        .values(&NewBookingRow {
            start_at: &start_at,
            end_at: &end_at,
            item_id,
            booker_id,
            status: BookingStatus::Waiting.as_str(),
        })
        .execute(conn)?;

    let booking_id: i64 = conn.get_last_insert_rowid()?;

    info!(booking_id, item_id, booker_id, "Booking created");
    Ok(booking_id)
}

/// Moves a waiting booking to `status`.
///
/// The update is conditional on the stored status still being `WAITING`,
/// so of two racing decisions exactly one wins.
///
/// # Errors
///
/// Returns `PersistenceError::BookingAlreadyDecided` if no waiting booking
/// with this ID exists.
pub fn set_booking_status(
    conn: &mut SqliteConnection,
    booking_id: i64,
    status: BookingStatus,
) -> Result<(), PersistenceError> {
    let updated: usize = diesel::update(
        bookings::table
            .filter(bookings::booking_id.eq(booking_id))
            .filter(bookings::status.eq(BookingStatus::Waiting.as_str())),
    )
    .set(bookings::status.eq(status.as_str()))
    .execute(conn)?;

    if updated == 0 {
        warn!(booking_id, "Conditional status update matched no waiting booking");
        return Err(PersistenceError::BookingAlreadyDecided { booking_id });
    }

    info!(booking_id, status = %status, "Booking decided");
    Ok(())
}
