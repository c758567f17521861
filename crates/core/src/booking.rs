// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Booking lifecycle rules.

use crate::error::CoreError;
use shareit_domain::{
    Booking, BookingState, BookingStatus, DomainError, Item, PageRequest, validate_booking_window,
};
use time::PrimitiveDateTime;

/// Checks whether `booker_id` may book `item` for `[start, end]`.
///
/// # Arguments
///
/// * `item` - The item being booked
/// * `booker_id` - The user requesting the booking
/// * `start` - Requested start of the stay
/// * `end` - Requested end of the stay
/// * `now` - The current time
///
/// # Errors
///
/// Returns an error if:
/// - The booker owns the item
/// - The item is flagged unavailable
/// - The window is empty or reaches into the past
pub fn validate_new_booking(
    item: &Item,
    booker_id: i64,
    start: PrimitiveDateTime,
    end: PrimitiveDateTime,
    now: PrimitiveDateTime,
) -> Result<(), CoreError> {
    if item.is_owned_by(booker_id) {
        return Err(DomainError::OwnerCannotBook {
            item_id: item.item_id,
        }
        .into());
    }
    if !item.available {
        return Err(DomainError::ItemUnavailable(item.item_id).into());
    }
    validate_booking_window(start, end, now)?;
    Ok(())
}

/// Decides a waiting booking on behalf of the item owner.
///
/// # Arguments
///
/// * `booking` - The booking being decided
/// * `item` - The booked item
/// * `owner_id` - The user making the decision
/// * `approved` - Whether the booking is approved or rejected
///
/// # Returns
///
/// The status the booking must move to.
///
/// # Errors
///
/// Returns an error if the caller does not own the item or the booking has
/// already been decided.
pub fn decide_booking(
    booking: &Booking,
    item: &Item,
    owner_id: i64,
    approved: bool,
) -> Result<BookingStatus, CoreError> {
    if !item.is_owned_by(owner_id) {
        return Err(DomainError::NotItemOwner {
            user_id: owner_id,
            item_id: item.item_id,
        }
        .into());
    }
    let new_status: BookingStatus = BookingStatus::from_decision(approved);
    booking
        .status
        .validate_transition(booking.booking_id, new_status)?;
    Ok(new_status)
}

/// Checks that `user_id` may see `booking`.
///
/// Only the booker and the owner of the booked item qualify.
///
/// # Errors
///
/// Returns `DomainError::NotBookingParticipant` for anyone else.
pub fn authorize_booking_view(
    booking: &Booking,
    item: &Item,
    user_id: i64,
) -> Result<(), CoreError> {
    if booking.booker_id == user_id || item.is_owned_by(user_id) {
        return Ok(());
    }
    Err(DomainError::NotBookingParticipant {
        user_id,
        booking_id: booking.booking_id,
    }
    .into())
}

/// Filters and pages a user's bookings.
///
/// `bookings` is the user's complete list in one role, already ordered. An
/// empty list is an error; a filter that matches nothing yields an empty
/// page.
///
/// # Errors
///
/// Returns `DomainError::NoBookings` if `bookings` is empty.
pub fn select_bookings(
    user_id: i64,
    bookings: Vec<Booking>,
    state: BookingState,
    page: PageRequest,
    now: PrimitiveDateTime,
) -> Result<Vec<Booking>, CoreError> {
    if bookings.is_empty() {
        return Err(DomainError::NoBookings(user_id).into());
    }
    let filtered: Vec<Booking> = bookings
        .into_iter()
        .filter(|booking| state.matches(booking, now))
        .collect();
    Ok(page.apply(filtered))
}
