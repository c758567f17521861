// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Item catalog rules: ownership, partial updates, enrichment, and comment
//! eligibility.

use crate::error::CoreError;
use shareit_domain::{
    Booking, BookingRef, BookingStatus, DomainError, Item, validate_item_description,
    validate_item_name,
};
use time::PrimitiveDateTime;

/// Fields of an item that may be changed after listing.
///
/// `None` leaves the field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub available: Option<bool>,
}

/// Checks that `user_id` owns `item`.
///
/// # Errors
///
/// Returns `DomainError::NotItemOwner` otherwise.
pub fn ensure_item_owner(item: &Item, user_id: i64) -> Result<(), CoreError> {
    if item.is_owned_by(user_id) {
        Ok(())
    } else {
        Err(DomainError::NotItemOwner {
            user_id,
            item_id: item.item_id,
        }
        .into())
    }
}

/// Applies an owner's partial update to an item.
///
/// # Errors
///
/// Returns an error if the caller is not the owner, or a supplied name or
/// description is blank.
pub fn apply_item_update(
    mut item: Item,
    user_id: i64,
    update: ItemUpdate,
) -> Result<Item, CoreError> {
    ensure_item_owner(&item, user_id)?;

    if let Some(name) = update.name {
        validate_item_name(&name)?;
        item.name = name;
    }
    if let Some(description) = update.description {
        validate_item_description(&description)?;
        item.description = description;
    }
    if let Some(available) = update.available {
        item.available = available;
    }
    Ok(item)
}

/// Selects the booking that started most recently before `now`.
#[must_use]
pub fn select_last_booking(bookings: &[Booking], now: PrimitiveDateTime) -> Option<BookingRef> {
    bookings
        .iter()
        .filter(|booking| booking.start < now)
        .max_by_key(|booking| (booking.start, booking.booking_id))
        .map(BookingRef::from)
}

/// Selects the booking that starts soonest after `now`.
#[must_use]
pub fn select_next_booking(bookings: &[Booking], now: PrimitiveDateTime) -> Option<BookingRef> {
    bookings
        .iter()
        .filter(|booking| booking.start > now)
        .min_by_key(|booking| (booking.start, booking.booking_id))
        .map(BookingRef::from)
}

/// Checks that an author may comment on an item.
///
/// `author_bookings` are the author's bookings of the item. At least one
/// must be approved and already started.
///
/// # Errors
///
/// Returns `DomainError::NotBookedYet` otherwise.
pub fn check_comment_eligibility(
    item_id: i64,
    author_bookings: &[Booking],
    now: PrimitiveDateTime,
) -> Result<(), CoreError> {
    let eligible: bool = author_bookings.iter().any(|booking| {
        booking.item_id == item_id
            && booking.status == BookingStatus::Approved
            && booking.start <= now
    });
    if eligible {
        Ok(())
    } else {
        Err(DomainError::NotBookedYet { item_id }.into())
    }
}
