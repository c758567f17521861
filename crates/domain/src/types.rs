// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::BookingStatus;
use time::PrimitiveDateTime;

/// A registered marketplace user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Store-assigned identifier.
    pub user_id: i64,
    /// Display name.
    pub name: String,
    /// Unique email address.
    pub email: String,
}

impl User {
    /// Creates a new `User`.
    ///
    /// # Arguments
    ///
    /// * `user_id` - The store-assigned identifier
    /// * `name` - The user's display name
    /// * `email` - The user's email address
    #[must_use]
    pub const fn new(user_id: i64, name: String, email: String) -> Self {
        Self {
            user_id,
            name,
            email,
        }
    }
}

/// An item listed for lending by its owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub item_id: i64,
    pub name: String,
    pub description: String,
    pub available: bool,
    pub owner_id: i64,
    /// The wanted-item request this listing answers, if any.
    pub request_id: Option<i64>,
}

impl Item {
    /// Returns true if `user_id` owns this item.
    #[must_use]
    pub const fn is_owned_by(&self, user_id: i64) -> bool {
        self.owner_id == user_id
    }
}

/// A booking of an item for a time window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Booking {
    pub booking_id: i64,
    pub start: PrimitiveDateTime,
    pub end: PrimitiveDateTime,
    pub item_id: i64,
    pub booker_id: i64,
    pub status: BookingStatus,
}

/// Compact reference to a booking, attached to item listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingRef {
    pub booking_id: i64,
    pub booker_id: i64,
}

impl From<&Booking> for BookingRef {
    fn from(booking: &Booking) -> Self {
        Self {
            booking_id: booking.booking_id,
            booker_id: booking.booker_id,
        }
    }
}

/// A comment left on an item after a stay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub comment_id: i64,
    pub text: String,
    pub author_id: i64,
    /// Author display name, denormalized at write time.
    pub author_name: String,
    pub item_id: i64,
    pub created: PrimitiveDateTime,
}

/// A "wanted" post asking for an item that is not yet listed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemRequest {
    pub request_id: i64,
    pub description: String,
    pub requester_id: i64,
    pub created: PrimitiveDateTime,
}
