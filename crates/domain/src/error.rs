// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::BookingStatus;

/// Broad classification of a domain failure.
///
/// Every [`DomainError`] maps onto exactly one kind. Outer layers use the
/// kind to pick a transport status without inspecting individual variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A referenced user, item, booking, or request does not exist.
    NotFound,
    /// The caller lacks the required relationship to the resource.
    Forbidden,
    /// Malformed input.
    Invalid,
    /// The operation would violate a state invariant.
    Conflict,
}

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// User does not exist.
    UserNotFound(i64),
    /// Item does not exist.
    ItemNotFound(i64),
    /// Booking does not exist.
    BookingNotFound(i64),
    /// Item request does not exist.
    RequestNotFound(i64),
    /// User name is empty or invalid.
    InvalidName(String),
    /// Email address is syntactically invalid.
    InvalidEmail(String),
    /// Item or request description is empty or invalid.
    InvalidDescription(String),
    /// Comment text is blank.
    InvalidCommentText,
    /// Item availability flag was not supplied.
    InvalidAvailability,
    /// Booking state filter is not one of the known values.
    UnknownState(String),
    /// `from` is negative or `size` is not positive.
    InvalidPagination {
        /// The requested offset.
        from: i64,
        /// The requested page size.
        size: i64,
    },
    /// A timestamp could not be parsed or formatted.
    InvalidTimestamp(String),
    /// Email is already registered to another user.
    DuplicateEmail(String),
    /// The owner of an item attempted to book it.
    OwnerCannotBook {
        /// The item the owner tried to book.
        item_id: i64,
    },
    /// The caller does not own the item.
    NotItemOwner {
        /// The caller.
        user_id: i64,
        /// The item.
        item_id: i64,
    },
    /// The caller is neither the booker nor the item owner.
    NotBookingParticipant {
        /// The caller.
        user_id: i64,
        /// The booking.
        booking_id: i64,
    },
    /// The item is flagged unavailable.
    ItemUnavailable(i64),
    /// The booking window is malformed or lies in the past.
    InvalidBookingWindow {
        /// Which bound is at fault.
        reason: &'static str,
    },
    /// The booking has already left the waiting state.
    BookingAlreadyDecided {
        /// The booking.
        booking_id: i64,
        /// Its current, terminal status.
        status: BookingStatus,
    },
    /// The author holds no started, approved booking of the item.
    NotBookedYet {
        /// The item being commented on.
        item_id: i64,
    },
    /// A status transition other than out of `WAITING` was requested.
    InvalidStatusTransition {
        /// Current status.
        from: BookingStatus,
        /// Requested status.
        to: BookingStatus,
    },
    /// The user has no bookings at all in the requested role.
    NoBookings(i64),
    /// The user is still referenced by other records and cannot be deleted.
    UserReferenced {
        /// The user.
        user_id: i64,
        /// The kind of record still pointing at the user.
        referenced_by: &'static str,
    },
}

impl DomainError {
    /// Classifies this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::UserNotFound(_)
            | Self::ItemNotFound(_)
            | Self::BookingNotFound(_)
            | Self::RequestNotFound(_) => ErrorKind::NotFound,
            Self::NotItemOwner { .. }
            | Self::NotBookingParticipant { .. }
            | Self::OwnerCannotBook { .. } => ErrorKind::Forbidden,
            Self::InvalidName(_)
            | Self::InvalidEmail(_)
            | Self::InvalidDescription(_)
            | Self::InvalidCommentText
            | Self::InvalidAvailability
            | Self::UnknownState(_)
            | Self::InvalidPagination { .. }
            | Self::InvalidTimestamp(_)
            | Self::InvalidBookingWindow { .. }
            | Self::InvalidStatusTransition { .. } => ErrorKind::Invalid,
            Self::DuplicateEmail(_)
            | Self::ItemUnavailable(_)
            | Self::BookingAlreadyDecided { .. }
            | Self::NotBookedYet { .. }
            | Self::NoBookings(_)
            | Self::UserReferenced { .. } => ErrorKind::Conflict,
        }
    }
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UserNotFound(id) => write!(f, "User {id} not found"),
            Self::ItemNotFound(id) => write!(f, "Item {id} not found"),
            Self::BookingNotFound(id) => write!(f, "Booking {id} not found"),
            Self::RequestNotFound(id) => write!(f, "Request {id} not found"),
            Self::InvalidName(msg) => write!(f, "Invalid name: {msg}"),
            Self::InvalidEmail(email) => write!(f, "Invalid email: {email}"),
            Self::InvalidDescription(msg) => write!(f, "Invalid description: {msg}"),
            Self::InvalidCommentText => write!(f, "Empty comment!"),
            Self::InvalidAvailability => write!(f, "Item availability must be specified"),
            Self::UnknownState(state) => write!(f, "Unknown state: {state}"),
            Self::InvalidPagination { from, size } => {
                write!(f, "Invalid pagination parameters! (from={from}, size={size})")
            }
            Self::InvalidTimestamp(msg) => write!(f, "Invalid timestamp: {msg}"),
            Self::DuplicateEmail(email) => {
                write!(f, "User with email {email} is already registered")
            }
            Self::OwnerCannotBook { .. } => write!(f, "Owner can not book his item!"),
            Self::NotItemOwner { user_id, item_id } => {
                write!(f, "User {user_id} is not the owner of item {item_id}")
            }
            Self::NotBookingParticipant {
                user_id,
                booking_id,
            } => write!(
                f,
                "User {user_id} is neither the booker nor the item owner of booking {booking_id}"
            ),
            Self::ItemUnavailable(_) => write!(f, "Item is not available!"),
            Self::InvalidBookingWindow { reason } => write!(f, "{reason}"),
            Self::BookingAlreadyDecided { booking_id, status } => write!(
                f,
                "Booking {booking_id} has already been {}",
                status.as_str().to_lowercase()
            ),
            Self::NotBookedYet { .. } => write!(f, "Item not booked yet!"),
            Self::InvalidStatusTransition { from, to } => {
                write!(f, "Invalid booking status transition from {from} to {to}")
            }
            Self::NoBookings(_) => write!(f, "User does not have bookings!"),
            Self::UserReferenced {
                user_id,
                referenced_by,
            } => write!(
                f,
                "User {user_id} cannot be deleted: referenced by {referenced_by}"
            ),
        }
    }
}

impl std::error::Error for DomainError {}
