// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod booking_state;
mod booking_status;
mod error;
mod pagination;
mod patch;
mod timestamp;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use booking_state::BookingState;
pub use booking_status::BookingStatus;
pub use error::{DomainError, ErrorKind};
pub use pagination::PageRequest;
pub use patch::Patch;
pub use timestamp::{
    TIMESTAMP_FORMAT, current_timestamp, format_timestamp, parse_timestamp, timestamp_format,
};

// Re-export public types
pub use types::{Booking, BookingRef, Comment, Item, ItemRequest, User};
pub use validation::{
    validate_booking_window, validate_comment_text, validate_email, validate_item_description,
    validate_item_name, validate_request_description, validate_user_name,
};
