// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Workflow rules for the `ShareIt` marketplace.
//!
//! Everything in this crate is pure: callers load the records involved,
//! pass them in together with the current time, and persist whatever the
//! rule returns. Nothing here performs I/O.

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

mod booking;
mod catalog;
mod error;
mod requests;
mod users;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use booking::{authorize_booking_view, decide_booking, select_bookings, validate_new_booking};
pub use catalog::{
    ItemUpdate, apply_item_update, check_comment_eligibility, ensure_item_owner,
    select_last_booking, select_next_booking,
};
pub use error::CoreError;
pub use requests::group_items_by_request;
pub use users::{UserUpdate, apply_user_update};
