// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary for the `ShareIt` marketplace.
//!
//! Translates wire-level requests into core operations against the store
//! and domain errors into API errors. Nothing here knows about HTTP.

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

mod auth;
mod error;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

pub use auth::{AuthenticatedUser, USER_ID_HEADER, authenticate};
pub use error::{
    ApiError, AuthError, translate_core_error, translate_domain_error,
    translate_persistence_error,
};
pub use handlers::{
    add_comment, create_booking, create_item, create_request, decide_booking, delete_user,
    get_booking, get_item, get_request, get_user, list_bookings_for_booker,
    list_bookings_for_owner, list_other_requests, list_own_requests, list_owner_items,
    list_users, parse_booking_state, register_user, search_items, update_item, update_user,
};
pub use request_response::{
    BookingItemResponse, BookingListParams, BookingRefResponse, BookingResponse,
    BookingUserResponse, CommentResponse, CreateBookingRequest, CreateCommentRequest,
    CreateItemRequest, CreateItemRequestRequest, CreateUserRequest, DEFAULT_BOOKINGS_PAGE_SIZE,
    DEFAULT_ITEMS_PAGE_SIZE, DEFAULT_REQUESTS_PAGE_SIZE, DEFAULT_SEARCH_PAGE_SIZE,
    DecisionParams, ItemRequestResponse, ItemResponse, ItemSummaryResponse, PageParams,
    SearchParams, UpdateItemRequest, UpdateUserRequest, UserResponse,
};
