// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use shareit_persistence::Persistence;
use time::macros::datetime;
use time::{Duration, PrimitiveDateTime};

use crate::auth::AuthenticatedUser;
use crate::handlers::{create_booking, create_item, decide_booking, register_user};
use crate::request_response::{
    BookingResponse, CreateBookingRequest, CreateItemRequest, CreateUserRequest, DecisionParams,
    ItemResponse, UserResponse,
};

pub const NOW: PrimitiveDateTime = datetime!(2026-06-15 12:00:00);

pub fn create_test_persistence() -> Persistence {
    Persistence::new_in_memory().expect("in-memory database")
}

pub const fn as_user(user: &UserResponse) -> AuthenticatedUser {
    AuthenticatedUser::new(user.id)
}

pub fn hours(n: i64) -> Duration {
    Duration::hours(n)
}

pub fn register(persistence: &mut Persistence, name: &str) -> UserResponse {
    register_user(
        persistence,
        CreateUserRequest {
            name: Some(name.to_string()),
            email: Some(format!("{}@example.com", name.to_lowercase())),
        },
    )
    .unwrap()
}

pub fn list_item(persistence: &mut Persistence, owner: &UserResponse, name: &str) -> ItemResponse {
    create_item(
        persistence,
        &as_user(owner),
        CreateItemRequest {
            name: Some(name.to_string()),
            description: Some(format!("A {name} for rent")),
            available: Some(true),
            request_id: None,
        },
    )
    .unwrap()
}

pub fn booking_request(
    item_id: i64,
    start: PrimitiveDateTime,
    end: PrimitiveDateTime,
) -> CreateBookingRequest {
    CreateBookingRequest {
        item_id: Some(item_id),
        start: Some(start),
        end: Some(end),
    }
}

/// Books `item` for `booker` over `[NOW + from_hours, NOW + to_hours]`.
pub fn book(
    persistence: &mut Persistence,
    booker: &UserResponse,
    item: &ItemResponse,
    from_hours: i64,
    to_hours: i64,
) -> BookingResponse {
    create_booking(
        persistence,
        &as_user(booker),
        booking_request(item.id, NOW + hours(from_hours), NOW + hours(to_hours)),
        NOW,
    )
    .unwrap()
}

pub fn decide(
    persistence: &mut Persistence,
    owner: &UserResponse,
    booking: &BookingResponse,
    approved: bool,
) -> BookingResponse {
    decide_booking(
        persistence,
        &as_user(owner),
        booking.id,
        DecisionParams {
            approved: Some(approved),
        },
    )
    .unwrap()
}
