// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use shareit_domain::{Booking, BookingStatus, Item, ItemRequest};
use time::PrimitiveDateTime;
use time::macros::datetime;

pub const OWNER_ID: i64 = 1;
pub const BOOKER_ID: i64 = 2;
pub const STRANGER_ID: i64 = 3;

pub const NOW: PrimitiveDateTime = datetime!(2026-06-15 12:00:00);

pub fn create_test_item(available: bool) -> Item {
    Item {
        item_id: 10,
        name: String::from("Drill"),
        description: String::from("Cordless drill"),
        available,
        owner_id: OWNER_ID,
        request_id: None,
    }
}

pub fn create_test_booking(
    booking_id: i64,
    start: PrimitiveDateTime,
    end: PrimitiveDateTime,
    status: BookingStatus,
) -> Booking {
    Booking {
        booking_id,
        start,
        end,
        item_id: 10,
        booker_id: BOOKER_ID,
        status,
    }
}

pub fn create_test_request(request_id: i64, requester_id: i64) -> ItemRequest {
    ItemRequest {
        request_id,
        description: format!("Request {request_id}"),
        requester_id,
        created: NOW,
    }
}
