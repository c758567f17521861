// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{BOOKER_ID, NOW, OWNER_ID, create_test_booking, create_test_item};
use crate::{
    CoreError, ItemUpdate, apply_item_update, check_comment_eligibility, select_last_booking,
    select_next_booking,
};
use shareit_domain::{Booking, BookingRef, BookingStatus, DomainError, Item};
use time::macros::datetime;

fn create_history() -> Vec<Booking> {
    vec![
        create_test_booking(
            1,
            datetime!(2026-06-01 10:00:00),
            datetime!(2026-06-02 10:00:00),
            BookingStatus::Approved,
        ),
        create_test_booking(
            2,
            datetime!(2026-06-10 10:00:00),
            datetime!(2026-06-11 10:00:00),
            BookingStatus::Rejected,
        ),
        create_test_booking(
            3,
            datetime!(2026-07-01 10:00:00),
            datetime!(2026-07-02 10:00:00),
            BookingStatus::Waiting,
        ),
        create_test_booking(
            4,
            datetime!(2026-06-20 10:00:00),
            datetime!(2026-06-21 10:00:00),
            BookingStatus::Approved,
        ),
    ]
}

#[test]
fn test_last_booking_is_latest_start_before_now() {
    let last: Option<BookingRef> = select_last_booking(&create_history(), NOW);
    assert_eq!(
        last,
        Some(BookingRef {
            booking_id: 2,
            booker_id: BOOKER_ID
        })
    );
}

#[test]
fn test_next_booking_is_earliest_start_after_now() {
    let next: Option<BookingRef> = select_next_booking(&create_history(), NOW);
    assert_eq!(
        next,
        Some(BookingRef {
            booking_id: 4,
            booker_id: BOOKER_ID
        })
    );
}

#[test]
fn test_no_bookings_means_no_enrichment() {
    assert_eq!(select_last_booking(&[], NOW), None);
    assert_eq!(select_next_booking(&[], NOW), None);
}

#[test]
fn test_update_with_only_name_leaves_other_fields() {
    let item: Item = create_test_item(true);
    let update: ItemUpdate = ItemUpdate {
        name: Some(String::from("Hammer drill")),
        ..ItemUpdate::default()
    };
    let updated: Item = apply_item_update(item, OWNER_ID, update).unwrap();
    assert_eq!(updated.name, "Hammer drill");
    assert_eq!(updated.description, "Cordless drill");
    assert!(updated.available);
}

#[test]
fn test_update_by_non_owner_is_forbidden() {
    let item: Item = create_test_item(true);
    let update: ItemUpdate = ItemUpdate {
        available: Some(false),
        ..ItemUpdate::default()
    };
    let result: Result<Item, CoreError> = apply_item_update(item, BOOKER_ID, update);
    assert_eq!(
        result,
        Err(CoreError::DomainViolation(DomainError::NotItemOwner {
            user_id: BOOKER_ID,
            item_id: 10,
        }))
    );
}

#[test]
fn test_update_rejects_blank_name() {
    let item: Item = create_test_item(true);
    let update: ItemUpdate = ItemUpdate {
        name: Some(String::from("  ")),
        ..ItemUpdate::default()
    };
    let result: Result<Item, CoreError> = apply_item_update(item, OWNER_ID, update);
    assert!(matches!(
        result,
        Err(CoreError::DomainViolation(DomainError::InvalidName(_)))
    ));
}

#[test]
fn test_comment_requires_started_approved_booking() {
    let approved_started: Booking = create_test_booking(
        1,
        datetime!(2026-06-15 12:00:00),
        datetime!(2026-06-16 10:00:00),
        BookingStatus::Approved,
    );
    assert!(check_comment_eligibility(10, &[approved_started], NOW).is_ok());
}

#[test]
fn test_comment_rejected_before_stay_begins() {
    let approved_future: Booking = create_test_booking(
        1,
        datetime!(2026-06-15 13:00:00),
        datetime!(2026-06-16 10:00:00),
        BookingStatus::Approved,
    );
    let waiting_past: Booking = create_test_booking(
        2,
        datetime!(2026-06-01 10:00:00),
        datetime!(2026-06-02 10:00:00),
        BookingStatus::Waiting,
    );
    let result: Result<(), CoreError> =
        check_comment_eligibility(10, &[approved_future, waiting_past], NOW);
    assert_eq!(
        result,
        Err(CoreError::DomainViolation(DomainError::NotBookedYet {
            item_id: 10
        }))
    );
}
