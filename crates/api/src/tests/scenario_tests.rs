// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! End-to-end flows across the user, catalog, booking and request handlers.

use shareit_domain::BookingStatus;

use crate::error::ApiError;
use crate::handlers::{
    add_comment, create_booking, create_item, create_request, get_request, search_items,
};
use crate::request_response::{
    BookingResponse, CommentResponse, CreateCommentRequest, CreateItemRequest,
    CreateItemRequestRequest, ItemRequestResponse, ItemResponse, SearchParams, UserResponse,
};
use crate::tests::helpers::{
    NOW, as_user, book, booking_request, create_test_persistence, decide, hours, list_item,
    register,
};

#[test]
fn test_rent_then_review_flow() {
    let mut persistence = create_test_persistence();
    let alice: UserResponse = register(&mut persistence, "Alice");
    let bob: UserResponse = register(&mut persistence, "Bob");
    let drill: ItemResponse = list_item(&mut persistence, &alice, "drill");

    let booking: BookingResponse = book(&mut persistence, &bob, &drill, 1, 2);
    assert_eq!(booking.status, BookingStatus::Waiting);

    let approved: BookingResponse = decide(&mut persistence, &alice, &booking, true);
    assert_eq!(approved.status, BookingStatus::Approved);

    let early = add_comment(
        &mut persistence,
        &as_user(&bob),
        drill.id,
        CreateCommentRequest {
            text: Some(String::from("Works great")),
        },
        NOW,
    );
    assert!(
        matches!(early, Err(ApiError::DomainRuleViolation { message, .. }) if message == "Item not booked yet!")
    );

    let posted: CommentResponse = add_comment(
        &mut persistence,
        &as_user(&bob),
        drill.id,
        CreateCommentRequest {
            text: Some(String::from("Works great")),
        },
        NOW + hours(1),
    )
    .unwrap();
    assert_eq!(posted.author_name, "Bob");
}

#[test]
fn test_owner_booking_own_item_is_forbidden() {
    let mut persistence = create_test_persistence();
    let alice: UserResponse = register(&mut persistence, "Alice");
    let drill: ItemResponse = list_item(&mut persistence, &alice, "drill");

    let result = create_booking(
        &mut persistence,
        &as_user(&alice),
        booking_request(drill.id, NOW + hours(1), NOW + hours(2)),
        NOW,
    );

    assert!(matches!(result, Err(ApiError::Forbidden { .. })));
}

#[test]
fn test_answering_a_request_with_an_item() {
    let mut persistence = create_test_persistence();
    let alice: UserResponse = register(&mut persistence, "Alice");
    register(&mut persistence, "Bob");
    let carol: UserResponse = register(&mut persistence, "Carol");

    let wanted: ItemRequestResponse = create_request(
        &mut persistence,
        &as_user(&carol),
        CreateItemRequestRequest {
            description: Some(String::from("need a ladder")),
        },
        NOW,
    )
    .unwrap();
    let ladder: ItemResponse = create_item(
        &mut persistence,
        &as_user(&alice),
        CreateItemRequest {
            name: Some(String::from("ladder")),
            description: Some(String::from("aluminium, 3m")),
            available: Some(true),
            request_id: Some(wanted.id),
        },
    )
    .unwrap();

    let fetched: ItemRequestResponse =
        get_request(&mut persistence, &as_user(&carol), wanted.id).unwrap();
    assert_eq!(fetched.items.len(), 1);
    assert_eq!(fetched.items[0].id, ladder.id);
    assert_eq!(fetched.items[0].request_id, Some(wanted.id));

    let found: Vec<ItemResponse> = search_items(
        &mut persistence,
        &SearchParams {
            text: Some(String::from("LADDER")),
            from: None,
            size: None,
        },
        NOW,
    )
    .unwrap();
    assert_eq!(found.len(), 1);
}
