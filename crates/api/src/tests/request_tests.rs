// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::auth::AuthenticatedUser;
use crate::error::ApiError;
use crate::handlers::{
    create_item, create_request, get_request, list_other_requests, list_own_requests,
};
use crate::request_response::{
    CreateItemRequest, CreateItemRequestRequest, ItemRequestResponse, PageParams, UserResponse,
};
use crate::tests::helpers::{NOW, as_user, create_test_persistence, hours, register};
use shareit_persistence::Persistence;
use time::PrimitiveDateTime;

fn post(
    persistence: &mut Persistence,
    user: &UserResponse,
    description: &str,
    at: PrimitiveDateTime,
) -> ItemRequestResponse {
    create_request(
        persistence,
        &as_user(user),
        CreateItemRequestRequest {
            description: Some(description.to_string()),
        },
        at,
    )
    .unwrap()
}

#[test]
fn test_create_request_stamps_creation_time() {
    let mut persistence = create_test_persistence();
    let asker: UserResponse = register(&mut persistence, "Asker");

    let posted: ItemRequestResponse = post(&mut persistence, &asker, "Need a ladder", NOW);

    assert_eq!(posted.description, "Need a ladder");
    assert_eq!(posted.user_id, asker.id);
    assert_eq!(posted.created, NOW);
    assert!(posted.items.is_empty());
}

#[test]
fn test_create_request_validates_input() {
    let mut persistence = create_test_persistence();
    let asker: UserResponse = register(&mut persistence, "Asker");

    let blank = create_request(
        &mut persistence,
        &as_user(&asker),
        CreateItemRequestRequest {
            description: Some(String::from(" ")),
        },
        NOW,
    );
    let unknown = create_request(
        &mut persistence,
        &AuthenticatedUser::new(99),
        CreateItemRequestRequest {
            description: Some(String::from("Need a tent")),
        },
        NOW,
    );

    assert!(matches!(blank, Err(ApiError::InvalidInput { .. })));
    assert!(matches!(unknown, Err(ApiError::ResourceNotFound { .. })));
}

#[test]
fn test_own_requests_are_newest_first() {
    let mut persistence = create_test_persistence();
    let asker: UserResponse = register(&mut persistence, "Asker");
    let other: UserResponse = register(&mut persistence, "Other");
    let older: ItemRequestResponse = post(&mut persistence, &asker, "Need a ladder", NOW);
    let newer: ItemRequestResponse =
        post(&mut persistence, &asker, "Need a tent", NOW + hours(1));
    post(&mut persistence, &other, "Need a kayak", NOW + hours(2));

    let listed: Vec<ItemRequestResponse> =
        list_own_requests(&mut persistence, &as_user(&asker)).unwrap();

    let ids: Vec<i64> = listed.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![newer.id, older.id]);
}

#[test]
fn test_other_requests_exclude_callers_own() {
    let mut persistence = create_test_persistence();
    let asker: UserResponse = register(&mut persistence, "Asker");
    let other: UserResponse = register(&mut persistence, "Other");
    post(&mut persistence, &asker, "Need a ladder", NOW);
    let first: ItemRequestResponse = post(&mut persistence, &other, "Need a tent", NOW);
    let second: ItemRequestResponse =
        post(&mut persistence, &other, "Need a kayak", NOW + hours(1));

    let listed: Vec<ItemRequestResponse> =
        list_other_requests(&mut persistence, &as_user(&asker), PageParams::default()).unwrap();
    let paged: Vec<ItemRequestResponse> = list_other_requests(
        &mut persistence,
        &as_user(&asker),
        PageParams {
            from: Some(1),
            size: Some(1),
        },
    )
    .unwrap();

    let ids: Vec<i64> = listed.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![second.id, first.id]);
    assert_eq!(paged.len(), 1);
    assert_eq!(paged[0].id, first.id);
}

#[test]
fn test_get_request_attaches_answering_items() {
    let mut persistence = create_test_persistence();
    let asker: UserResponse = register(&mut persistence, "Asker");
    let owner: UserResponse = register(&mut persistence, "Owner");
    let wanted: ItemRequestResponse = post(&mut persistence, &asker, "Need a ladder", NOW);
    create_item(
        &mut persistence,
        &as_user(&owner),
        CreateItemRequest {
            name: Some(String::from("Ladder")),
            description: Some(String::from("Six steps")),
            available: Some(true),
            request_id: Some(wanted.id),
        },
    )
    .unwrap();

    let fetched: ItemRequestResponse =
        get_request(&mut persistence, &as_user(&owner), wanted.id).unwrap();
    let own: Vec<ItemRequestResponse> =
        list_own_requests(&mut persistence, &as_user(&asker)).unwrap();

    assert_eq!(fetched.items.len(), 1);
    assert_eq!(fetched.items[0].name, "Ladder");
    assert_eq!(fetched.items[0].owner_id, owner.id);
    assert_eq!(own[0].items, fetched.items);
}

#[test]
fn test_get_unknown_request_is_not_found() {
    let mut persistence = create_test_persistence();
    let asker: UserResponse = register(&mut persistence, "Asker");

    let result = get_request(&mut persistence, &as_user(&asker), 5);

    assert!(
        matches!(result, Err(ApiError::ResourceNotFound { resource_type, .. }) if resource_type == "Request")
    );
}
