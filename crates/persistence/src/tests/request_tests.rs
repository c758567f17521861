// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::{NOW, create_test_persistence, create_test_user};
use crate::Persistence;
use shareit_domain::{ItemRequest, PageRequest, User};
use time::macros::datetime;

#[test]
fn test_requests_split_by_requester() {
    let mut persistence: Persistence = create_test_persistence();
    let alice: User = create_test_user(&mut persistence, "Alice");
    let bob: User = create_test_user(&mut persistence, "Bob");

    let old: ItemRequest = persistence
        .create_request("Need a saw", alice.user_id, datetime!(2026-06-01 09:00:00))
        .unwrap();
    let new: ItemRequest = persistence
        .create_request("Need a ladder", alice.user_id, NOW)
        .unwrap();
    let bobs: ItemRequest = persistence
        .create_request("Need a tent", bob.user_id, NOW)
        .unwrap();

    let own: Vec<ItemRequest> = persistence
        .list_requests_by_requester(alice.user_id)
        .unwrap();
    assert_eq!(own, vec![new.clone(), old.clone()]);

    let others: Vec<ItemRequest> = persistence
        .list_requests_excluding(bob.user_id, PageRequest::new(0, 10).unwrap())
        .unwrap();
    assert_eq!(others, vec![new, old]);

    let others: Vec<ItemRequest> = persistence
        .list_requests_excluding(alice.user_id, PageRequest::new(0, 10).unwrap())
        .unwrap();
    assert_eq!(others, vec![bobs.clone()]);

    assert_eq!(
        persistence.get_request(bobs.request_id).unwrap(),
        Some(bobs)
    );
}
