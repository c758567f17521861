// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::{NOW, create_test_item, create_test_persistence, create_test_user};
use crate::Persistence;
use shareit_domain::{Item, ItemRequest, PageRequest, User};

#[test]
fn test_create_and_get_item() {
    let mut persistence: Persistence = create_test_persistence();
    let owner: User = create_test_user(&mut persistence, "Owner");
    let item: Item = persistence
        .create_item("Drill", "Cordless drill", false, owner.user_id, None)
        .unwrap();

    let loaded: Item = persistence.get_item(item.item_id).unwrap().unwrap();
    assert_eq!(loaded, item);
    assert!(!loaded.available);
}

#[test]
fn test_update_item_persists_fields() {
    let mut persistence: Persistence = create_test_persistence();
    let owner: User = create_test_user(&mut persistence, "Owner");
    let mut item: Item = create_test_item(&mut persistence, owner.user_id, "Drill");

    item.available = false;
    item.description = String::from("Needs a new battery");
    persistence.update_item(&item).unwrap();

    assert_eq!(persistence.get_item(item.item_id).unwrap(), Some(item));
}

#[test]
fn test_list_items_by_owner_pages_by_offset() {
    let mut persistence: Persistence = create_test_persistence();
    let owner: User = create_test_user(&mut persistence, "Owner");
    let other: User = create_test_user(&mut persistence, "Other");
    let first: Item = create_test_item(&mut persistence, owner.user_id, "One");
    let second: Item = create_test_item(&mut persistence, owner.user_id, "Two");
    create_test_item(&mut persistence, other.user_id, "Elsewhere");
    let third: Item = create_test_item(&mut persistence, owner.user_id, "Three");

    let all: Vec<Item> = persistence
        .list_items_by_owner(owner.user_id, PageRequest::new(0, 20).unwrap())
        .unwrap();
    let ids: Vec<i64> = all.iter().map(|i| i.item_id).collect();
    assert_eq!(ids, vec![first.item_id, second.item_id, third.item_id]);

    let tail: Vec<Item> = persistence
        .list_items_by_owner(owner.user_id, PageRequest::new(1, 1).unwrap())
        .unwrap();
    assert_eq!(tail, vec![second]);
}

#[test]
fn test_search_is_case_insensitive_and_skips_unavailable() {
    let mut persistence: Persistence = create_test_persistence();
    let owner: User = create_test_user(&mut persistence, "Owner");
    let drill: Item = persistence
        .create_item("Power DRILL", "Cordless", true, owner.user_id, None)
        .unwrap();
    let bits: Item = persistence
        .create_item("Bits", "Fits any drill", true, owner.user_id, None)
        .unwrap();
    persistence
        .create_item("Old drill", "Broken", false, owner.user_id, None)
        .unwrap();

    let found: Vec<Item> = persistence
        .search_available_items("dRiLl", PageRequest::new(0, 10).unwrap())
        .unwrap();
    assert_eq!(found, vec![drill, bits]);
}

#[test]
fn test_search_folds_cyrillic_case() {
    let mut persistence: Persistence = create_test_persistence();
    let owner: User = create_test_user(&mut persistence, "Owner");
    let drill: Item = persistence
        .create_item("Дрель", "Аккумуляторная", true, owner.user_id, None)
        .unwrap();
    let saw: Item = persistence
        .create_item("Пила", "Подходит к ДРЕЛИ", true, owner.user_id, None)
        .unwrap();

    let by_name: Vec<Item> = persistence
        .search_available_items("дрель", PageRequest::new(0, 10).unwrap())
        .unwrap();
    assert_eq!(by_name, vec![drill.clone()]);

    let by_either: Vec<Item> = persistence
        .search_available_items("ДРЕЛ", PageRequest::new(0, 10).unwrap())
        .unwrap();
    assert_eq!(by_either, vec![drill, saw]);
}

#[test]
fn test_search_treats_wildcards_literally() {
    let mut persistence: Persistence = create_test_persistence();
    let owner: User = create_test_user(&mut persistence, "Owner");
    create_test_item(&mut persistence, owner.user_id, "Ladder");

    let found: Vec<Item> = persistence
        .search_available_items("%", PageRequest::new(0, 10).unwrap())
        .unwrap();
    assert!(found.is_empty());
}

#[test]
fn test_items_attach_to_requests() {
    let mut persistence: Persistence = create_test_persistence();
    let owner: User = create_test_user(&mut persistence, "Owner");
    let requester: User = create_test_user(&mut persistence, "Requester");
    let request: ItemRequest = persistence
        .create_request("Need a ladder", requester.user_id, NOW)
        .unwrap();
    let ladder: Item = persistence
        .create_item(
            "Ladder",
            "Three metres",
            true,
            owner.user_id,
            Some(request.request_id),
        )
        .unwrap();
    create_test_item(&mut persistence, owner.user_id, "Drill");

    let answers: Vec<Item> = persistence
        .list_items_by_requests(&[request.request_id])
        .unwrap();
    assert_eq!(answers, vec![ladder]);
}
