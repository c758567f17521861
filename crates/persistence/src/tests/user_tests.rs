// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::{create_test_item, create_test_persistence, create_test_user};
use crate::{Persistence, PersistenceError};
use shareit_domain::User;

#[test]
fn test_create_and_get_user() {
    let mut persistence: Persistence = create_test_persistence();
    let user: User = persistence.create_user("Alice", "alice@example.com").unwrap();

    let loaded: Option<User> = persistence.get_user(user.user_id).unwrap();
    assert_eq!(loaded, Some(user));
}

#[test]
fn test_get_missing_user_returns_none() {
    let mut persistence: Persistence = create_test_persistence();
    assert_eq!(persistence.get_user(999).unwrap(), None);
}

#[test]
fn test_duplicate_email_is_rejected_by_store() {
    let mut persistence: Persistence = create_test_persistence();
    persistence.create_user("Alice", "shared@example.com").unwrap();

    let result: Result<User, PersistenceError> =
        persistence.create_user("Bob", "shared@example.com");
    assert_eq!(
        result,
        Err(PersistenceError::DuplicateEmail(String::from(
            "shared@example.com"
        )))
    );
}

#[test]
fn test_update_user_to_taken_email_is_rejected() {
    let mut persistence: Persistence = create_test_persistence();
    create_test_user(&mut persistence, "Alice");
    let mut bob: User = create_test_user(&mut persistence, "Bob");

    bob.email = String::from("alice@example.com");
    let result: Result<(), PersistenceError> = persistence.update_user(&bob);
    assert!(matches!(result, Err(PersistenceError::DuplicateEmail(_))));
}

#[test]
fn test_update_user_persists_changes() {
    let mut persistence: Persistence = create_test_persistence();
    let mut alice: User = create_test_user(&mut persistence, "Alice");

    alice.name = String::from("Alicia");
    persistence.update_user(&alice).unwrap();

    let found: Option<User> = persistence.find_user_by_email("alice@example.com").unwrap();
    assert_eq!(found.map(|u| u.name), Some(String::from("Alicia")));
}

#[test]
fn test_list_users_orders_by_id() {
    let mut persistence: Persistence = create_test_persistence();
    let alice: User = create_test_user(&mut persistence, "Alice");
    let bob: User = create_test_user(&mut persistence, "Bob");

    let ids: Vec<i64> = persistence
        .list_users()
        .unwrap()
        .iter()
        .map(|u| u.user_id)
        .collect();
    assert_eq!(ids, vec![alice.user_id, bob.user_id]);
}

#[test]
fn test_get_users_by_ids_skips_unknown() {
    let mut persistence: Persistence = create_test_persistence();
    let alice: User = create_test_user(&mut persistence, "Alice");

    let users: Vec<User> = persistence
        .get_users_by_ids(&[alice.user_id, 999])
        .unwrap();
    assert_eq!(users, vec![alice]);
    assert!(persistence.get_users_by_ids(&[]).unwrap().is_empty());
}

#[test]
fn test_delete_unreferenced_user() {
    let mut persistence: Persistence = create_test_persistence();
    let alice: User = create_test_user(&mut persistence, "Alice");

    persistence.delete_user(alice.user_id).unwrap();
    assert_eq!(persistence.get_user(alice.user_id).unwrap(), None);
}

#[test]
fn test_delete_user_owning_items_is_restricted() {
    let mut persistence: Persistence = create_test_persistence();
    let alice: User = create_test_user(&mut persistence, "Alice");
    create_test_item(&mut persistence, alice.user_id, "Drill");

    let result: Result<(), PersistenceError> = persistence.delete_user(alice.user_id);
    assert_eq!(
        result,
        Err(PersistenceError::UserReferenced {
            user_id: alice.user_id,
            referenced_by: "items",
        })
    );
    assert!(persistence.get_user(alice.user_id).unwrap().is_some());
}

#[test]
fn test_delete_missing_user_is_not_found() {
    let mut persistence: Persistence = create_test_persistence();
    let result: Result<(), PersistenceError> = persistence.delete_user(42);
    assert!(matches!(result, Err(PersistenceError::NotFound(_))));
}
