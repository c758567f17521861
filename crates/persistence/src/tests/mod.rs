// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod comment_tests;
mod item_tests;
mod request_tests;
mod user_tests;

use crate::Persistence;
use shareit_domain::{Item, User};
use time::PrimitiveDateTime;
use time::macros::datetime;

pub const NOW: PrimitiveDateTime = datetime!(2026-06-15 12:00:00);

pub fn create_test_persistence() -> Persistence {
    Persistence::new_in_memory().expect("in-memory database")
}

pub fn create_test_user(persistence: &mut Persistence, name: &str) -> User {
    let email: String = format!("{}@example.com", name.to_lowercase());
    persistence.create_user(name, &email).unwrap()
}

pub fn create_test_item(persistence: &mut Persistence, owner_id: i64, name: &str) -> Item {
    persistence
        .create_item(name, &format!("{name} for rent"), true, owner_id, None)
        .unwrap()
}
