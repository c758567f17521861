// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::{NOW, create_test_item, create_test_persistence, create_test_user};
use crate::Persistence;
use shareit_domain::{Comment, Item, User};
use time::macros::datetime;

#[test]
fn test_comments_list_oldest_first() {
    let mut persistence: Persistence = create_test_persistence();
    let owner: User = create_test_user(&mut persistence, "Owner");
    let author: User = create_test_user(&mut persistence, "Author");
    let item: Item = create_test_item(&mut persistence, owner.user_id, "Drill");

    let newer: Comment = persistence
        .create_comment("Still great", author.user_id, &author.name, item.item_id, NOW)
        .unwrap();
    let older: Comment = persistence
        .create_comment(
            "Great drill",
            author.user_id,
            &author.name,
            item.item_id,
            datetime!(2026-06-01 09:00:00),
        )
        .unwrap();

    let comments: Vec<Comment> = persistence.list_comments_by_items(&[item.item_id]).unwrap();
    assert_eq!(comments, vec![older, newer]);
}
