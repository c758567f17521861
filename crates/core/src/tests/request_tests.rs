// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{BOOKER_ID, STRANGER_ID, create_test_item, create_test_request};
use crate::group_items_by_request;
use shareit_domain::{Item, ItemRequest};

#[test]
fn test_items_attach_to_matching_request() {
    let requests: Vec<ItemRequest> = vec![
        create_test_request(2, STRANGER_ID),
        create_test_request(1, BOOKER_ID),
    ];
    let mut ladder: Item = create_test_item(true);
    ladder.item_id = 20;
    ladder.name = String::from("Ladder");
    ladder.request_id = Some(1);
    let unrelated: Item = create_test_item(true);

    let grouped: Vec<(ItemRequest, Vec<Item>)> =
        group_items_by_request(requests, vec![ladder, unrelated]);

    assert_eq!(grouped.len(), 2);
    assert_eq!(grouped[0].0.request_id, 2);
    assert!(grouped[0].1.is_empty());
    assert_eq!(grouped[1].0.request_id, 1);
    assert_eq!(grouped[1].1.len(), 1);
    assert_eq!(grouped[1].1[0].name, "Ladder");
}
