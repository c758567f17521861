// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use shareit_domain::{Item, ItemRequest};
use std::collections::HashMap;

/// Attaches to each request the items listed in answer to it.
///
/// Request order is preserved. Items that answer none of the given
/// requests are dropped; items within a request keep their input order.
#[must_use]
pub fn group_items_by_request(
    requests: Vec<ItemRequest>,
    items: Vec<Item>,
) -> Vec<(ItemRequest, Vec<Item>)> {
    let mut by_request: HashMap<i64, Vec<Item>> = HashMap::new();
    for item in items {
        if let Some(request_id) = item.request_id {
            by_request.entry(request_id).or_default().push(item);
        }
    }
    requests
        .into_iter()
        .map(|request| {
            let answers: Vec<Item> = by_request.remove(&request.request_id).unwrap_or_default();
            (request, answers)
        })
        .collect()
}
