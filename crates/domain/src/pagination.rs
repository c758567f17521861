// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use num_traits::ToPrimitive;

/// An offset/limit window over a listing.
///
/// `from` is an element offset, not a page index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    from: i64,
    size: i64,
}

impl PageRequest {
    /// Creates a validated page request.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidPagination` if `from` is negative or
    /// `size` is less than one.
    pub const fn new(from: i64, size: i64) -> Result<Self, DomainError> {
        if from < 0 || size < 1 {
            return Err(DomainError::InvalidPagination { from, size });
        }
        Ok(Self { from, size })
    }

    /// Number of elements to skip.
    #[must_use]
    pub const fn offset(&self) -> i64 {
        self.from
    }

    /// Maximum number of elements to return.
    #[must_use]
    pub const fn limit(&self) -> i64 {
        self.size
    }

    /// Applies the window to an already materialized listing.
    #[must_use]
    pub fn apply<T>(&self, items: Vec<T>) -> Vec<T> {
        let skip: usize = self.from.to_usize().unwrap_or(usize::MAX);
        let take: usize = self.size.to_usize().unwrap_or(0);
        items.into_iter().skip(skip).take(take).collect()
    }
}
