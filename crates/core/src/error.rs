// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use shareit_domain::DomainError;
use thiserror::Error;

/// Errors raised by workflow rules.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A domain rule was violated.
    #[error("Domain violation: {0}")]
    DomainViolation(#[from] DomainError),
}

impl CoreError {
    /// Returns the underlying domain error.
    #[must_use]
    pub const fn domain_error(&self) -> &DomainError {
        match self {
            Self::DomainViolation(err) => err,
        }
    }
}
