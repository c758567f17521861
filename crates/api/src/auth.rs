// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Caller identity.
//!
//! Every user-scoped request names its caller in the `X-Sharer-User-Id`
//! header. The value is trusted as-is; there is no credential check behind
//! it. Whether the named user exists is decided per operation.

use crate::error::AuthError;

/// Name of the header carrying the caller's user ID.
pub const USER_ID_HEADER: &str = "X-Sharer-User-Id";

/// The caller on whose behalf an operation runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedUser {
    /// The caller's user ID.
    pub user_id: i64,
}

impl AuthenticatedUser {
    /// Creates a new authenticated user.
    #[must_use]
    pub const fn new(user_id: i64) -> Self {
        Self { user_id }
    }
}

/// Resolves the caller from the raw identity header value.
///
/// # Arguments
///
/// * `header_value` - The header value, or `None` if the header was absent
///
/// # Errors
///
/// Returns `AuthError::MissingIdentity` if the header is absent, or
/// `AuthError::MalformedIdentity` if it is not an integer.
pub fn authenticate(header_value: Option<&str>) -> Result<AuthenticatedUser, AuthError> {
    let raw: &str = header_value.ok_or(AuthError::MissingIdentity)?;
    raw.trim()
        .parse::<i64>()
        .map(AuthenticatedUser::new)
        .map_err(|_| AuthError::MalformedIdentity(raw.to_string()))
}
