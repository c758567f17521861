// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use shareit_domain::{User, validate_email, validate_user_name};

/// Fields of a user that may be changed. `None` leaves the field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
}

/// Applies a partial update to a user record.
///
/// Email uniqueness is not checked here; that needs the store.
///
/// # Errors
///
/// Returns an error if a supplied name is blank or a supplied email is
/// malformed.
pub fn apply_user_update(mut user: User, update: UserUpdate) -> Result<User, CoreError> {
    if let Some(name) = update.name {
        validate_user_name(&name)?;
        user.name = name;
    }
    if let Some(email) = update.email {
        let email: String = email.trim().to_string();
        validate_email(&email)?;
        user.email = email;
    }
    Ok(user)
}
