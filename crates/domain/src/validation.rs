// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use time::PrimitiveDateTime;

/// Validates a user display name.
///
/// # Errors
///
/// Returns `DomainError::InvalidName` if the name is blank.
pub fn validate_user_name(name: &str) -> Result<(), DomainError> {
    if name.trim().is_empty() {
        return Err(DomainError::InvalidName(String::from(
            "User name cannot be empty",
        )));
    }
    Ok(())
}

/// Validates email syntax.
///
/// The address must have a non-empty local part, an `@`, and a domain with
/// no whitespace that contains a dot which is neither its first nor its
/// last character. The last `@` separates local part from domain.
///
/// # Errors
///
/// Returns `DomainError::InvalidEmail` if the address is malformed.
pub fn validate_email(email: &str) -> Result<(), DomainError> {
    let invalid = || DomainError::InvalidEmail(email.to_string());

    let (local, domain) = email.rsplit_once('@').ok_or_else(invalid)?;
    if local.trim().is_empty() || domain.is_empty() {
        return Err(invalid());
    }
    if domain.chars().any(char::is_whitespace) {
        return Err(invalid());
    }
    let last: usize = domain.len() - 1;
    let has_interior_dot: bool = domain
        .char_indices()
        .any(|(idx, c)| c == '.' && idx > 0 && idx < last);
    if !has_interior_dot || domain.starts_with('.') || domain.ends_with('.') {
        return Err(invalid());
    }
    Ok(())
}

/// Validates an item name.
///
/// # Errors
///
/// Returns `DomainError::InvalidName` if the name is blank.
pub fn validate_item_name(name: &str) -> Result<(), DomainError> {
    if name.trim().is_empty() {
        return Err(DomainError::InvalidName(String::from(
            "Item name cannot be empty",
        )));
    }
    Ok(())
}

/// Validates an item description.
///
/// # Errors
///
/// Returns `DomainError::InvalidDescription` if the description is blank.
pub fn validate_item_description(description: &str) -> Result<(), DomainError> {
    if description.trim().is_empty() {
        return Err(DomainError::InvalidDescription(String::from(
            "Item description cannot be empty",
        )));
    }
    Ok(())
}

/// Validates a wanted-item request description.
///
/// # Errors
///
/// Returns `DomainError::InvalidDescription` if the description is blank.
pub fn validate_request_description(description: &str) -> Result<(), DomainError> {
    if description.trim().is_empty() {
        return Err(DomainError::InvalidDescription(String::from(
            "Request description cannot be empty",
        )));
    }
    Ok(())
}

/// Validates comment text.
///
/// # Errors
///
/// Returns `DomainError::InvalidCommentText` if the text is blank.
pub fn validate_comment_text(text: &str) -> Result<(), DomainError> {
    if text.trim().is_empty() {
        return Err(DomainError::InvalidCommentText);
    }
    Ok(())
}

/// Validates a requested booking window against the current time.
///
/// The end must lie after both the start and `now`; the start must not lie
/// before `now`.
///
/// # Errors
///
/// Returns `DomainError::InvalidBookingWindow` naming the offending bound.
pub fn validate_booking_window(
    start: PrimitiveDateTime,
    end: PrimitiveDateTime,
    now: PrimitiveDateTime,
) -> Result<(), DomainError> {
    if end <= start || end < now {
        return Err(DomainError::InvalidBookingWindow {
            reason: "Invalid end time of booking!",
        });
    }
    if start < now {
        return Err(DomainError::InvalidBookingWindow {
            reason: "Invalid start time of booking!",
        });
    }
    Ok(())
}
