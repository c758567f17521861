// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use shareit::CoreError;
use shareit_domain::DomainError;
use shareit_persistence::PersistenceError;
use thiserror::Error;

/// Caller identity errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// The identity header was not sent.
    #[error("Missing X-Sharer-User-Id header")]
    MissingIdentity,
    /// The identity header is not a user ID.
    #[error("Invalid X-Sharer-User-Id header: {0}")]
    MalformedIdentity(String),
}

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
/// Each variant corresponds to one transport status class. `Display` yields
/// the message alone, since it is surfaced to callers verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The caller could not be identified.
    #[error("{reason}")]
    AuthenticationFailed {
        /// The reason identification failed.
        reason: String,
    },
    /// The caller lacks the required relationship to the resource.
    #[error("{message}")]
    Forbidden {
        /// A human-readable description of the refusal.
        message: String,
    },
    /// A state invariant would be violated.
    #[error("{message}")]
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// Invalid input was provided.
    #[error("{message}")]
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    #[error("{message}")]
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// An internal error occurred.
    #[error("Internal error: {message}")]
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        Self::AuthenticationFailed {
            reason: err.to_string(),
        }
    }
}

impl From<PersistenceError> for ApiError {
    fn from(err: PersistenceError) -> Self {
        translate_persistence_error(err)
    }
}

fn not_found(resource_type: &str, message: String) -> ApiError {
    ApiError::ResourceNotFound {
        resource_type: resource_type.to_string(),
        message,
    }
}

fn invalid(field: &str, message: String) -> ApiError {
    ApiError::InvalidInput {
        field: field.to_string(),
        message,
    }
}

fn violation(rule: &str, message: String) -> ApiError {
    ApiError::DomainRuleViolation {
        rule: rule.to_string(),
        message,
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    let message: String = err.to_string();
    match err {
        DomainError::UserNotFound(_) => not_found("User", message),
        DomainError::ItemNotFound(_) => not_found("Item", message),
        DomainError::BookingNotFound(_) => not_found("Booking", message),
        DomainError::RequestNotFound(_) => not_found("Request", message),
        DomainError::InvalidName(_) => invalid("name", message),
        DomainError::InvalidEmail(_) => invalid("email", message),
        DomainError::InvalidDescription(_) => invalid("description", message),
        DomainError::InvalidCommentText => invalid("text", message),
        DomainError::InvalidAvailability => invalid("available", message),
        DomainError::UnknownState(_) => invalid("state", message),
        DomainError::InvalidPagination { .. } => invalid("from/size", message),
        DomainError::InvalidTimestamp(_) => invalid("start/end", message),
        DomainError::InvalidBookingWindow { .. } => invalid("start/end", message),
        DomainError::InvalidStatusTransition { .. } => invalid("approved", message),
        DomainError::OwnerCannotBook { .. }
        | DomainError::NotItemOwner { .. }
        | DomainError::NotBookingParticipant { .. } => ApiError::Forbidden { message },
        DomainError::DuplicateEmail(_) => violation("unique_email", message),
        DomainError::ItemUnavailable(_) => violation("item_available", message),
        DomainError::BookingAlreadyDecided { .. } => violation("single_decision", message),
        DomainError::NotBookedYet { .. } => violation("comment_requires_stay", message),
        DomainError::NoBookings(_) => violation("bookings_exist", message),
        DomainError::UserReferenced { .. } => violation("delete_restrict", message),
    }
}

/// Translates a core error into an API error.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
    }
}

/// Translates a persistence error into an API error.
///
/// Store-level invariant failures become the same API errors as their
/// domain-level counterparts; everything else is internal.
#[must_use]
pub fn translate_persistence_error(err: PersistenceError) -> ApiError {
    match err {
        PersistenceError::DuplicateEmail(email) => {
            translate_domain_error(DomainError::DuplicateEmail(email))
        }
        PersistenceError::UserReferenced {
            user_id,
            referenced_by,
        } => translate_domain_error(DomainError::UserReferenced {
            user_id,
            referenced_by,
        }),
        PersistenceError::BookingAlreadyDecided { booking_id } => violation(
            "single_decision",
            format!("Booking {booking_id} has already been decided"),
        ),
        PersistenceError::NotFound(message) => not_found("Record", message),
        other => ApiError::Internal {
            message: other.to_string(),
        },
    }
}
