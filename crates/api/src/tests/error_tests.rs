// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use shareit::CoreError;
use shareit_domain::{BookingStatus, DomainError};
use shareit_persistence::PersistenceError;

use crate::error::{
    ApiError, translate_core_error, translate_domain_error, translate_persistence_error,
};

#[test]
fn test_not_found_errors_name_the_resource() {
    let err: ApiError = translate_domain_error(DomainError::ItemNotFound(5));
    match err {
        ApiError::ResourceNotFound {
            resource_type,
            message,
        } => {
            assert_eq!(resource_type, "Item");
            assert!(message.contains('5'));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_relationship_errors_are_forbidden() {
    for err in [
        DomainError::OwnerCannotBook { item_id: 1 },
        DomainError::NotItemOwner {
            user_id: 2,
            item_id: 1,
        },
        DomainError::NotBookingParticipant {
            user_id: 3,
            booking_id: 4,
        },
    ] {
        assert!(matches!(
            translate_domain_error(err),
            ApiError::Forbidden { .. }
        ));
    }
}

#[test]
fn test_state_errors_are_rule_violations() {
    for err in [
        DomainError::DuplicateEmail(String::from("a@b.com")),
        DomainError::ItemUnavailable(1),
        DomainError::BookingAlreadyDecided {
            booking_id: 1,
            status: BookingStatus::Approved,
        },
        DomainError::NotBookedYet { item_id: 1 },
        DomainError::NoBookings(1),
    ] {
        assert!(matches!(
            translate_domain_error(err),
            ApiError::DomainRuleViolation { .. }
        ));
    }
}

#[test]
fn test_message_is_surfaced_verbatim() {
    let err: ApiError = translate_domain_error(DomainError::UnknownState(String::from("soon")));
    assert_eq!(err.to_string(), "Unknown state: soon");

    let err: ApiError = translate_domain_error(DomainError::OwnerCannotBook { item_id: 1 });
    assert_eq!(err.to_string(), "Owner can not book his item!");
}

#[test]
fn test_core_error_unwraps_domain_error() {
    let err: ApiError = translate_core_error(CoreError::DomainViolation(
        DomainError::InvalidCommentText,
    ));
    assert!(matches!(err, ApiError::InvalidInput { field, .. } if field == "text"));
}

#[test]
fn test_persistence_constraint_errors_are_rule_violations() {
    let err: ApiError =
        translate_persistence_error(PersistenceError::DuplicateEmail(String::from("a@b.com")));
    assert!(matches!(err, ApiError::DomainRuleViolation { rule, .. } if rule == "unique_email"));

    let err: ApiError =
        translate_persistence_error(PersistenceError::BookingAlreadyDecided { booking_id: 3 });
    assert!(
        matches!(err, ApiError::DomainRuleViolation { rule, .. } if rule == "single_decision")
    );

    let err: ApiError = translate_persistence_error(PersistenceError::UserReferenced {
        user_id: 1,
        referenced_by: "items",
    });
    assert!(
        matches!(err, ApiError::DomainRuleViolation { rule, .. } if rule == "delete_restrict")
    );
}

#[test]
fn test_other_persistence_errors_are_internal() {
    let err: ApiError =
        translate_persistence_error(PersistenceError::QueryFailed(String::from("boom")));
    assert!(matches!(err, ApiError::Internal { .. }));
}
