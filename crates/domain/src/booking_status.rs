// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Booking status tracking and transition logic.
//!
//! A booking starts out `WAITING` and is decided exactly once by the owner
//! of the booked item. `APPROVED` and `REJECTED` are terminal.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Decision state of a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    /// Awaiting the owner's decision
    Waiting,
    /// Accepted by the owner
    Approved,
    /// Declined by the owner
    Rejected,
}

impl BookingStatus {
    /// Returns the string representation of the status.
    ///
    /// This is used for persistence and API serialization.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Waiting => "WAITING",
            Self::Approved => "APPROVED",
            Self::Rejected => "REJECTED",
        }
    }

    /// Maps an owner's approve/reject answer onto the resulting status.
    #[must_use]
    pub const fn from_decision(approved: bool) -> Self {
        if approved {
            Self::Approved
        } else {
            Self::Rejected
        }
    }

    /// Returns true if this status is terminal (cannot transition to another state).
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Approved | Self::Rejected)
    }

    /// Validates a transition from this status to `new_status`.
    ///
    /// Only `WAITING -> APPROVED` and `WAITING -> REJECTED` are permitted.
    /// Re-applying the current terminal status is an error, not a no-op.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::BookingAlreadyDecided` if this status is terminal,
    /// or `DomainError::InvalidStatusTransition` if `new_status` is `WAITING`.
    pub const fn validate_transition(
        &self,
        booking_id: i64,
        new_status: Self,
    ) -> Result<(), DomainError> {
        match (self, new_status) {
            (Self::Waiting, Self::Approved | Self::Rejected) => Ok(()),
            (Self::Waiting, Self::Waiting) => Err(DomainError::InvalidStatusTransition {
                from: *self,
                to: new_status,
            }),
            (Self::Approved | Self::Rejected, _) => Err(DomainError::BookingAlreadyDecided {
                booking_id,
                status: *self,
            }),
        }
    }
}

impl FromStr for BookingStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "WAITING" => Ok(Self::Waiting),
            "APPROVED" => Ok(Self::Approved),
            "REJECTED" => Ok(Self::Rejected),
            _ => Err(DomainError::UnknownState(s.to_string())),
        }
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
