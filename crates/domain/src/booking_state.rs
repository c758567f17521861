// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The `state` filter applied to booking listings.

use crate::error::DomainError;
use crate::{Booking, BookingStatus};
use std::str::FromStr;
use time::PrimitiveDateTime;

/// Filter over a user's bookings, relative to the current time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BookingState {
    /// Every booking.
    #[default]
    All,
    /// Started and not yet ended.
    Current,
    /// Already ended.
    Past,
    /// Not yet started.
    Future,
    /// Awaiting the owner's decision.
    Waiting,
    /// Declined by the owner.
    Rejected,
}

impl BookingState {
    /// Returns the string representation used on the wire.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::All => "ALL",
            Self::Current => "CURRENT",
            Self::Past => "PAST",
            Self::Future => "FUTURE",
            Self::Waiting => "WAITING",
            Self::Rejected => "REJECTED",
        }
    }

    /// Returns true if `booking` belongs in this filter at time `now`.
    #[must_use]
    pub fn matches(&self, booking: &Booking, now: PrimitiveDateTime) -> bool {
        match self {
            Self::All => true,
            Self::Current => booking.start < now && booking.end > now,
            Self::Past => booking.end < now,
            Self::Future => booking.start > now,
            Self::Waiting => booking.status == BookingStatus::Waiting,
            Self::Rejected => booking.status == BookingStatus::Rejected,
        }
    }
}

impl FromStr for BookingState {
    type Err = DomainError;

    /// Parses a state filter. Matching is case-sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ALL" => Ok(Self::All),
            "CURRENT" => Ok(Self::Current),
            "PAST" => Ok(Self::Past),
            "FUTURE" => Ok(Self::Future),
            "WAITING" => Ok(Self::Waiting),
            "REJECTED" => Ok(Self::Rejected),
            _ => Err(DomainError::UnknownState(s.to_string())),
        }
    }
}
