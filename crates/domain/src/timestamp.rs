// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Timestamp handling.
//!
//! All timestamps are UTC wall-clock values with second precision, rendered
//! as `YYYY-MM-DDTHH:MM:SS`. The fixed width makes the text form sort in
//! time order, which the store relies on.

use crate::error::DomainError;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{OffsetDateTime, PrimitiveDateTime};

/// Canonical text form of a timestamp.
pub const TIMESTAMP_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");

/// Accepted input form. Seconds may be omitted and default to zero;
/// fractional seconds are tolerated and dropped.
const INPUT_FORMAT: &[BorrowedFormatItem<'static>] = format_description!(
    "[year]-[month]-[day]T[hour]:[minute][optional [:[second][optional [.[subsecond]]]]]"
);

/// Returns the current UTC time truncated to whole seconds.
#[must_use]
pub fn current_timestamp() -> PrimitiveDateTime {
    let now: OffsetDateTime = OffsetDateTime::now_utc();
    let now: PrimitiveDateTime = PrimitiveDateTime::new(now.date(), now.time());
    now.replace_nanosecond(0).unwrap_or(now)
}

/// Renders a timestamp in the canonical text form.
///
/// # Errors
///
/// Returns `DomainError::InvalidTimestamp` if the value cannot be formatted.
pub fn format_timestamp(value: PrimitiveDateTime) -> Result<String, DomainError> {
    value
        .format(TIMESTAMP_FORMAT)
        .map_err(|e| DomainError::InvalidTimestamp(e.to_string()))
}

/// Parses a timestamp, dropping any fractional seconds.
///
/// # Errors
///
/// Returns `DomainError::InvalidTimestamp` if the text is not a timestamp.
pub fn parse_timestamp(value: &str) -> Result<PrimitiveDateTime, DomainError> {
    let parsed: PrimitiveDateTime = PrimitiveDateTime::parse(value, INPUT_FORMAT)
        .map_err(|e| DomainError::InvalidTimestamp(format!("{value}: {e}")))?;
    Ok(parsed.replace_nanosecond(0).unwrap_or(parsed))
}

/// Serde adapter for `PrimitiveDateTime` fields using the canonical form.
///
/// Use with `#[serde(with = "timestamp_format")]`, or
/// `#[serde(with = "timestamp_format::option")]` for optional fields.
pub mod timestamp_format {
    use super::{format_timestamp, parse_timestamp};
    use serde::{Deserialize, Deserializer, Serializer, de, ser};
    use time::PrimitiveDateTime;

    /// Serializes a timestamp.
    ///
    /// # Errors
    ///
    /// Fails if the value cannot be formatted.
    pub fn serialize<S>(value: &PrimitiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let text: String = format_timestamp(*value).map_err(ser::Error::custom)?;
        serializer.serialize_str(&text)
    }

    /// Deserializes a timestamp.
    ///
    /// # Errors
    ///
    /// Fails if the input is not a string in the accepted form.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<PrimitiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text: String = String::deserialize(deserializer)?;
        parse_timestamp(&text).map_err(de::Error::custom)
    }

    /// Optional variant of the adapter.
    pub mod option {
        use super::{format_timestamp, parse_timestamp};
        use serde::{Deserialize, Deserializer, Serializer, de, ser};
        use time::PrimitiveDateTime;

        /// Serializes an optional timestamp.
        ///
        /// # Errors
        ///
        /// Fails if the value cannot be formatted.
        pub fn serialize<S>(
            value: &Option<PrimitiveDateTime>,
            serializer: S,
        ) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            match value {
                Some(value) => {
                    let text: String = format_timestamp(*value).map_err(ser::Error::custom)?;
                    serializer.serialize_some(&text)
                }
                None => serializer.serialize_none(),
            }
        }

        /// Deserializes an optional timestamp.
        ///
        /// # Errors
        ///
        /// Fails if a present value is not a string in the accepted form.
        pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<PrimitiveDateTime>, D::Error>
        where
            D: Deserializer<'de>,
        {
            Option::<String>::deserialize(deserializer)?
                .map(|text| parse_timestamp(&text).map_err(de::Error::custom))
                .transpose()
        }
    }
}
