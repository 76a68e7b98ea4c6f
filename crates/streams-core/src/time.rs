//! Timestamp parsing and serialization for the wire format.
//!
//! The service speaks ISO-8601 with explicit offsets. Parsing preserves the
//! offset the service sent; serialization converts to the local system offset
//! at the call site. A bare calendar date is anchored to noon local time so
//! that day-level aggregation is stable across timezone boundaries.

use chrono::{
    DateTime, FixedOffset, Local, LocalResult, NaiveDate, NaiveTime, SubsecRound, TimeZone,
};
use thiserror::Error;

/// Errors from decoding wire timestamps.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParseError {
    /// The timestamp string was not valid ISO-8601 with an offset.
    #[error("invalid timestamp {value:?}: {source}")]
    Timestamp {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}

/// Parses an ISO-8601 timestamp, keeping the offset it was sent with.
pub fn parse_timestamp(value: &str) -> Result<DateTime<FixedOffset>, ParseError> {
    DateTime::parse_from_rfc3339(value).map_err(|source| ParseError::Timestamp {
        value: value.to_string(),
        source,
    })
}

/// Serializes an instant for the wire, in the local system offset.
///
/// Fractional seconds are emitted only when non-zero, so seconds-precision
/// timestamps round-trip unchanged.
#[must_use]
pub fn to_wire(instant: &DateTime<FixedOffset>) -> String {
    instant.with_timezone(&Local).to_rfc3339()
}

/// Anchors a bare calendar date to 12:00:00.000 local time.
///
/// Handles a DST gap at noon by falling forward an hour; on ambiguity the
/// earlier time is picked.
#[must_use]
pub fn noon_local(day: NaiveDate) -> DateTime<FixedOffset> {
    let noon = day.and_time(NaiveTime::from_hms_opt(12, 0, 0).unwrap());
    let resolved = match Local.from_local_datetime(&noon) {
        LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => dt,
        LocalResult::None => {
            // DST gap covering noon
            let one_pm = day.and_time(NaiveTime::from_hms_opt(13, 0, 0).unwrap());
            Local.from_local_datetime(&one_pm).unwrap()
        }
    };
    resolved.fixed_offset()
}

/// The current instant in the local offset, truncated to whole seconds.
///
/// Evaluated at every call; default timestamps must never be captured once
/// and shared.
#[must_use]
pub fn now_seconds() -> DateTime<FixedOffset> {
    Local::now().trunc_subsecs(0).fixed_offset()
}

/// Serde adapter for entity timestamp fields, via `#[serde(with = "time::wire")]`.
pub mod wire {
    use chrono::{DateTime, FixedOffset};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &DateTime<FixedOffset>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::to_wire(value))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<FixedOffset>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        super::parse_timestamp(&value).map_err(serde::de::Error::custom)
    }
}
