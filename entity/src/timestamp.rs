//! Lenient timestamp (de)serialization for store columns.
//!
//! Postgres `timestamptz` columns arrive as RFC 3339, but rows written by older clients
//! carry naive date-times or bare dates. All of them are read as UTC.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{de, Deserialize, Deserializer, Serializer};
use thiserror::Error;

const NAIVE_DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unrecognized timestamp {0:?}")]
pub struct TimestampError(pub String);

/// Parses a store timestamp in any of the accepted shapes.
///
/// # Arguments
/// - `raw` - RFC 3339 (`2025-06-05T18:30:00+00:00`), naive ISO date-time
///   (`2025-06-05T18:30[:00[.000]]`) or a bare date (`2025-06-05`, read as midnight)
///
/// # Returns
/// - `Ok(DateTime<Utc>)` - The parsed instant
/// - `Err(TimestampError)` - None of the accepted shapes matched
pub fn parse(raw: &str) -> Result<DateTime<Utc>, TimestampError> {
    let raw = raw.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Ok(parsed.with_timezone(&Utc));
    }

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(parsed.and_utc());
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map(|date| date.and_time(chrono::NaiveTime::MIN).and_utc())
        .map_err(|_| TimestampError(raw.to_string()))
}

/// Formats an instant the way it is sent to the store.
pub fn format(value: &DateTime<Utc>) -> String {
    value.to_rfc3339()
}

pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format(value))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse(&raw).map_err(de::Error::custom)
}
