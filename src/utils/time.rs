//! Time utilities: the reference timezone, parsing user and stored
//! timestamps, rendering instants for the CLI.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;

/// Every calendar computation (week boundaries, rendering) happens in this zone.
pub const REFERENCE_TZ: Tz = chrono_tz::America::Los_Angeles;

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dT%H:%M:%S%.f",
];

pub fn now() -> DateTime<Utc> {
    Utc::now()
}

pub fn to_reference(ts: DateTime<Utc>) -> DateTime<Tz> {
    ts.with_timezone(&REFERENCE_TZ)
}

/// Interpret a wall-clock time in the reference zone.
/// On a DST fold the earlier instant wins; times inside a DST gap are rejected.
pub fn from_reference_naive(naive: NaiveDateTime) -> Option<DateTime<Utc>> {
    REFERENCE_TZ
        .from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Parse a naive `YYYY-MM-DD HH:MM[:SS]` (or `T`-separated) wall-clock time.
pub fn parse_local_datetime(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .and_then(from_reference_naive)
}

/// Parse the `time` field of a stored event: RFC 3339 first, then a naive
/// timestamp in the reference zone. Anything else is treated as absent.
pub fn parse_event_time(s: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s.trim())
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
        .or_else(|| parse_local_datetime(s))
}

/// Parse a time given on the command line.
pub fn parse_user_time(s: &str) -> AppResult<DateTime<Utc>> {
    parse_event_time(s).ok_or_else(|| AppError::InvalidTime(s.to_string()))
}

pub fn parse_optional_time(input: Option<&String>) -> AppResult<Option<DateTime<Utc>>> {
    input.map(|s| parse_user_time(s)).transpose()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Storage form: RFC 3339 with millisecond precision, UTC.
pub fn to_storage(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}

/// e.g. "Monday, June 03, 2024, 09:00 AM"
pub fn format_event_time(ts: &DateTime<Utc>) -> String {
    to_reference(*ts).format("%A, %B %d, %Y, %I:%M %p").to_string()
}
