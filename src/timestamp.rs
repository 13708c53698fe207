//! Epoch-millisecond conversions.

use chrono::{DateTime, TimeZone, Utc};

use crate::error::CalendarError;

/// Returns the number of milliseconds between the Unix epoch and `date`.
///
/// The zone only affects how the instant was constructed; the result is
/// always relative to 1970-01-01T00:00:00 UTC.
pub fn epoch_millis<Tz: TimeZone>(date: &DateTime<Tz>) -> i64 {
    date.timestamp_millis()
}

/// Builds a UTC instant from milliseconds since the Unix epoch.
///
/// # Errors
///
/// Returns [`CalendarError::TimestampOutOfRange`] if `millis` falls outside
/// the representable year range.
pub fn from_epoch_millis(millis: i64) -> Result<DateTime<Utc>, CalendarError> {
    DateTime::from_timestamp_millis(millis).ok_or(CalendarError::TimestampOutOfRange { millis })
}
