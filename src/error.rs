//! Error types for the almanac crate.

/// Error type for all fallible operations in the almanac crate.
///
/// This enum covers month validation, shift-cycle validation, wire-format
/// parsing, and the bounds of timestamp conversion and calendar searches.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u32,
    },

    /// Returned when a shift cycle has a zero working or off count.
    #[error("invalid shift cycle: {days_on} on / {days_off} off (both must be >= 1)")]
    InvalidCycle {
        /// The number of consecutive working days that was provided.
        days_on: u32,
        /// The number of consecutive off days that was provided.
        days_off: u32,
    },

    /// Returned when a date string does not match the expected wire format.
    #[error("unparseable date: {input:?} (expected {format})")]
    ParseDate {
        /// The input string that failed to parse.
        input: String,
        /// The strftime pattern the input was expected to match.
        format: &'static str,
    },

    /// Returned when an epoch-millisecond value has no representable date.
    #[error("timestamp out of range: {millis} ms since the epoch")]
    TimestampOutOfRange {
        /// The millisecond value that was provided.
        millis: i64,
    },

    /// Returned when a calendar day falls outside the representable year range.
    #[error("date out of range: {year}-{month:02}-{day:02}")]
    DateOutOfRange {
        /// The year of the unrepresentable date.
        year: i32,
        /// The month of the unrepresentable date.
        month: u32,
        /// The day of the unrepresentable date.
        day: u32,
    },

    /// Returned when a bounded forward search ends without a match.
    #[error("no matching day within {months} months")]
    SearchExhausted {
        /// The number of months that were scanned.
        months: u32,
    },
}
