//! Fixed-locale formatting and parsing.
//!
//! All textual output is pinned to the `en-US` conventions of the original
//! callers: English weekday names, an unpadded `M/D/YYYY, h:mm:ss AM/PM`
//! date-time shape, and a day-first `DD-MM-YYYY` wire format for schedules.
//! Instant-based functions are generic over [`chrono::TimeZone`]; pass a
//! `DateTime<Local>` for host-local behavior.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, TimeZone, Weekday};

use crate::error::CalendarError;

/// Day-first wire format used by schedule inputs and outputs.
pub const DAY_FIRST_FORMAT: &str = "%d-%m-%Y";

/// `en-US` date-time shape for display. Month, day, and hour are unpadded.
const EN_US_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

/// The same shape without padding modifiers, for parsing.
const EN_US_PARSE_FORMAT: &str = "%m/%d/%Y, %I:%M:%S %p";

const TIME_FORMAT: &str = "%H:%M:%S";

/// Returns the zone-local time of day as zero-padded 24-hour `hh:mm:ss`.
pub fn time_of_day<Tz: TimeZone>(date: &DateTime<Tz>) -> String {
    date.time().format(TIME_FORMAT).to_string()
}

/// Returns the full English weekday name for a date.
pub fn day_name(date: NaiveDate) -> &'static str {
    match date.weekday() {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Formats the zone-local fields of an instant as
/// `M/D/YYYY, h:mm:ss AM/PM`.
///
/// Sub-second data does not survive this format; see [`parse_date_time`]
/// for the inverse.
pub fn format_date_time<Tz: TimeZone>(date: &DateTime<Tz>) -> String {
    date.naive_local().format(EN_US_FORMAT).to_string()
}

/// Parses a date-time previously produced by [`format_date_time`].
///
/// # Errors
///
/// Returns [`CalendarError::ParseDate`] if the input does not match the
/// `M/D/YYYY, h:mm:ss AM/PM` shape.
pub fn parse_date_time(input: &str) -> Result<NaiveDateTime, CalendarError> {
    NaiveDateTime::parse_from_str(input, EN_US_PARSE_FORMAT).map_err(|_| {
        CalendarError::ParseDate {
            input: input.to_string(),
            format: EN_US_PARSE_FORMAT,
        }
    })
}

/// Parses a day-first `DD-MM-YYYY` date.
///
/// # Errors
///
/// Returns [`CalendarError::ParseDate`] if the input does not match
/// [`DAY_FIRST_FORMAT`].
pub fn parse_day_first(input: &str) -> Result<NaiveDate, CalendarError> {
    NaiveDate::parse_from_str(input, DAY_FIRST_FORMAT).map_err(|_| CalendarError::ParseDate {
        input: input.to_string(),
        format: DAY_FIRST_FORMAT,
    })
}

/// Formats a date in the day-first `DD-MM-YYYY` wire format.
pub fn format_day_first(date: NaiveDate) -> String {
    date.format(DAY_FIRST_FORMAT).to_string()
}
