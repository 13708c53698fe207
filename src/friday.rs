//! Forward weekday search and Friday-the-13th search.

use chrono::{Datelike, Duration, Months, NaiveDate, Weekday};
use tracing::debug;

use crate::error::CalendarError;

/// Upper bound on the Friday-the-13th month scan.
///
/// The Gregorian calendar produces a Friday the 13th at least once every
/// 84 months; a scan that reaches this bound reports
/// [`CalendarError::SearchExhausted`].
pub const FRIDAY_13TH_SEARCH_MONTHS: u32 = 120;

/// Returns the first `target` weekday strictly after `from`.
///
/// The gap is always 1..=7 days: asking for the weekday `from` already has
/// yields the same weekday one week later.
pub fn next_weekday(from: NaiveDate, target: Weekday) -> NaiveDate {
    let from_w = from.weekday().num_days_from_monday() as i64;
    let target_w = target.num_days_from_monday() as i64;
    let mut gap = (7 + target_w - from_w) % 7;
    if gap == 0 {
        gap = 7;
    }
    from + Duration::days(gap)
}

/// Returns the first Friday strictly after `from`.
pub fn next_friday(from: NaiveDate) -> NaiveDate {
    next_weekday(from, Weekday::Fri)
}

/// Returns the first 13th of a month strictly after `from` that falls on
/// a Friday.
///
/// The scan pins the day-of-month to 13 and advances one calendar month at
/// a time, so December rolls over into January of the next year through
/// ordinary calendar arithmetic.
///
/// # Errors
///
/// Returns [`CalendarError::DateOutOfRange`] if the scan runs past the
/// representable year range, and [`CalendarError::SearchExhausted`] if no
/// match is found within [`FRIDAY_13TH_SEARCH_MONTHS`].
pub fn next_friday_the_13th(from: NaiveDate) -> Result<NaiveDate, CalendarError> {
    let mut candidate = from.with_day(13).expect("every month has a 13th");
    for scanned in 0..FRIDAY_13TH_SEARCH_MONTHS {
        if candidate > from && candidate.weekday() == Weekday::Fri {
            debug!(scanned, %candidate, "matched a Friday the 13th");
            return Ok(candidate);
        }
        candidate = candidate
            .checked_add_months(Months::new(1))
            .ok_or(CalendarError::DateOutOfRange {
                year: candidate.year(),
                month: candidate.month(),
                day: 13,
            })?;
    }
    Err(CalendarError::SearchExhausted {
        months: FRIDAY_13TH_SEARCH_MONTHS,
    })
}
