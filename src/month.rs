//! Month lengths, weekend counts, and quarters.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::error::CalendarError;
use crate::year::leap_year;

/// Returns the number of days in a month, leap-year aware.
///
/// `month` is 1-based and deliberately unclamped: values outside 1..=12
/// roll over into adjacent years, so month 0 is December of `year - 1`,
/// month 13 is January of `year + 1`, and month 14 is the following
/// February. Callers use this to step across year boundaries without
/// adjusting the year themselves.
///
/// # Example
///
/// ```ignore
/// assert_eq!(days_in_month(2024, 2), 29);
/// assert_eq!(days_in_month(2023, 0), 31);  // December 2022
/// assert_eq!(days_in_month(2023, 14), 29); // February 2024
/// ```
pub fn days_in_month(year: i32, month: i32) -> u32 {
    let zero_based = month - 1;
    let year = year + zero_based.div_euclid(12);
    match zero_based.rem_euclid(12) + 1 {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        _ => {
            if leap_year(year) {
                29
            } else {
                28
            }
        }
    }
}

/// Counts the Saturdays and Sundays in a month by visiting every day.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] if `month` is outside 1..=12.
/// Returns [`CalendarError::DateOutOfRange`] if `year` is outside the
/// representable range.
pub fn weekend_days_in_month(year: i32, month: u32) -> Result<u32, CalendarError> {
    if !(1..=12).contains(&month) {
        return Err(CalendarError::InvalidMonth { month });
    }
    let mut count = 0;
    for day in 1..=days_in_month(year, month as i32) {
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or(CalendarError::DateOutOfRange { year, month, day })?;
        if matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
            count += 1;
        }
    }
    Ok(count)
}

/// Returns the quarter (1..=4) the date falls in.
pub fn quarter(date: NaiveDate) -> u32 {
    (date.month() - 1) / 3 + 1
}
