//! Gregorian leap-year rule.

use chrono::{Datelike, NaiveDate};

/// Returns `true` if the date falls in a Gregorian leap year.
///
/// A year is a leap year when it is divisible by 4, except century years,
/// which must be divisible by 400.
pub fn is_leap_year(date: NaiveDate) -> bool {
    leap_year(date.year())
}

/// The year-level rule, shared with month-length computation.
pub(crate) fn leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}
