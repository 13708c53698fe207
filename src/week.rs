//! ISO-8601 week numbers.

use chrono::{Datelike, NaiveDate};

/// Returns the ISO-8601 week number (1..=53) for a date.
///
/// Week 1 is the week containing the year's first Thursday, so the first
/// days of January can belong to the last week of the previous ISO year.
pub fn iso_week_number(date: NaiveDate) -> u32 {
    date.iso_week().week()
}
