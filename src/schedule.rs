//! Rotating work-shift schedule generation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::CalendarError;
use crate::format::{format_day_first, parse_day_first};

/// A repeating pattern of consecutive working days followed by consecutive
/// off days.
///
/// Both counts must be at least 1; zero is rejected by the walk functions
/// with [`CalendarError::InvalidCycle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShiftCycle {
    /// Consecutive working days at the start of each cycle.
    pub days_on: u32,
    /// Consecutive off days closing each cycle.
    pub days_off: u32,
}

/// Walks the calendar from `start` to `end` inclusive and collects the
/// working days of a repeating shift cycle.
///
/// The cycle position starts at zero on `start`, advances once per day, and
/// wraps after `days_on + days_off` days, so a new cycle begins the day
/// after the last off day. An inverted range (`start > end`) produces an
/// empty schedule.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidCycle`] if either count is zero.
pub fn shift_days(
    start: NaiveDate,
    end: NaiveDate,
    cycle: ShiftCycle,
) -> Result<Vec<NaiveDate>, CalendarError> {
    if cycle.days_on == 0 || cycle.days_off == 0 {
        return Err(CalendarError::InvalidCycle {
            days_on: cycle.days_on,
            days_off: cycle.days_off,
        });
    }
    let cycle_len = cycle.days_on + cycle.days_off;
    let mut days = Vec::new();
    let mut position = 0;
    let mut current = start;
    while current <= end {
        if position < cycle.days_on {
            days.push(current);
        }
        position = (position + 1) % cycle_len;
        current = match current.succ_opt() {
            Some(next) => next,
            None => break,
        };
    }
    debug!(
        days_on = cycle.days_on,
        days_off = cycle.days_off,
        emitted = days.len(),
        "walked shift cycle"
    );
    Ok(days)
}

/// Generates a work schedule from day-first `DD-MM-YYYY` period bounds.
///
/// Working days are returned in calendar order, formatted `DD-MM-YYYY`.
///
/// # Example
///
/// ```ignore
/// let cycle = ShiftCycle { days_on: 2, days_off: 2 };
/// let schedule = work_schedule("01-01-2023", "07-01-2023", cycle).unwrap();
/// assert_eq!(schedule, ["01-01-2023", "02-01-2023", "05-01-2023", "06-01-2023"]);
/// ```
///
/// # Errors
///
/// Returns [`CalendarError::ParseDate`] if either bound does not match the
/// day-first format, and [`CalendarError::InvalidCycle`] if either cycle
/// count is zero.
pub fn work_schedule(
    start: &str,
    end: &str,
    cycle: ShiftCycle,
) -> Result<Vec<String>, CalendarError> {
    let start = parse_day_first(start)?;
    let end = parse_day_first(end)?;
    Ok(shift_days(start, end, cycle)?
        .into_iter()
        .map(format_day_first)
        .collect())
}
