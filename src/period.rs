//! Inclusive date ranges and day spans.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

const MILLIS_PER_DAY: i64 = 86_400_000;

/// An inclusive range of instants.
///
/// Both bounds belong to the period; `contains` is closed on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Period {
    /// First instant of the period.
    pub start: NaiveDateTime,
    /// Last instant of the period.
    pub end: NaiveDateTime,
}

impl Period {
    /// Creates a period from two instants.
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    /// Creates a period spanning two calendar days, both at midnight.
    pub fn from_dates(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start: start.and_time(NaiveTime::MIN),
            end: end.and_time(NaiveTime::MIN),
        }
    }

    /// Returns `true` if `date` lies within the period, bounds included.
    pub fn contains(&self, date: NaiveDateTime) -> bool {
        self.start <= date && date <= self.end
    }

    /// Returns the inclusive day count between the period's bounds.
    pub fn day_count(&self) -> i64 {
        days_spanned(self.start, self.end)
    }
}

/// Returns the inclusive number of calendar days covered by two instants,
/// regardless of their order.
///
/// The difference is taken as an absolute value and floored to whole days
/// before the inclusive `+ 1`, so two instants on the same day span 1 day
/// and partial days do not count.
pub fn days_spanned(a: NaiveDateTime, b: NaiveDateTime) -> i64 {
    (a - b).num_milliseconds().abs() / MILLIS_PER_DAY + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at_midnight(year: i32, month: u32, day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_time(NaiveTime::MIN)
    }

    #[test]
    fn same_instant_spans_one_day() {
        let d = at_midnight(2023, 6, 15);
        assert_eq!(days_spanned(d, d), 1);
    }

    #[test]
    fn one_week_inclusive() {
        assert_eq!(
            days_spanned(at_midnight(2023, 1, 1), at_midnight(2023, 1, 7)),
            7
        );
    }

    #[test]
    fn order_independent() {
        let a = at_midnight(2023, 1, 1);
        let b = at_midnight(2023, 3, 15);
        assert_eq!(days_spanned(a, b), days_spanned(b, a));
    }

    #[test]
    fn partial_days_are_floored() {
        let a = at_midnight(2023, 1, 1);
        let b = NaiveDate::from_ymd_opt(2023, 1, 2)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        // 1.5 days of difference floor to 1, plus the inclusive day.
        assert_eq!(days_spanned(a, b), 2);
    }

    #[test]
    fn crosses_leap_day() {
        assert_eq!(
            days_spanned(at_midnight(2024, 2, 28), at_midnight(2024, 3, 1)),
            3
        );
    }

    #[test]
    fn crosses_year_boundary() {
        assert_eq!(
            days_spanned(at_midnight(2022, 12, 30), at_midnight(2023, 1, 2)),
            4
        );
    }

    #[test]
    fn contains_is_inclusive_at_both_ends() {
        let period = Period::from_dates(
            NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2023, 1, 31).unwrap(),
        );
        assert!(period.contains(period.start));
        assert!(period.contains(period.end));
    }

    #[test]
    fn contains_interior_and_exterior() {
        let period = Period::from_dates(
            NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2023, 1, 31).unwrap(),
        );
        assert!(period.contains(at_midnight(2023, 1, 15)));
        assert!(!period.contains(at_midnight(2022, 12, 31)));
        assert!(!period.contains(at_midnight(2023, 2, 1)));
    }

    #[test]
    fn contains_respects_time_of_day() {
        let period = Period::from_dates(
            NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2023, 1, 31).unwrap(),
        );
        // One second past the end bound is outside.
        let just_after = NaiveDate::from_ymd_opt(2023, 1, 31)
            .unwrap()
            .and_hms_opt(0, 0, 1)
            .unwrap();
        assert!(!period.contains(just_after));
    }

    #[test]
    fn day_count_matches_days_spanned() {
        let period = Period::from_dates(
            NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2023, 1, 7).unwrap(),
        );
        assert_eq!(period.day_count(), 7);
    }

    #[test]
    fn copy_trait() {
        fn assert_copy<T: Copy>() {}
        assert_copy::<Period>();
    }
}
