use almanac::{days_spanned, Period, ShiftCycle};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

fn midnight(year: i32, month: u32, day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_time(NaiveTime::MIN)
}

#[test]
fn span_is_order_independent() {
    let a = midnight(2023, 1, 1);
    let b = midnight(2023, 6, 30);
    assert_eq!(days_spanned(a, b), days_spanned(b, a));
}

#[test]
fn span_counts_both_ends() {
    assert_eq!(days_spanned(midnight(2024, 1, 1), midnight(2024, 1, 31)), 31);
    assert_eq!(days_spanned(midnight(2024, 2, 1), midnight(2024, 2, 29)), 29);
}

#[test]
fn period_bounds_are_inside() {
    let period = Period::new(midnight(2023, 3, 1), midnight(2023, 3, 31));
    assert!(period.contains(period.start));
    assert!(period.contains(period.end));
}

#[test]
fn day_count_of_a_leap_february() {
    let period = Period::from_dates(
        NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
        NaiveDate::from_ymd_opt(2024, 2, 29).unwrap(),
    );
    assert_eq!(period.day_count(), 29);
}

#[test]
fn period_serde_round_trip() {
    let period = Period::from_dates(
        NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
        NaiveDate::from_ymd_opt(2023, 12, 31).unwrap(),
    );
    let json = serde_json::to_string(&period).unwrap();
    let back: Period = serde_json::from_str(&json).unwrap();
    assert_eq!(back, period);
}

#[test]
fn shift_cycle_serde_round_trip() {
    let cycle = ShiftCycle {
        days_on: 4,
        days_off: 3,
    };
    let json = serde_json::to_string(&cycle).unwrap();
    assert_eq!(json, r#"{"days_on":4,"days_off":3}"#);
    let back: ShiftCycle = serde_json::from_str(&json).unwrap();
    assert_eq!(back, cycle);
}
