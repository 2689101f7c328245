use chrono::{Datelike, NaiveDate};
use synthfin_core::calendar::Calendar;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

/// One row per day in [start, end], no gaps: (end - start).days + 1 rows.
#[test]
fn spine_is_complete_for_the_full_span() {
    let start = d(2020, 1, 1);
    let end = d(2024, 12, 31);
    let cal = Calendar::build(start, end).unwrap();

    assert_eq!(cal.days().len(), (end - start).num_days() as usize + 1);
    assert_eq!(cal.days()[0].date, start);
    assert_eq!(cal.days().last().unwrap().date, end);
}

/// date_key is a strictly increasing bijection with the calendar date.
#[test]
fn date_keys_strictly_increase() {
    let cal = Calendar::build(d(2020, 1, 1), d(2021, 12, 31)).unwrap();

    for pair in cal.days().windows(2) {
        assert!(pair[0].date_key < pair[1].date_key);
        assert_eq!(pair[1].date, pair[0].date + chrono::Duration::days(1));
    }
}

/// is_month_end is set exactly on the last calendar day of each month.
#[test]
fn month_end_flags_are_exact() {
    let cal = Calendar::build(d(2020, 1, 1), d(2020, 12, 31)).unwrap();

    for pair in cal.days().windows(2) {
        let ends_month = pair[1].month != pair[0].month;
        assert_eq!(pair[0].is_month_end, ends_month, "at {}", pair[0].date);
    }
    // Final day of the span is December 31st, a month end.
    assert!(cal.days().last().unwrap().is_month_end);

    let month_ends = cal.days().iter().filter(|day| day.is_month_end).count();
    assert_eq!(month_ends, 12);
    assert_eq!(cal.month_end(2020, 2), Some(20200229)); // leap year
}

/// Weekday attribute uses Monday = 0.
#[test]
fn weekday_is_monday_based() {
    // 2024-01-01 was a Monday.
    let cal = Calendar::build(d(2024, 1, 1), d(2024, 1, 7)).unwrap();
    let weekdays: Vec<u32> = cal.days().iter().map(|day| day.weekday).collect();
    assert_eq!(weekdays, [0, 1, 2, 3, 4, 5, 6]);
    assert_eq!(cal.days()[0].date.weekday(), chrono::Weekday::Mon);
}

/// A single-day spine is valid and flags month end correctly.
#[test]
fn single_day_spine() {
    let cal = Calendar::build(d(2022, 6, 30), d(2022, 6, 30)).unwrap();
    assert_eq!(cal.days().len(), 1);
    assert!(cal.days()[0].is_month_end);
}
