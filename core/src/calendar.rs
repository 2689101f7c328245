//! Calendar builder — the daily date spine every other table hangs off.
//!
//! One row per day in [start, end], contiguous, no gaps, no randomness.
//! `date_key` (YYYYMMDD) is a strictly increasing bijection with the date.

use crate::error::{GenError, GenResult};
use crate::types::DateKey;
use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarDay {
    pub date_key: DateKey,
    pub date: NaiveDate,
    pub day: u32,
    pub month: u32,
    pub quarter: u32,
    pub year: i32,
    /// Monday = 0 .. Sunday = 6.
    pub weekday: u32,
    pub is_month_end: bool,
}

/// The full spine plus month-level lookup tables used by the samplers.
#[derive(Debug, Clone, PartialEq)]
pub struct Calendar {
    days: Vec<CalendarDay>,
    keys_by_month: BTreeMap<(i32, u32), Vec<DateKey>>,
    month_end_by_month: BTreeMap<(i32, u32), DateKey>,
}

pub fn date_key_of(date: NaiveDate) -> DateKey {
    date.year() as DateKey * 10_000 + date.month() * 100 + date.day()
}

pub fn quarter_of_month(month: u32) -> u32 {
    (month - 1) / 3 + 1
}

impl Calendar {
    pub fn build(start: NaiveDate, end: NaiveDate) -> GenResult<Self> {
        if start > end {
            return Err(GenError::InvalidDateRange { start, end });
        }

        let mut days = Vec::with_capacity((end - start).num_days() as usize + 1);
        let mut keys_by_month: BTreeMap<(i32, u32), Vec<DateKey>> = BTreeMap::new();
        let mut month_end_by_month = BTreeMap::new();

        let mut date = start;
        while date <= end {
            let next = date + Duration::days(1);
            let is_month_end = next.month() != date.month();
            let date_key = date_key_of(date);

            days.push(CalendarDay {
                date_key,
                date,
                day: date.day(),
                month: date.month(),
                quarter: quarter_of_month(date.month()),
                year: date.year(),
                weekday: date.weekday().num_days_from_monday(),
                is_month_end,
            });

            keys_by_month
                .entry((date.year(), date.month()))
                .or_default()
                .push(date_key);
            if is_month_end {
                month_end_by_month.insert((date.year(), date.month()), date_key);
            }

            date = next;
        }

        Ok(Self {
            days,
            keys_by_month,
            month_end_by_month,
        })
    }

    pub fn days(&self) -> &[CalendarDay] {
        &self.days
    }

    pub fn start(&self) -> NaiveDate {
        self.days[0].date
    }

    pub fn end(&self) -> NaiveDate {
        self.days[self.days.len() - 1].date
    }

    /// All date keys belonging to (year, month), or None if the month is
    /// outside the spine.
    pub fn date_keys_in_month(&self, year: i32, month: u32) -> Option<&[DateKey]> {
        self.keys_by_month.get(&(year, month)).map(Vec::as_slice)
    }

    /// The `is_month_end` date key of (year, month), if the spine covers
    /// that month's last day.
    pub fn month_end(&self, year: i32, month: u32) -> Option<DateKey> {
        self.month_end_by_month.get(&(year, month)).copied()
    }
}
