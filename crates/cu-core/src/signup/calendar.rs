//! Proleptic Gregorian calendar helpers.

use chrono::{Datelike, NaiveDate};

/// Number of days in `month` of `year`.
///
/// Computed as the day before the first of the following month, so December
/// rolls over into January of the next year. Returns `None` when `month` is
/// outside `1..=12` or the year is outside the supported date range.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    if !(1..=12).contains(&month) {
        return None;
    }
    let (next_year, next_month) = if month == 12 {
        (year.checked_add(1)?, 1)
    } else {
        (year, month + 1)
    };
    let first_of_next = NaiveDate::from_ymd_opt(next_year, next_month, 1)?;
    first_of_next.pred_opt().map(|last| last.day())
}

pub fn is_leap_year(year: i32) -> bool {
    NaiveDate::from_ymd_opt(year, 2, 29).is_some()
}
