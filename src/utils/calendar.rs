//! Month arithmetic on immutable `NaiveDate` values.
//!
//! Every helper returns a fresh date; day-of-month requests that overflow a short
//! month are clamped to that month's last day instead of rolling into the next one.

use chrono::{Datelike, NaiveDate};

/// Number of calendar days in `month` (1-based) of `year`.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Builds `day` of the given month, clamping to the month's last day.
///
/// Saturates at `NaiveDate::MAX` outside chrono's supported year range.
pub fn clamped_date(year: i32, month: u32, day: u32) -> NaiveDate {
    let day = day.clamp(1, days_in_month(year, month).max(1));
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MAX)
}

/// Last calendar day of the month containing `date`.
pub fn last_day_of_month(date: NaiveDate) -> NaiveDate {
    clamped_date(date.year(), date.month(), 31)
}

/// Shifts a `(year, month)` pair by `months`, which may be negative.
pub fn shift_month(year: i32, month: u32, months: i32) -> (i32, u32) {
    let index = year * 12 + month as i32 - 1 + months;
    (index.div_euclid(12), index.rem_euclid(12) as u32 + 1)
}

/// `day` of the month `months` after the month containing `date`, clamped.
pub fn day_in_shifted_month(date: NaiveDate, months: i32, day: u32) -> NaiveDate {
    checked_day_in_shifted_month(date, months, day).unwrap_or(NaiveDate::MAX)
}

/// Like [`day_in_shifted_month`], but `None` past chrono's supported range.
pub fn checked_day_in_shifted_month(date: NaiveDate, months: i32, day: u32) -> Option<NaiveDate> {
    let (year, month) = shift_month(date.year(), date.month(), months);
    let day = day.clamp(1, days_in_month(year, month).max(1));
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Whole days from `from` to `to`; negative when `to` precedes `from`.
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}
