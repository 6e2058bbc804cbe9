//! Payday date arithmetic for semi-monthly cutoff and fixed-day pay schedules.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::errors::ForecastError;
use crate::utils::calendar::{
    clamped_date, day_in_shifted_month, days_between, days_in_month, last_day_of_month,
};

/// Upper bound on paydays collected by a single enumeration.
pub const MAX_PAYDAYS: usize = 100;

const CUTOFF_DAY: u32 = 15;

/// Payday rule as stored on an income record.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum PaydayRule {
    /// Paid on the 15th and on the last day of every month.
    #[serde(rename = "15_30", alias = "mid_end_of_month")]
    MidEndOfMonth,
    /// Paid once a month on a chosen day.
    #[serde(rename = "custom")]
    Custom,
}

/// A validated pay schedule; unlike [`PaydayRule`] it cannot be missing its day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaydaySchedule {
    MidEndOfMonth,
    CustomDay(u32),
}

impl PaydaySchedule {
    /// Resolves a stored rule and optional day into a schedule.
    ///
    /// A custom rule without a day in `1..=31` is rejected rather than defaulted.
    pub fn from_rule(rule: PaydayRule, custom_day: Option<u32>) -> Result<Self, ForecastError> {
        match rule {
            PaydayRule::MidEndOfMonth => Ok(Self::MidEndOfMonth),
            PaydayRule::Custom => match custom_day {
                Some(day @ 1..=31) => Ok(Self::CustomDay(day)),
                Some(day) => Err(ForecastError::InvalidConfiguration(format!(
                    "custom payday day must be between 1 and 31, got {day}"
                ))),
                None => Err(ForecastError::InvalidConfiguration(
                    "custom payday rule requires a custom day".into(),
                )),
            },
        }
    }

    pub fn label(&self) -> String {
        match self {
            Self::MidEndOfMonth => "15th and end of month".into(),
            Self::CustomDay(day) => format!("Day {day} of every month"),
        }
    }
}

/// First payday on or after `from` under `schedule`.
///
/// Semi-monthly: the 15th when `from` is on or before it, otherwise the last day
/// of the same month. Custom: the chosen day of this month when `from` is still
/// before it, otherwise of next month. Days past a short month's end are clamped.
pub fn next_payday(from: NaiveDate, schedule: PaydaySchedule) -> NaiveDate {
    match schedule {
        PaydaySchedule::MidEndOfMonth => {
            if from.day() <= CUTOFF_DAY {
                clamped_date(from.year(), from.month(), CUTOFF_DAY)
            } else {
                last_day_of_month(from)
            }
        }
        PaydaySchedule::CustomDay(day) => {
            let effective = day.min(days_in_month(from.year(), from.month()));
            if from.day() < effective {
                clamped_date(from.year(), from.month(), day)
            } else {
                day_in_shifted_month(from, 1, day)
            }
        }
    }
}

/// Every payday in `[start, end]`, ascending, capped at [`MAX_PAYDAYS`].
pub fn paydays_between(
    start: NaiveDate,
    end: NaiveDate,
    schedule: PaydaySchedule,
) -> Vec<NaiveDate> {
    let mut paydays = Vec::new();
    let mut cursor = start;

    while cursor <= end && paydays.len() < MAX_PAYDAYS {
        let payday = next_payday(cursor, schedule);
        if payday > end {
            break;
        }
        paydays.push(payday);
        match payday.succ_opt() {
            Some(next) => cursor = next,
            None => break,
        }
    }

    paydays
}

/// Whole days until the next payday; zero when `from` is itself a payday.
pub fn days_until_next_payday(from: NaiveDate, schedule: PaydaySchedule) -> i64 {
    days_between(from, next_payday(from, schedule))
}

/// Label for the semi-monthly cutoff `date` falls in, e.g. `"January 1-15"`.
pub fn current_cutoff_period(date: NaiveDate) -> String {
    let month = date.format("%B");
    if date.day() <= CUTOFF_DAY {
        format!("{month} 1-15")
    } else {
        format!("{month} 16-End")
    }
}
