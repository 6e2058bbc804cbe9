use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::errors::ForecastError;
use crate::utils::calendar::{checked_day_in_shifted_month, days_between};

/// Longest supported window, in months; `end` must fall strictly before `start` plus this.
pub const MAX_WINDOW_MONTHS: i32 = 12;

/// Inclusive calendar range a forecast walks over.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    /// Builds a window, rejecting ranges of twelve months or more.
    ///
    /// An `end` before `start` is accepted and yields an empty window.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, ForecastError> {
        let limit = checked_day_in_shifted_month(start, MAX_WINDOW_MONTHS, start.day());
        if limit.is_some_and(|limit| end >= limit) {
            return Err(ForecastError::WindowTooLong {
                from: start,
                to: end,
            });
        }
        Ok(Self { start, end })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    pub fn is_empty(&self) -> bool {
        self.end < self.start
    }

    /// Number of calendar days covered, both ends included.
    pub fn len_days(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            days_between(self.start, self.end) as usize + 1
        }
    }

    /// Each day of the window in order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |day| *day <= end)
    }
}
