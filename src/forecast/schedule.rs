//! Expansion of income and fixed-expense records into dated cash events.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::DateWindow;
use crate::domain::{Expense, Income};
use crate::errors::ForecastError;
use crate::payday::paydays_between;
use crate::utils::calendar::day_in_shifted_month;

/// Upper bound on monthly occurrences generated per fixed expense.
pub const MAX_MONTHLY_OCCURRENCES: usize = 12;

const INCOME_EVENT_NAME: &str = "Salary";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Income,
    Expense,
}

/// One dated cash movement. Income is positive, expenses negative.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScheduledEvent {
    pub date: NaiveDate,
    pub kind: EventKind,
    pub name: String,
    pub signed_amount: f64,
    pub source_id: Uuid,
}

/// Events grouped by day; same-day events keep their insertion order.
pub type EventSchedule = BTreeMap<NaiveDate, Vec<ScheduledEvent>>;

/// Schedules every payday of every income and every due date of every fixed expense.
///
/// Incomes are listed before expenses on a shared day. Variable expenses and fixed
/// expenses without a due day produce nothing.
pub fn build_schedule(
    incomes: &[Income],
    expenses: &[Expense],
    window: DateWindow,
) -> Result<EventSchedule, ForecastError> {
    let mut schedule = EventSchedule::new();

    for income in incomes {
        let pay_schedule = income.schedule()?;
        let paydays = paydays_between(window.start, window.end, pay_schedule);
        tracing::debug!(
            schedule = %pay_schedule.label(),
            paydays = paydays.len(),
            "scheduled income"
        );
        for date in paydays {
            push(
                &mut schedule,
                ScheduledEvent {
                    date,
                    kind: EventKind::Income,
                    name: INCOME_EVENT_NAME.into(),
                    signed_amount: income.amount,
                    source_id: income.id,
                },
            );
        }
    }

    for expense in expenses {
        let Some(due_day) = expense.scheduled_day() else {
            continue;
        };
        for date in monthly_due_dates(window.start, window.end, due_day) {
            push(
                &mut schedule,
                ScheduledEvent {
                    date,
                    kind: EventKind::Expense,
                    name: expense.name.clone(),
                    signed_amount: -expense.amount,
                    source_id: expense.id,
                },
            );
        }
    }

    tracing::debug!(
        days = schedule.len(),
        events = schedule.values().map(Vec::len).sum::<usize>(),
        "built cash event schedule"
    );
    Ok(schedule)
}

/// Dates in `[from, to]` falling on `day` of each month, clamped in short months.
///
/// Starts in `from`'s month, or the next one when that date has already passed,
/// and re-anchors on `day` every month so a 31st never drifts to the 28th.
pub fn monthly_due_dates(from: NaiveDate, to: NaiveDate, day: u32) -> Vec<NaiveDate> {
    let mut dates = Vec::new();
    let mut offset = 0;
    let mut current = day_in_shifted_month(from, offset, day);
    if current < from {
        offset += 1;
        current = day_in_shifted_month(from, offset, day);
    }

    while current <= to && dates.len() < MAX_MONTHLY_OCCURRENCES {
        dates.push(current);
        offset += 1;
        current = day_in_shifted_month(from, offset, day);
    }

    dates
}

fn push(schedule: &mut EventSchedule, event: ScheduledEvent) {
    schedule.entry(event.date).or_default().push(event);
}
