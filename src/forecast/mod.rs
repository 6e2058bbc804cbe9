//! Day-by-day cash-flow simulation between two dates.

pub mod schedule;
pub mod window;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::{EngineConfig, ForecastSettings};
use crate::domain::{Expense, Income};
use crate::errors::ForecastError;
use crate::payday::next_payday;

pub use schedule::{build_schedule, monthly_due_dates, EventKind, EventSchedule, ScheduledEvent};
pub use window::{DateWindow, MAX_WINDOW_MONTHS};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ForecastInput {
    pub starting_balance: f64,
    pub incomes: Vec<Income>,
    pub expenses: Vec<Expense>,
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
}

impl ForecastInput {
    pub fn new(starting_balance: f64, from_date: NaiveDate, to_date: NaiveDate) -> Self {
        Self {
            starting_balance,
            incomes: Vec::new(),
            expenses: Vec::new(),
            from_date,
            to_date,
        }
    }

    pub fn with_incomes(mut self, incomes: Vec<Income>) -> Self {
        self.incomes = incomes;
        self
    }

    pub fn with_expenses(mut self, expenses: Vec<Expense>) -> Self {
        self.expenses = expenses;
        self
    }

    fn validate(&self) -> Result<(), ForecastError> {
        if !self.starting_balance.is_finite() {
            return Err(ForecastError::InvalidAmount(format!(
                "starting balance must be finite, got {}",
                self.starting_balance
            )));
        }
        for income in &self.incomes {
            income.validate()?;
        }
        for expense in &self.expenses {
            expense.validate()?;
        }
        Ok(())
    }
}

/// A cash event as it appears in the daily ledger.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ForecastEvent {
    pub kind: EventKind,
    pub name: String,
    pub amount: f64,
    pub source_id: Uuid,
}

impl From<ScheduledEvent> for ForecastEvent {
    fn from(event: ScheduledEvent) -> Self {
        Self {
            kind: event.kind,
            name: event.name,
            amount: event.signed_amount,
            source_id: event.source_id,
        }
    }
}

/// Balance at the close of one day, after that day's events.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailyBalance {
    pub date: NaiveDate,
    pub balance: f64,
    pub events: Vec<ForecastEvent>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ForecastResult {
    pub daily_balances: Vec<DailyBalance>,
    pub ending_balance: f64,
    pub minimum_balance: f64,
    pub safe_to_spend: f64,
    pub has_negative_balance: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub negative_balance_date: Option<NaiveDate>,
}

impl ForecastResult {
    pub fn last_date(&self) -> Option<NaiveDate> {
        self.daily_balances.last().map(|day| day.date)
    }

    pub fn balance_on(&self, date: NaiveDate) -> Option<f64> {
        self.daily_balances
            .iter()
            .find(|day| day.date == date)
            .map(|day| day.balance)
    }
}

/// Runs forecasts with a fixed set of tunables.
#[derive(Debug, Clone, Default)]
pub struct ForecastEngine {
    settings: ForecastSettings,
}

impl ForecastEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: &EngineConfig) -> Self {
        Self {
            settings: config.forecast.clone(),
        }
    }

    pub fn safety_buffer(&self) -> f64 {
        self.settings.safety_buffer
    }

    /// Simulates the running balance over `[from_date, to_date]`.
    ///
    /// Safe-to-spend is the lowest balance reached anywhere in the window, starting
    /// balance included, less the safety buffer, floored at zero. A reversed window
    /// produces an empty ledger that ends on the starting balance.
    pub fn run(&self, input: &ForecastInput) -> Result<ForecastResult, ForecastError> {
        input.validate()?;
        let window = DateWindow::new(input.from_date, input.to_date)?;
        let mut schedule = build_schedule(&input.incomes, &input.expenses, window)?;

        let mut daily_balances = Vec::with_capacity(window.len_days());
        let mut balance = input.starting_balance;
        let mut minimum_balance = balance;
        let mut negative_balance_date = None;

        for date in window.days() {
            let scheduled = schedule.remove(&date).unwrap_or_default();
            let mut events = Vec::with_capacity(scheduled.len());
            for event in scheduled {
                balance += event.signed_amount;
                events.push(ForecastEvent::from(event));
            }

            daily_balances.push(DailyBalance {
                date,
                balance,
                events,
            });

            if balance < minimum_balance {
                minimum_balance = balance;
            }
            if balance < 0.0 && negative_balance_date.is_none() {
                negative_balance_date = Some(date);
            }
        }

        let safe_to_spend = (minimum_balance - self.settings.safety_buffer).max(0.0);

        if let Some(date) = negative_balance_date {
            tracing::warn!(%date, minimum_balance, "forecast projects a negative balance");
        }
        tracing::info!(
            from = %input.from_date,
            to = %input.to_date,
            days = daily_balances.len(),
            ending_balance = balance,
            minimum_balance,
            safe_to_spend,
            "forecast complete"
        );

        Ok(ForecastResult {
            daily_balances,
            ending_balance: balance,
            minimum_balance,
            safe_to_spend,
            has_negative_balance: negative_balance_date.is_some(),
            negative_balance_date,
        })
    }

    /// Forecasts from `today` through the earliest upcoming payday of any income.
    pub fn run_until_next_payday(
        &self,
        today: NaiveDate,
        starting_balance: f64,
        incomes: &[Income],
        expenses: &[Expense],
    ) -> Result<ForecastResult, ForecastError> {
        let to_date = earliest_next_payday(today, incomes)?;
        let input = ForecastInput {
            starting_balance,
            incomes: incomes.to_vec(),
            expenses: expenses.to_vec(),
            from_date: today,
            to_date,
        };
        self.run(&input)
    }
}

/// Earliest next payday across all income sources.
pub fn earliest_next_payday(
    today: NaiveDate,
    incomes: &[Income],
) -> Result<NaiveDate, ForecastError> {
    let mut earliest: Option<NaiveDate> = None;
    for income in incomes {
        let payday = next_payday(today, income.schedule()?);
        earliest = Some(earliest.map_or(payday, |current| current.min(payday)));
    }
    earliest.ok_or(ForecastError::NoIncome)
}

/// Runs a forecast with the default tunables.
pub fn run_forecast(input: &ForecastInput) -> Result<ForecastResult, ForecastError> {
    ForecastEngine::new().run(input)
}

/// Forecasts from `today` until the next payday with the default tunables.
pub fn forecast_until_next_payday(
    today: NaiveDate,
    starting_balance: f64,
    incomes: &[Income],
    expenses: &[Expense],
) -> Result<ForecastResult, ForecastError> {
    ForecastEngine::new().run_until_next_payday(today, starting_balance, incomes, expenses)
}
