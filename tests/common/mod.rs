#![allow(dead_code)]

use chrono::NaiveDate;
use payday_forecast::domain::{Expense, ExpensePriority, Income};
use payday_forecast::ForecastInput;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

/// Semi-monthly salary with rent, bills and a variable grocery budget.
pub fn household_input(from: NaiveDate, to: NaiveDate) -> ForecastInput {
    ForecastInput::new(10_000.0, from, to)
        .with_incomes(vec![Income::semi_monthly(15_000.0)])
        .with_expenses(vec![
            Expense::fixed("Rent", 8_000.0, ExpensePriority::Needs, 1),
            Expense::fixed("Electricity", 2_500.0, ExpensePriority::Needs, 12),
            Expense::fixed("Streaming", 550.0, ExpensePriority::Wants, 28),
            Expense::variable("Groceries", 6_000.0, ExpensePriority::Needs),
        ])
}
