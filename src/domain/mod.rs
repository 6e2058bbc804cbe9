//! Plain records supplied by the surrounding application.

pub mod expense;
pub mod goal;
pub mod income;
pub mod payment;

pub use expense::{Expense, ExpensePriority, ExpenseType};
pub use goal::{Goal, GoalType};
pub use income::{monthly_income, Income, IncomeFrequency};
pub use payment::{bill_status, BillStatus, BillTrackerSummary, ExpensePayment};

use crate::errors::ForecastError;

/// Rejects negative and non-finite money amounts.
pub(crate) fn ensure_amount(label: &str, amount: f64) -> Result<(), ForecastError> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(ForecastError::InvalidAmount(format!(
            "{label} must be a non-negative number, got {amount}"
        )));
    }
    Ok(())
}
