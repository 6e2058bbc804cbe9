//! Monthly bill-payment tracking on top of expense records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Expense;

/// A recorded payment of an expense for one calendar month.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExpensePayment {
    pub id: Uuid,
    pub expense_id: Uuid,
    pub month: u32,
    pub year: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paid_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl ExpensePayment {
    pub fn new(expense_id: Uuid, month: u32, year: i32) -> Self {
        Self {
            id: Uuid::new_v4(),
            expense_id,
            month,
            year,
            paid_date: None,
            actual_amount: None,
            notes: None,
        }
    }

    pub fn paid_on(mut self, date: NaiveDate, amount: f64) -> Self {
        self.paid_date = Some(date);
        self.actual_amount = Some(amount);
        self
    }

    fn covers(&self, expense_id: Uuid, month: u32, year: i32) -> bool {
        self.expense_id == expense_id && self.month == month && self.year == year
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BillStatus {
    pub expense_id: Uuid,
    pub name: String,
    pub amount: f64,
    pub paid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paid_amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paid_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BillTrackerSummary {
    pub month: u32,
    pub year: i32,
    pub bills: Vec<BillStatus>,
    pub paid_total: f64,
    pub unpaid_total: f64,
}

/// Paid/unpaid state of every expense for `month` of `year`.
///
/// A paid bill contributes its recorded amount to `paid_total`, falling back to
/// the expense amount when no actual amount was captured.
pub fn bill_status(
    expenses: &[Expense],
    payments: &[ExpensePayment],
    month: u32,
    year: i32,
) -> BillTrackerSummary {
    let mut bills = Vec::with_capacity(expenses.len());
    let mut paid_total = 0.0;
    let mut unpaid_total = 0.0;

    for expense in expenses {
        let payment = payments
            .iter()
            .find(|payment| payment.covers(expense.id, month, year));
        let paid_amount = payment.map(|p| p.actual_amount.unwrap_or(expense.amount));
        match paid_amount {
            Some(amount) => paid_total += amount,
            None => unpaid_total += expense.amount,
        }
        bills.push(BillStatus {
            expense_id: expense.id,
            name: expense.name.clone(),
            amount: expense.amount,
            paid: payment.is_some(),
            paid_amount,
            paid_date: payment.and_then(|p| p.paid_date),
        });
    }

    BillTrackerSummary {
        month,
        year,
        bills,
        paid_total,
        unpaid_total,
    }
}
