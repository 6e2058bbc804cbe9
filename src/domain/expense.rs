use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ensure_amount;
use crate::errors::ForecastError;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ExpenseType {
    /// Recurs on `due_day` every month and is scheduled by the forecast.
    Fixed,
    /// Tracked manually; never scheduled.
    Variable,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ExpensePriority {
    Needs,
    Wants,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Expense {
    pub id: Uuid,
    pub name: String,
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: ExpenseType,
    pub priority: ExpensePriority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_day: Option<u32>,
}

impl Expense {
    pub fn new(
        name: impl Into<String>,
        amount: f64,
        kind: ExpenseType,
        priority: ExpensePriority,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            amount,
            kind,
            priority,
            due_day: None,
        }
    }

    pub fn fixed(
        name: impl Into<String>,
        amount: f64,
        priority: ExpensePriority,
        due_day: u32,
    ) -> Self {
        let mut expense = Self::new(name, amount, ExpenseType::Fixed, priority);
        expense.due_day = Some(due_day);
        expense
    }

    pub fn variable(name: impl Into<String>, amount: f64, priority: ExpensePriority) -> Self {
        Self::new(name, amount, ExpenseType::Variable, priority)
    }

    pub fn is_needs(&self) -> bool {
        self.priority == ExpensePriority::Needs
    }

    /// Due day when this expense takes part in forecast scheduling.
    pub fn scheduled_day(&self) -> Option<u32> {
        match self.kind {
            ExpenseType::Fixed => self.due_day,
            ExpenseType::Variable => None,
        }
    }

    pub fn validate(&self) -> Result<(), ForecastError> {
        ensure_amount("expense amount", self.amount)?;
        match self.due_day {
            Some(day) if !(1..=31).contains(&day) => Err(ForecastError::InvalidConfiguration(
                format!("expense `{}` has due day {day} outside 1-31", self.name),
            )),
            _ => Ok(()),
        }
    }
}
