use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ensure_amount;
use crate::errors::ForecastError;
use crate::payday::{PaydayRule, PaydaySchedule};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum IncomeFrequency {
    Monthly,
    /// Paid every cutoff, i.e. twice a month.
    Biweekly,
}

impl IncomeFrequency {
    pub fn payments_per_month(&self) -> f64 {
        match self {
            Self::Monthly => 1.0,
            Self::Biweekly => 2.0,
        }
    }
}

/// A recurring income source. `amount` is paid on every payday of its rule.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Income {
    pub id: Uuid,
    pub amount: f64,
    pub frequency: IncomeFrequency,
    pub payday_rule: PaydayRule,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_day: Option<u32>,
}

impl Income {
    pub fn new(amount: f64, frequency: IncomeFrequency, payday_rule: PaydayRule) -> Self {
        Self {
            id: Uuid::new_v4(),
            amount,
            frequency,
            payday_rule,
            custom_day: None,
        }
    }

    /// Semi-monthly income paid on the 15th and the last day of the month.
    pub fn semi_monthly(amount: f64) -> Self {
        Self::new(amount, IncomeFrequency::Biweekly, PaydayRule::MidEndOfMonth)
    }

    /// Monthly income paid on a fixed day of the month.
    pub fn monthly_on(amount: f64, day: u32) -> Self {
        Self::new(amount, IncomeFrequency::Monthly, PaydayRule::Custom).with_custom_day(day)
    }

    pub fn with_custom_day(mut self, day: u32) -> Self {
        self.custom_day = Some(day);
        self
    }

    /// Validated pay schedule for this income.
    pub fn schedule(&self) -> Result<PaydaySchedule, ForecastError> {
        PaydaySchedule::from_rule(self.payday_rule, self.custom_day)
    }

    pub fn validate(&self) -> Result<(), ForecastError> {
        ensure_amount("income amount", self.amount)?;
        self.schedule().map(|_| ())
    }

    /// Income normalised to one month.
    pub fn monthly_amount(&self) -> f64 {
        self.amount * self.frequency.payments_per_month()
    }
}

/// Sum of the monthly equivalents of every income source.
pub fn monthly_income(incomes: &[Income]) -> f64 {
    incomes.iter().map(Income::monthly_amount).sum()
}
