//! What-if runs: the same forecast with money already spent today.

use serde::{Deserialize, Serialize};

use crate::errors::ForecastError;
use crate::forecast::{ForecastEngine, ForecastInput, ForecastResult};

/// Baseline and hypothetical forecasts side by side.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WhatIfComparison {
    pub spend: f64,
    pub baseline: ForecastResult,
    pub scenario: ForecastResult,
    pub ending_balance_delta: f64,
    pub minimum_balance_delta: f64,
    pub safe_to_spend_delta: f64,
    /// The spend pushes a forecast that stayed non-negative below zero.
    pub introduces_negative_balance: bool,
}

impl WhatIfComparison {
    /// Whether the spend stays within the baseline safe-to-spend amount.
    pub fn is_affordable(&self) -> bool {
        self.spend <= self.baseline.safe_to_spend
    }
}

impl ForecastEngine {
    /// Re-runs `base` with `spend` taken off the starting balance.
    pub fn run_what_if(
        &self,
        base: &ForecastInput,
        spend: f64,
    ) -> Result<ForecastResult, ForecastError> {
        if !spend.is_finite() || spend <= 0.0 {
            return Err(ForecastError::InvalidAmount(format!(
                "hypothetical spend must be positive, got {spend}"
            )));
        }
        let scenario = ForecastInput {
            starting_balance: base.starting_balance - spend,
            ..base.clone()
        };
        tracing::debug!(spend, "running what-if scenario");
        self.run(&scenario)
    }

    pub fn compare_what_if(
        &self,
        base: &ForecastInput,
        spend: f64,
    ) -> Result<WhatIfComparison, ForecastError> {
        let scenario = self.run_what_if(base, spend)?;
        let baseline = self.run(base)?;
        Ok(WhatIfComparison {
            spend,
            ending_balance_delta: scenario.ending_balance - baseline.ending_balance,
            minimum_balance_delta: scenario.minimum_balance - baseline.minimum_balance,
            safe_to_spend_delta: scenario.safe_to_spend - baseline.safe_to_spend,
            introduces_negative_balance: scenario.has_negative_balance
                && !baseline.has_negative_balance,
            baseline,
            scenario,
        })
    }
}

/// What-if forecast with the default tunables.
pub fn run_what_if_scenario(
    base: &ForecastInput,
    spend: f64,
) -> Result<ForecastResult, ForecastError> {
    ForecastEngine::new().run_what_if(base, spend)
}

pub fn compare_what_if(
    base: &ForecastInput,
    spend: f64,
) -> Result<WhatIfComparison, ForecastError> {
    ForecastEngine::new().compare_what_if(base, spend)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn input() -> ForecastInput {
        ForecastInput::new(
            2_000.0,
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 6, 10).unwrap(),
        )
    }

    #[test]
    fn rejects_non_positive_spend() {
        assert!(matches!(
            run_what_if_scenario(&input(), 0.0),
            Err(ForecastError::InvalidAmount(_))
        ));
        assert!(run_what_if_scenario(&input(), -10.0).is_err());
        assert!(run_what_if_scenario(&input(), f64::NAN).is_err());
    }

    #[test]
    fn spend_lowers_every_balance() {
        let comparison = compare_what_if(&input(), 2_500.0).unwrap();
        assert_eq!(comparison.ending_balance_delta, -2_500.0);
        assert_eq!(comparison.minimum_balance_delta, -2_500.0);
        assert_eq!(comparison.safe_to_spend_delta, -1_500.0);
        assert!(comparison.introduces_negative_balance);
        assert!(!comparison.is_affordable());
    }
}
