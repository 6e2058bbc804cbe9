#![doc(test(attr(deny(warnings))))]

//! Payday Forecast projects a daily cash balance up to the next payday, derives
//! a conservative safe-to-spend figure, and turns the result into a rule-based
//! allocation of the monthly surplus.
//!
//! Every entry point is a pure function of its inputs; the caller supplies
//! "today" and the stored income, expense and goal records.

pub mod config;
pub mod domain;
pub mod errors;
pub mod forecast;
pub mod payday;
pub mod recommendation;
pub mod simulation;
pub mod utils;

pub use config::{ConfigManager, EngineConfig};
pub use errors::ForecastError;
pub use forecast::{
    forecast_until_next_payday, run_forecast, DailyBalance, ForecastEngine, ForecastInput,
    ForecastResult,
};
pub use payday::{
    current_cutoff_period, days_until_next_payday, next_payday, paydays_between, PaydayRule,
    PaydaySchedule,
};
pub use recommendation::{
    generate_recommendations, get_health_score_label, AllocationRecommendation,
    RecommendationEngine, RecommendationInput,
};
pub use simulation::{compare_what_if, run_what_if_scenario, WhatIfComparison};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Payday Forecast tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
        super::init();
    }
}
