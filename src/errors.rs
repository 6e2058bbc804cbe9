use chrono::NaiveDate;
use thiserror::Error;

/// Error type that captures forecasting and configuration failures.
#[derive(Debug, Error)]
pub enum ForecastError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Forecast window {from} to {to} spans twelve months or more")]
    WindowTooLong { from: NaiveDate, to: NaiveDate },
    #[error("No income sources to derive a payday from")]
    NoIncome,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}
