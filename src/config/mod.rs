//! Engine tunables and their JSON persistence.

use serde::{Deserialize, Serialize};
use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::errors::ForecastError;
use crate::recommendation::HealthBand;

const APP_DIR: &str = "payday_forecast";
const CONFIG_FILE: &str = "engine.json";
const TMP_SUFFIX: &str = "tmp";

/// Per health band values, e.g. the share of surplus routed to the emergency fund.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BandFractions {
    pub critical: f64,
    pub building: f64,
    pub good: f64,
    pub excellent: f64,
}

impl BandFractions {
    pub fn for_band(&self, band: HealthBand) -> f64 {
        match band {
            HealthBand::Critical => self.critical,
            HealthBand::Building => self.building,
            HealthBand::Good => self.good,
            HealthBand::Excellent => self.excellent,
        }
    }

    fn values(&self) -> [f64; 4] {
        [self.critical, self.building, self.good, self.excellent]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ForecastSettings {
    /// Amount kept untouched below the projected minimum balance.
    pub safety_buffer: f64,
}

impl Default for ForecastSettings {
    fn default() -> Self {
        Self {
            safety_buffer: 500.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AllocationSettings {
    /// Months of `needs` spending used as the derived emergency-fund target.
    pub emergency_fund_months: u32,
    pub emergency_fraction: BandFractions,
    pub savings_fraction: f64,
    pub savings_fraction_when_funded: f64,
    pub investment_fraction: BandFractions,
    pub emergency_score_weight: f64,
    pub savings_score_weight: f64,
    /// Savings rate (percent of income) that earns the full savings score.
    pub savings_rate_target: f64,
    /// Needs ratio (percent of income) scoring the top band.
    pub needs_ratio_target: f64,
    /// Needs ratio scoring the middle band.
    pub needs_ratio_ceiling: f64,
    pub wants_ratio_target: f64,
    pub needs_ratio_scores: [f64; 3],
}

impl Default for AllocationSettings {
    fn default() -> Self {
        Self {
            emergency_fund_months: 6,
            emergency_fraction: BandFractions {
                critical: 0.35,
                building: 0.25,
                good: 0.15,
                excellent: 0.0,
            },
            savings_fraction: 0.30,
            savings_fraction_when_funded: 0.40,
            investment_fraction: BandFractions {
                critical: 0.0,
                building: 0.0,
                good: 0.5,
                excellent: 0.7,
            },
            emergency_score_weight: 40.0,
            savings_score_weight: 30.0,
            savings_rate_target: 20.0,
            needs_ratio_target: 50.0,
            needs_ratio_ceiling: 60.0,
            wants_ratio_target: 30.0,
            needs_ratio_scores: [30.0, 20.0, 10.0],
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EngineConfig {
    pub forecast: ForecastSettings,
    pub allocation: AllocationSettings,
}

impl EngineConfig {
    /// Rejects tunables that would make the engines produce nonsense.
    pub fn validate(&self) -> Result<(), ForecastError> {
        let buffer = self.forecast.safety_buffer;
        if !buffer.is_finite() || buffer < 0.0 {
            return Err(invalid(format!("safety buffer must be non-negative, got {buffer}")));
        }

        let allocation = &self.allocation;
        let fractions = allocation
            .emergency_fraction
            .values()
            .into_iter()
            .chain(allocation.investment_fraction.values())
            .chain([
                allocation.savings_fraction,
                allocation.savings_fraction_when_funded,
            ]);
        for fraction in fractions {
            if !(0.0..=1.0).contains(&fraction) {
                return Err(invalid(format!(
                    "allocation fractions must lie within 0..=1, got {fraction}"
                )));
            }
        }
        if allocation.savings_rate_target <= 0.0 {
            return Err(invalid("savings rate target must be positive".into()));
        }
        if allocation.needs_ratio_ceiling < allocation.needs_ratio_target {
            return Err(invalid(
                "needs ratio ceiling must not be below the needs ratio target".into(),
            ));
        }
        Ok(())
    }
}

fn invalid(message: String) -> ForecastError {
    ForecastError::InvalidConfiguration(message)
}

/// Reads and writes [`EngineConfig`] as pretty JSON.
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    /// Uses the platform configuration directory, falling back to the working directory.
    pub fn new() -> Result<Self, ForecastError> {
        let base = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR);
        Self::with_base_dir(base)
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self, ForecastError> {
        fs::create_dir_all(&base)?;
        Ok(Self {
            path: base.join(CONFIG_FILE),
        })
    }

    /// Loads the stored config, or the defaults when none has been saved.
    pub fn load(&self) -> Result<EngineConfig, ForecastError> {
        if !self.path.exists() {
            tracing::debug!(
                path = %self.path.display(),
                "no engine config on disk, using defaults"
            );
            return Ok(EngineConfig::default());
        }
        let data = fs::read_to_string(&self.path)?;
        let config: EngineConfig = serde_json::from_str(&data)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self, config: &EngineConfig) -> Result<(), ForecastError> {
        config.validate()?;
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        tracing::info!(path = %self.path.display(), "engine config saved");
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<(), ForecastError> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
