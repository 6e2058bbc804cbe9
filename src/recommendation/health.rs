//! Emergency-fund bands and the 0-100 financial health score.

use serde::{Deserialize, Serialize};

use crate::config::AllocationSettings;

/// How far the emergency fund is towards its target.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum HealthBand {
    /// Under 25% funded.
    Critical,
    /// 25% to under 50%.
    Building,
    /// 50% to under 100%.
    Good,
    Excellent,
}

impl HealthBand {
    pub fn from_percent_funded(percent: f64) -> Self {
        if percent < 25.0 {
            Self::Critical
        } else if percent < 50.0 {
            Self::Building
        } else if percent < 100.0 {
            Self::Good
        } else {
            Self::Excellent
        }
    }
}

/// Percent of `target` covered by `current`; an empty target counts as fully funded.
pub fn percent_funded(current: f64, target: f64) -> f64 {
    if target <= 0.0 {
        100.0
    } else {
        current / target * 100.0
    }
}

/// Inputs of the health score, all as percentages.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreFactors {
    pub emergency_percent_funded: f64,
    pub savings_rate: f64,
    /// `None` when there is no income to compare against.
    pub needs_ratio: Option<f64>,
    pub has_needs: bool,
}

/// Weighted 0-100 score: emergency fund, savings rate, then needs ratio bands.
pub fn health_score(factors: &ScoreFactors, settings: &AllocationSettings) -> u8 {
    let emergency_weight = settings.emergency_score_weight;
    let emergency =
        (factors.emergency_percent_funded / 100.0 * emergency_weight).min(emergency_weight);

    let savings_weight = settings.savings_score_weight;
    let savings =
        (factors.savings_rate / settings.savings_rate_target * savings_weight).min(savings_weight);

    let [top, middle, lowest] = settings.needs_ratio_scores;
    let needs = match factors.needs_ratio {
        Some(ratio) if ratio <= settings.needs_ratio_target => top,
        Some(ratio) if ratio <= settings.needs_ratio_ceiling => middle,
        Some(_) => lowest,
        None if factors.has_needs => lowest,
        None => top,
    };

    (emergency + savings + needs).round().clamp(0.0, 100.0) as u8
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum HealthTier {
    NeedsImprovement,
    Fair,
    Good,
    Excellent,
}

impl HealthTier {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::NeedsImprovement => "Needs Improvement",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct HealthLabel {
    pub label: &'static str,
    pub tier: HealthTier,
}

pub fn get_health_score_label(score: u8) -> HealthLabel {
    let tier = match score {
        80.. => HealthTier::Excellent,
        60..=79 => HealthTier::Good,
        40..=59 => HealthTier::Fair,
        _ => HealthTier::NeedsImprovement,
    };
    HealthLabel {
        label: tier.label(),
        tier,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_boundaries() {
        assert_eq!(HealthBand::from_percent_funded(0.0), HealthBand::Critical);
        assert_eq!(HealthBand::from_percent_funded(24.9), HealthBand::Critical);
        assert_eq!(HealthBand::from_percent_funded(25.0), HealthBand::Building);
        assert_eq!(HealthBand::from_percent_funded(50.0), HealthBand::Good);
        assert_eq!(HealthBand::from_percent_funded(99.9), HealthBand::Good);
        assert_eq!(HealthBand::from_percent_funded(100.0), HealthBand::Excellent);
        assert_eq!(HealthBand::from_percent_funded(250.0), HealthBand::Excellent);
    }

    #[test]
    fn empty_target_is_fully_funded() {
        assert_eq!(percent_funded(0.0, 0.0), 100.0);
        assert_eq!(percent_funded(500.0, 1_000.0), 50.0);
    }

    #[test]
    fn score_caps_each_component() {
        let settings = AllocationSettings::default();
        let factors = ScoreFactors {
            emergency_percent_funded: 300.0,
            savings_rate: 80.0,
            needs_ratio: Some(20.0),
            has_needs: true,
        };
        assert_eq!(health_score(&factors, &settings), 100);
    }

    #[test]
    fn negative_savings_rate_is_clamped_at_zero() {
        let settings = AllocationSettings::default();
        let factors = ScoreFactors {
            emergency_percent_funded: 0.0,
            savings_rate: -200.0,
            needs_ratio: Some(90.0),
            has_needs: true,
        };
        assert_eq!(health_score(&factors, &settings), 0);
    }

    #[test]
    fn labels_by_tier() {
        assert_eq!(get_health_score_label(80).label, "Excellent");
        assert_eq!(get_health_score_label(79).tier, HealthTier::Good);
        assert_eq!(get_health_score_label(40).label, "Fair");
        assert_eq!(get_health_score_label(39).label, "Needs Improvement");
    }
}
