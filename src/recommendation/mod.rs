//! Rule-based split of the monthly surplus into emergency fund, savings,
//! investments and discretionary spending.
//!
//! Each step consumes what the previous one left over:
//! the emergency-fund band decides the emergency share, whether savings get the
//! larger share, and how much of the rest may be invested.

pub mod health;

use serde::{Deserialize, Serialize};

use crate::config::{AllocationSettings, EngineConfig};
use crate::domain::{Expense, Goal, GoalType};
use crate::forecast::ForecastResult;

pub use health::{
    get_health_score_label, health_score, percent_funded, HealthBand, HealthLabel, HealthTier,
    ScoreFactors,
};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecommendationInput {
    pub safe_to_spend: f64,
    pub monthly_income: f64,
    pub expenses: Vec<Expense>,
    pub goals: Vec<Goal>,
}

impl RecommendationInput {
    pub fn from_forecast(
        forecast: &ForecastResult,
        monthly_income: f64,
        expenses: Vec<Expense>,
        goals: Vec<Goal>,
    ) -> Self {
        Self {
            safe_to_spend: forecast.safe_to_spend,
            monthly_income,
            expenses,
            goals,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AllocationPriority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmergencyFundAllocation {
    pub recommended: f64,
    pub reasoning: String,
    pub priority: AllocationPriority,
    pub target_months: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BucketAllocation {
    pub recommended: f64,
    pub reasoning: String,
    /// Share of monthly income, one decimal place.
    pub percentage: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiscretionaryAllocation {
    pub recommended: f64,
    pub reasoning: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AllocationSummary {
    pub total_allocated: f64,
    pub health_score: u8,
    pub key_advice: Vec<String>,
    pub safe_to_spend: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AllocationRecommendation {
    pub emergency_fund: EmergencyFundAllocation,
    pub savings: BucketAllocation,
    pub investments: BucketAllocation,
    pub discretionary: DiscretionaryAllocation,
    pub summary: AllocationSummary,
}

/// Target and balance the emergency-fund rules work against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmergencyFund {
    pub target: f64,
    pub current: f64,
}

impl EmergencyFund {
    /// The first emergency goal wins; otherwise the target is a number of months of needs.
    pub fn resolve(goals: &[Goal], needs_expenses: f64, months: u32) -> Self {
        let derived = needs_expenses * f64::from(months);
        match goals.iter().find(|goal| goal.kind == GoalType::Emergency) {
            Some(goal) if goal.target_amount > 0.0 => Self {
                target: goal.target_amount,
                current: goal.current_amount,
            },
            Some(goal) => Self {
                target: derived,
                current: goal.current_amount,
            },
            None => Self {
                target: derived,
                current: 0.0,
            },
        }
    }

    pub fn gap(&self) -> f64 {
        (self.target - self.current).max(0.0)
    }

    pub fn percent_funded(&self) -> f64 {
        percent_funded(self.current, self.target)
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct ExpenseTotals {
    total: f64,
    needs: f64,
    wants: f64,
}

impl ExpenseTotals {
    fn from_expenses(expenses: &[Expense]) -> Self {
        let mut totals = Self::default();
        for expense in expenses {
            totals.total += expense.amount;
            if expense.is_needs() {
                totals.needs += expense.amount;
            } else {
                totals.wants += expense.amount;
            }
        }
        totals
    }
}

/// Unrounded amounts of one waterfall pass.
#[derive(Debug, Clone, Copy)]
struct Waterfall {
    surplus: f64,
    emergency: f64,
    savings: f64,
    investments: f64,
    discretionary: f64,
}

impl Waterfall {
    fn saved(&self) -> f64 {
        self.emergency + self.savings + self.investments
    }

    fn total(&self) -> f64 {
        self.saved() + self.discretionary
    }
}

#[derive(Debug, Clone, Default)]
pub struct RecommendationEngine {
    settings: AllocationSettings,
}

impl RecommendationEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: &EngineConfig) -> Self {
        Self {
            settings: config.allocation.clone(),
        }
    }

    pub fn generate(&self, input: &RecommendationInput) -> AllocationRecommendation {
        let settings = &self.settings;
        let income = input.monthly_income;
        let totals = ExpenseTotals::from_expenses(&input.expenses);
        let fund =
            EmergencyFund::resolve(&input.goals, totals.needs, settings.emergency_fund_months);
        let band = HealthBand::from_percent_funded(fund.percent_funded());

        let waterfall = self.allocate(income - totals.total, band, fund);

        let savings_rate = share_of(waterfall.saved(), income);
        let factors = ScoreFactors {
            emergency_percent_funded: fund.percent_funded(),
            savings_rate,
            needs_ratio: (income > 0.0).then(|| totals.needs / income * 100.0),
            has_needs: totals.needs > 0.0,
        };
        let score = health_score(&factors, settings);
        let invests = self.invests(band);
        let key_advice =
            self.advice(band, invests, &totals, income, waterfall.surplus, savings_rate);

        tracing::debug!(
            ?band,
            surplus = waterfall.surplus,
            health_score = score,
            "generated allocation recommendation"
        );

        AllocationRecommendation {
            emergency_fund: EmergencyFundAllocation {
                recommended: published(waterfall.emergency),
                reasoning: emergency_reasoning(band).into(),
                priority: emergency_priority(band),
                target_months: settings.emergency_fund_months,
            },
            savings: BucketAllocation {
                recommended: published(waterfall.savings),
                reasoning: savings_reasoning(band).into(),
                percentage: round_to_tenth(share_of(waterfall.savings, income)),
            },
            investments: BucketAllocation {
                recommended: published(waterfall.investments),
                reasoning: investments_reasoning(band, invests).into(),
                percentage: round_to_tenth(share_of(waterfall.investments, income)),
            },
            discretionary: DiscretionaryAllocation {
                recommended: published(waterfall.discretionary),
                reasoning: "This is your flexible spending money after all allocations. Enjoy responsibly!"
                    .into(),
            },
            summary: AllocationSummary {
                total_allocated: waterfall.total().round(),
                health_score: score,
                key_advice,
                safe_to_spend: published(input.safe_to_spend),
            },
        }
    }

    fn allocate(&self, surplus: f64, band: HealthBand, fund: EmergencyFund) -> Waterfall {
        let settings = &self.settings;

        let emergency = (surplus * settings.emergency_fraction.for_band(band)).min(fund.gap());
        let after_emergency = surplus - emergency;

        let savings_fraction = if band == HealthBand::Excellent {
            settings.savings_fraction_when_funded
        } else {
            settings.savings_fraction
        };
        let savings = after_emergency * savings_fraction;
        let after_savings = after_emergency - savings;

        let investments = after_savings * settings.investment_fraction.for_band(band);

        Waterfall {
            surplus,
            emergency,
            savings,
            investments,
            discretionary: after_savings - investments,
        }
    }

    /// Whether the configured investment share for `band` is non-zero.
    fn invests(&self, band: HealthBand) -> bool {
        self.settings.investment_fraction.for_band(band) > 0.0
    }

    fn advice(
        &self,
        band: HealthBand,
        invests: bool,
        totals: &ExpenseTotals,
        income: f64,
        surplus: f64,
        savings_rate: f64,
    ) -> Vec<String> {
        let settings = &self.settings;
        let mut advice: Vec<String> = Vec::new();

        match band {
            HealthBand::Critical => advice.push(
                "Build your emergency fund urgently - you're vulnerable to unexpected expenses"
                    .into(),
            ),
            HealthBand::Building => {
                advice.push("Keep building your emergency fund - you're halfway there".into())
            }
            HealthBand::Good => {}
            HealthBand::Excellent => {
                advice.push("Emergency fund is solid - focus on growth".into())
            }
        }

        let investing = if !invests {
            "Hold off on investing until your emergency fund is built"
        } else if band == HealthBand::Excellent {
            "Great position to maximize investment growth"
        } else {
            "You're ready to start investing for the future"
        };
        advice.push(investing.into());

        if totals.needs > income * settings.needs_ratio_target / 100.0 {
            advice.push(format!(
                "Your \"needs\" expenses exceed {}% of income - look for ways to reduce",
                settings.needs_ratio_target
            ));
        }
        if totals.wants > income * settings.wants_ratio_target / 100.0 {
            advice.push("Consider reducing \"wants\" spending to free up more for savings".into());
        }
        if surplus < 0.0 {
            advice.push(
                "URGENT: Expenses exceed income - reduce spending or increase income".into(),
            );
        }
        if savings_rate >= settings.savings_rate_target {
            advice.push(format!(
                "Excellent! You're saving {}%+ of income",
                settings.savings_rate_target
            ));
        }

        advice
    }
}

/// Recommendation with the default tunables.
pub fn generate_recommendations(input: &RecommendationInput) -> AllocationRecommendation {
    RecommendationEngine::new().generate(input)
}

fn emergency_priority(band: HealthBand) -> AllocationPriority {
    match band {
        HealthBand::Critical | HealthBand::Building => AllocationPriority::High,
        HealthBand::Good => AllocationPriority::Medium,
        HealthBand::Excellent => AllocationPriority::Low,
    }
}

fn emergency_reasoning(band: HealthBand) -> &'static str {
    match band {
        HealthBand::Critical => {
            "Your emergency fund is critically low. Prioritize building it to at least 3 months of expenses."
        }
        HealthBand::Building => {
            "You're making progress! Continue building your emergency fund to reach 6 months of expenses."
        }
        HealthBand::Good => {
            "Almost there! Top up your emergency fund to reach the ideal 6-month target."
        }
        HealthBand::Excellent => {
            "Great job! Your emergency fund is fully funded. Focus on other financial goals."
        }
    }
}

fn savings_reasoning(band: HealthBand) -> &'static str {
    if band == HealthBand::Excellent {
        "With a solid emergency fund, you can focus on building short-term savings for goals and opportunities."
    } else {
        "Build savings for short-term goals while maintaining emergency fund contributions."
    }
}

fn investments_reasoning(band: HealthBand, invests: bool) -> &'static str {
    if !invests {
        "Focus on emergency fund first. Start investing once you have 3-6 months of expenses saved."
    } else if band == HealthBand::Excellent {
        "Strong financial foundation! Maximize long-term wealth building through consistent investments."
    } else {
        "You can start investing for long-term growth. Consider index funds or retirement accounts."
    }
}

/// `part` as a percentage of `whole`; zero when there is nothing to compare against.
fn share_of(part: f64, whole: f64) -> f64 {
    if whole > 0.0 {
        part / whole * 100.0
    } else {
        0.0
    }
}

/// Whole currency units, never negative.
fn published(amount: f64) -> f64 {
    amount.round().max(0.0)
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
