mod common;

use common::{date, household_input};
use payday_forecast::domain::{monthly_income, Expense, ExpensePriority, Goal, GoalType};
use payday_forecast::recommendation::{
    health_score, AllocationPriority, HealthTier, RecommendationEngine, ScoreFactors,
};
use payday_forecast::{
    generate_recommendations, get_health_score_label, run_forecast, EngineConfig,
    RecommendationInput,
};

fn input(monthly_income: f64, expenses: Vec<Expense>, goals: Vec<Goal>) -> RecommendationInput {
    RecommendationInput {
        safe_to_spend: 0.0,
        monthly_income,
        expenses,
        goals,
    }
}

fn starter_expenses() -> Vec<Expense> {
    vec![
        Expense::fixed("Rent", 8_000.0, ExpensePriority::Needs, 1),
        Expense::fixed("Utilities", 2_000.0, ExpensePriority::Needs, 10),
        Expense::variable("Groceries", 5_000.0, ExpensePriority::Needs),
        Expense::variable("Dining out", 3_000.0, ExpensePriority::Wants),
    ]
}

#[test]
fn critical_fund_prioritises_emergency_savings() {
    let rec = generate_recommendations(&input(30_000.0, starter_expenses(), Vec::new()));

    assert_eq!(rec.emergency_fund.recommended, 4_200.0);
    assert_eq!(rec.emergency_fund.priority, AllocationPriority::High);
    assert_eq!(rec.emergency_fund.target_months, 6);
    assert_eq!(rec.savings.recommended, 2_340.0);
    assert_eq!(rec.savings.percentage, 7.8);
    assert_eq!(rec.investments.recommended, 0.0);
    assert_eq!(rec.investments.percentage, 0.0);
    assert_eq!(rec.discretionary.recommended, 5_460.0);
    assert_eq!(rec.summary.total_allocated, 12_000.0);
    assert_eq!(rec.summary.health_score, 60);
    assert_eq!(
        rec.summary.key_advice,
        vec![
            "Build your emergency fund urgently - you're vulnerable to unexpected expenses",
            "Hold off on investing until your emergency fund is built",
            "Excellent! You're saving 20%+ of income",
        ]
    );
}

#[test]
fn funded_emergency_goal_shifts_money_to_growth() {
    let expenses = vec![
        Expense::fixed("Mortgage", 16_000.0, ExpensePriority::Needs, 5),
        Expense::variable("Hobbies", 4_000.0, ExpensePriority::Wants),
    ];
    let goals = vec![
        Goal::new("Vacation", GoalType::General, 80_000.0, 0.0),
        Goal::emergency(50_000.0, 60_000.0),
    ];
    let rec = generate_recommendations(&input(40_000.0, expenses, goals));

    assert_eq!(rec.emergency_fund.recommended, 0.0);
    assert_eq!(rec.emergency_fund.priority, AllocationPriority::Low);
    assert_eq!(rec.savings.recommended, 8_000.0);
    assert_eq!(rec.savings.percentage, 20.0);
    assert_eq!(rec.investments.recommended, 8_400.0);
    assert_eq!(rec.investments.percentage, 21.0);
    assert_eq!(rec.discretionary.recommended, 3_600.0);
    assert_eq!(rec.summary.health_score, 100);
    assert_eq!(
        rec.summary.key_advice,
        vec![
            "Emergency fund is solid - focus on growth",
            "Great position to maximize investment growth",
            "Excellent! You're saving 20%+ of income",
        ]
    );
}

#[test]
fn good_band_starts_investing() {
    let expenses = vec![
        Expense::fixed("Rent", 20_000.0, ExpensePriority::Needs, 1),
        Expense::variable("Shopping", 5_000.0, ExpensePriority::Wants),
    ];
    let goals = vec![Goal::emergency(100_000.0, 60_000.0)];
    let rec = generate_recommendations(&input(50_000.0, expenses, goals));

    assert_eq!(rec.emergency_fund.recommended, 3_750.0);
    assert_eq!(rec.emergency_fund.priority, AllocationPriority::Medium);
    assert_eq!(rec.savings.recommended, 6_375.0);
    assert_eq!(rec.investments.recommended, 7_438.0);
    assert_eq!(rec.discretionary.recommended, 7_438.0);
    assert_eq!(rec.summary.health_score, 84);
    assert_eq!(
        rec.summary.key_advice,
        vec![
            "You're ready to start investing for the future",
            "Excellent! You're saving 20%+ of income",
        ]
    );
}

#[test]
fn building_band_with_needs_above_target() {
    let expenses = vec![Expense::fixed("Rent", 27_000.0, ExpensePriority::Needs, 1)];
    let goals = vec![Goal::emergency(100_000.0, 30_000.0)];
    let rec = generate_recommendations(&input(50_000.0, expenses, goals));

    assert_eq!(rec.emergency_fund.recommended, 5_750.0);
    assert_eq!(rec.emergency_fund.priority, AllocationPriority::High);
    assert_eq!(rec.savings.recommended, 5_175.0);
    assert_eq!(rec.investments.recommended, 0.0);
    assert_eq!(rec.discretionary.recommended, 12_075.0);
    assert_eq!(rec.summary.health_score, 62);
    assert_eq!(
        rec.summary.key_advice,
        vec![
            "Keep building your emergency fund - you're halfway there",
            "Hold off on investing until your emergency fund is built",
            "Your \"needs\" expenses exceed 50% of income - look for ways to reduce",
            "Excellent! You're saving 20%+ of income",
        ]
    );
}

#[test]
fn configured_thresholds_drive_investing_and_advice() {
    let mut config = EngineConfig::default();
    config.allocation.investment_fraction.building = 0.2;
    config.allocation.needs_ratio_target = 52.0;
    config.allocation.savings_rate_target = 25.0;

    let expenses = vec![Expense::fixed("Rent", 27_000.0, ExpensePriority::Needs, 1)];
    let goals = vec![Goal::emergency(100_000.0, 30_000.0)];
    let engine = RecommendationEngine::with_config(&config);
    let rec = engine.generate(&input(50_000.0, expenses, goals));

    assert_eq!(rec.investments.recommended, 2_415.0);
    assert_eq!(rec.discretionary.recommended, 9_660.0);
    assert!(rec.investments.reasoning.starts_with("You can start investing"));
    assert_eq!(rec.summary.health_score, 62);
    assert_eq!(
        rec.summary.key_advice,
        vec![
            "Keep building your emergency fund - you're halfway there",
            "You're ready to start investing for the future",
            "Your \"needs\" expenses exceed 52% of income - look for ways to reduce",
            "Excellent! You're saving 25%+ of income",
        ]
    );
}

#[test]
fn negative_surplus_floors_every_bucket() {
    let expenses = vec![Expense::fixed("Rent", 12_000.0, ExpensePriority::Needs, 1)];
    let rec = generate_recommendations(&input(10_000.0, expenses, Vec::new()));

    assert_eq!(rec.emergency_fund.recommended, 0.0);
    assert_eq!(rec.savings.recommended, 0.0);
    assert_eq!(rec.investments.recommended, 0.0);
    assert_eq!(rec.discretionary.recommended, 0.0);
    assert_eq!(rec.summary.total_allocated, -2_000.0);
    assert_eq!(rec.summary.health_score, 0);
    assert_eq!(
        rec.summary.key_advice,
        vec![
            "Build your emergency fund urgently - you're vulnerable to unexpected expenses",
            "Hold off on investing until your emergency fund is built",
            "Your \"needs\" expenses exceed 50% of income - look for ways to reduce",
            "URGENT: Expenses exceed income - reduce spending or increase income",
        ]
    );
}

#[test]
fn heavy_wants_spending_is_called_out() {
    let expenses = vec![
        Expense::fixed("Rent", 5_000.0, ExpensePriority::Needs, 1),
        Expense::variable("Gadgets", 9_000.0, ExpensePriority::Wants),
    ];
    let rec = generate_recommendations(&input(20_000.0, expenses, Vec::new()));
    assert!(rec
        .summary
        .key_advice
        .iter()
        .any(|advice| advice.contains("\"wants\" spending")));
}

#[test]
fn emergency_allocation_shrinks_as_fund_fills() {
    let mut previous_allocation = f64::INFINITY;
    let mut previous_score = 0;
    let settings = EngineConfig::default().allocation;

    for step in 0..=20 {
        let current = 60_000.0 * f64::from(step) / 20.0;
        let goals = vec![Goal::emergency(60_000.0, current)];
        let rec = generate_recommendations(&input(30_000.0, starter_expenses(), goals));
        assert!(rec.emergency_fund.recommended <= previous_allocation);
        previous_allocation = rec.emergency_fund.recommended;

        let factors = ScoreFactors {
            emergency_percent_funded: current / 60_000.0 * 100.0,
            savings_rate: 10.0,
            needs_ratio: Some(50.0),
            has_needs: true,
        };
        let score = health_score(&factors, &settings);
        assert!(score >= previous_score);
        previous_score = score;
    }
}

#[test]
fn zero_income_does_not_produce_nan() {
    let rec = generate_recommendations(&input(0.0, starter_expenses(), Vec::new()));
    assert_eq!(rec.savings.percentage, 0.0);
    assert_eq!(rec.investments.percentage, 0.0);
    assert!(rec.summary.health_score <= 100);
    assert!(rec.summary.total_allocated.is_finite());
}

#[test]
fn builds_from_a_forecast() {
    let forecast_input = household_input(date(2024, 1, 1), date(2024, 1, 30));
    let forecast = run_forecast(&forecast_input).expect("forecast");
    let income = monthly_income(&forecast_input.incomes);
    assert_eq!(income, 30_000.0);

    let rec_input = RecommendationInput::from_forecast(
        &forecast,
        income,
        forecast_input.expenses.clone(),
        Vec::new(),
    );
    let rec = RecommendationEngine::with_config(&EngineConfig::default()).generate(&rec_input);
    assert_eq!(rec.summary.safe_to_spend, forecast.safe_to_spend.round());
    assert!(rec.summary.total_allocated > 0.0);
}

#[test]
fn score_labels() {
    assert_eq!(get_health_score_label(92).tier, HealthTier::Excellent);
    assert_eq!(get_health_score_label(60).label, "Good");
    assert_eq!(get_health_score_label(45).tier, HealthTier::Fair);
    assert_eq!(get_health_score_label(0).label, "Needs Improvement");
}
