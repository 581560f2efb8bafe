//! Financial health score
//!
//! Four independently bucketed components, higher is always better:
//!
//! | Component          | Max | Buckets                                   |
//! |--------------------|-----|-------------------------------------------|
//! | Credit score       | 40  | ≥800, ≥750, ≥700, ≥650, ≥600, else        |
//! | Debt-to-income     | 30  | ≤20, ≤30, ≤40, ≤50, else                  |
//! | Credit utilization | 20  | ≤10, ≤30, ≤50, ≤70, else                  |
//! | Savings rate       | 10  | ≥20, ≥15, ≥10, ≥5, else                   |
//!
//! Buckets are checked top-down and the first match wins, so the score is a
//! step function.

use serde::{Deserialize, Serialize};

const CREDIT_SCORE_BUCKETS: &[(f64, u8)] = &[
    (800.0, 40),
    (750.0, 35),
    (700.0, 30),
    (650.0, 25),
    (600.0, 20),
];
const CREDIT_SCORE_FLOOR: u8 = 10;

const DTI_BUCKETS: &[(f64, u8)] = &[(20.0, 30), (30.0, 25), (40.0, 20), (50.0, 15)];
const DTI_FLOOR: u8 = 5;

const UTILIZATION_BUCKETS: &[(f64, u8)] = &[(10.0, 20), (30.0, 15), (50.0, 10), (70.0, 5)];
const UTILIZATION_FLOOR: u8 = 0;

const SAVINGS_BUCKETS: &[(f64, u8)] = &[(20.0, 10), (15.0, 8), (10.0, 6), (5.0, 4)];
const SAVINGS_FLOOR: u8 = 2;

/// Points per component and the clamped total
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthBreakdown {
    pub credit_score_points: u8,
    pub debt_to_income_points: u8,
    pub utilization_points: u8,
    pub savings_rate_points: u8,
    pub total: u8,
}

/// First bucket whose lower bound `value` meets
fn at_least(value: f64, buckets: &[(f64, u8)], floor: u8) -> u8 {
    buckets
        .iter()
        .find(|(bound, _)| value >= *bound)
        .map(|(_, points)| *points)
        .unwrap_or(floor)
}

/// First bucket whose upper bound `value` stays within
fn at_most(value: f64, buckets: &[(f64, u8)], floor: u8) -> u8 {
    buckets
        .iter()
        .find(|(bound, _)| value <= *bound)
        .map(|(_, points)| *points)
        .unwrap_or(floor)
}

/// Score each component separately
pub fn health_breakdown(
    credit_score: f64,
    debt_to_income_ratio: f64,
    credit_utilization: f64,
    savings_rate: f64,
) -> HealthBreakdown {
    let credit_score_points = at_least(credit_score, CREDIT_SCORE_BUCKETS, CREDIT_SCORE_FLOOR);
    let debt_to_income_points = at_most(debt_to_income_ratio, DTI_BUCKETS, DTI_FLOOR);
    let utilization_points = at_most(credit_utilization, UTILIZATION_BUCKETS, UTILIZATION_FLOOR);
    let savings_rate_points = at_least(savings_rate, SAVINGS_BUCKETS, SAVINGS_FLOOR);

    let sum = credit_score_points as u32
        + debt_to_income_points as u32
        + utilization_points as u32
        + savings_rate_points as u32;

    HealthBreakdown {
        credit_score_points,
        debt_to_income_points,
        utilization_points,
        savings_rate_points,
        total: sum.min(100) as u8,
    }
}

/// Composite 0-100 health score
pub fn health_score(
    credit_score: f64,
    debt_to_income_ratio: f64,
    credit_utilization: f64,
    savings_rate: f64,
) -> u8 {
    health_breakdown(
        credit_score,
        debt_to_income_ratio,
        credit_utilization,
        savings_rate,
    )
    .total
}
