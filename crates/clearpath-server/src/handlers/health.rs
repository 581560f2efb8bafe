//! Health score handlers

use axum::{extract::Query, Json};
use serde::Deserialize;

use clearpath_core::{health_breakdown, HealthBreakdown};

#[derive(Debug, Deserialize)]
pub struct HealthScoreQuery {
    pub credit_score: f64,
    pub debt_to_income: f64,
    pub utilization: f64,
    pub savings_rate: f64,
}

/// GET /api/health-score - Composite score with per-component points
pub async fn health_score(Query(params): Query<HealthScoreQuery>) -> Json<HealthBreakdown> {
    Json(health_breakdown(
        params.credit_score,
        params.debt_to_income,
        params.utilization,
        params.savings_rate,
    ))
}
