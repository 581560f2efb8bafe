//! Debt normalization, repayment plan and cascade handlers

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::{resolve_today, AppError, AppState};
use clearpath_core::models::{CreditCard, DebtRecord, Loan, RepaymentPlan, Strategy};
use clearpath_core::{normalize_debts, simulate_cascade, summarize_plan, CascadeResult};

#[derive(Debug, Deserialize)]
pub struct DebtsRequest {
    #[serde(default)]
    pub credit_cards: Vec<CreditCard>,
    #[serde(default)]
    pub loans: Vec<Loan>,
}

/// Body for plan and simulation requests
#[derive(Debug, Deserialize)]
pub struct PlanRequest {
    #[serde(default)]
    pub credit_cards: Vec<CreditCard>,
    #[serde(default)]
    pub loans: Vec<Loan>,
    /// Falls back to the configured strategy
    pub strategy: Option<Strategy>,
    /// Falls back to the configured extra payment
    pub extra_payment: Option<f64>,
    /// YYYY-MM-DD, defaults to the server's local date
    pub today: Option<String>,
}

/// POST /api/debts/normalize - Flatten cards and loans into debt records
pub async fn normalize(Json(body): Json<DebtsRequest>) -> Json<Vec<DebtRecord>> {
    Json(normalize_debts(&body.credit_cards, &body.loans))
}

/// POST /api/plan - Ranked single-month repayment plan with totals
pub async fn plan(
    State(state): State<Arc<AppState>>,
    Json(body): Json<PlanRequest>,
) -> Result<Json<RepaymentPlan>, AppError> {
    let today = resolve_today(body.today.as_deref())?;
    let defaults = &state.config.plan;

    Ok(Json(summarize_plan(
        body.strategy.unwrap_or(defaults.strategy),
        &body.credit_cards,
        &body.loans,
        body.extra_payment.unwrap_or(defaults.extra_payment),
        today,
    )))
}

/// POST /api/plan/simulate - Month-by-month payoff cascade
pub async fn simulate(
    State(state): State<Arc<AppState>>,
    Json(body): Json<PlanRequest>,
) -> Result<Json<CascadeResult>, AppError> {
    let today = resolve_today(body.today.as_deref())?;
    let defaults = &state.config.plan;

    Ok(Json(simulate_cascade(
        body.strategy.unwrap_or(defaults.strategy),
        &body.credit_cards,
        &body.loans,
        body.extra_payment.unwrap_or(defaults.extra_payment),
        today,
    )))
}
