//! Dashboard handlers

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::{resolve_today, AppError, AppState};
use clearpath_core::models::{FinancialSnapshot, Strategy};
use clearpath_core::{build_dashboard, Dashboard};

#[derive(Debug, Deserialize)]
pub struct DashboardRequest {
    #[serde(flatten)]
    pub snapshot: FinancialSnapshot,
    pub strategy: Option<Strategy>,
    pub extra_payment: Option<f64>,
    pub today: Option<String>,
}

/// POST /api/dashboard - Every metric, plan and payment for one snapshot
pub async fn dashboard(
    State(state): State<Arc<AppState>>,
    Json(body): Json<DashboardRequest>,
) -> Result<Json<Dashboard>, AppError> {
    let today = resolve_today(body.today.as_deref())?;
    let defaults = &state.config.plan;

    Ok(Json(build_dashboard(
        &body.snapshot,
        body.strategy.unwrap_or(defaults.strategy),
        body.extra_payment.unwrap_or(defaults.extra_payment),
        today,
    )))
}
