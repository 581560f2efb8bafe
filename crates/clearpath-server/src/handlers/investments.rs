//! Investment skim handlers

use axum::Json;
use serde::{Deserialize, Serialize};

use clearpath_core::models::{Investment, PortfolioPerformance};
use clearpath_core::skim::skimmable_amount;

#[derive(Debug, Deserialize)]
pub struct SkimRequest {
    #[serde(default)]
    pub investments: Vec<Investment>,
}

#[derive(Debug, Serialize)]
pub struct SkimEntry {
    pub id: String,
    pub name: String,
    pub skimmable_amount: f64,
}

#[derive(Debug, Serialize)]
pub struct SkimResponse {
    pub skimmable_total: f64,
    pub investments: Vec<SkimEntry>,
    pub portfolio: PortfolioPerformance,
}

/// POST /api/investments/skim - Profit available to withdraw
pub async fn skim(Json(body): Json<SkimRequest>) -> Json<SkimResponse> {
    let investments = body
        .investments
        .iter()
        .map(|inv| SkimEntry {
            id: inv.id.clone(),
            name: inv.name.clone(),
            skimmable_amount: skimmable_amount(inv),
        })
        .collect();

    Json(SkimResponse {
        skimmable_total: clearpath_core::skimmable_total(&body.investments),
        investments,
        portfolio: clearpath_core::portfolio_performance(&body.investments),
    })
}
