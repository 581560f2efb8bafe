//! Recommendation handlers

use axum::Json;

use clearpath_core::models::FinancialSnapshot;
use clearpath_core::{generate_recommendations, Recommendation};

/// POST /api/recommendations - Rule-based advice for a snapshot
pub async fn recommendations(Json(snapshot): Json<FinancialSnapshot>) -> Json<Vec<Recommendation>> {
    let recommendations = generate_recommendations(
        &snapshot.credit_cards,
        &snapshot.loans,
        &snapshot.investments,
        snapshot.monthly_income,
    );
    tracing::debug!(count = recommendations.len(), "Recommendations generated");
    Json(recommendations)
}
