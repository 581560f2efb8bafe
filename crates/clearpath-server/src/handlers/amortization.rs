//! Amortization handlers

use axum::{extract::Query, Json};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{resolve_today, AppError};
use clearpath_core::amortization::{payoff_term, total_interest};
use clearpath_core::PayoffTerm;

#[derive(Debug, Deserialize)]
pub struct PayoffQuery {
    pub balance: f64,
    pub payment: f64,
    /// Annual percentage rate
    pub rate: f64,
    pub today: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PayoffResponse {
    pub term: PayoffTerm,
    /// Far-future sentinel when the payment never retires the balance
    pub payoff_date: NaiveDate,
    pub total_interest: Option<f64>,
}

/// GET /api/payoff - Payoff term and date for one balance
pub async fn payoff(Query(params): Query<PayoffQuery>) -> Result<Json<PayoffResponse>, AppError> {
    let today = resolve_today(params.today.as_deref())?;

    Ok(Json(PayoffResponse {
        term: payoff_term(params.balance, params.payment, params.rate),
        payoff_date: clearpath_core::payoff_date(
            params.balance,
            params.payment,
            params.rate,
            today,
        ),
        total_interest: total_interest(params.balance, params.payment, params.rate),
    }))
}

#[derive(Debug, Deserialize)]
pub struct InterestSavedQuery {
    pub balance: f64,
    pub min_payment: f64,
    pub accelerated_payment: f64,
    pub rate: f64,
}

#[derive(Debug, Serialize)]
pub struct InterestSavedResponse {
    pub interest_saved: f64,
    /// False when either schedule never amortizes
    pub comparable: bool,
}

/// GET /api/interest-saved - Interest avoided by paying more than the minimum
pub async fn interest_saved(Query(params): Query<InterestSavedQuery>) -> Json<InterestSavedResponse> {
    Json(InterestSavedResponse {
        interest_saved: clearpath_core::interest_saved(
            params.balance,
            params.min_payment,
            params.accelerated_payment,
            params.rate,
        ),
        comparable: clearpath_core::interest_comparable(
            params.balance,
            params.min_payment,
            params.accelerated_payment,
            params.rate,
        ),
    })
}
