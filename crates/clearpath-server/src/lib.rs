//! Clearpath Web Server
//!
//! Axum-based REST API over the Clearpath planning engine. Every endpoint is
//! a stateless computation over the request body or query string; the server
//! keeps no user data between requests.
//!
//! Security features:
//! - Restrictive CORS policy
//! - Security response headers
//! - JSON error bodies for rejected input

use std::sync::Arc;

use axum::{
    http::{header, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::NaiveDate;
use tower_http::{cors::CorsLayer, set_header::SetResponseHeaderLayer, trace::TraceLayer};
use tracing::{debug, info};

use clearpath_core::config::PlanConfig;

mod handlers;

/// Server configuration
#[derive(Clone, Default)]
pub struct ServerConfig {
    /// Allowed CORS origins (empty = same-origin only)
    pub allowed_origins: Vec<String>,
    /// Strategy and extra payment used when a request leaves them out
    pub plan: PlanConfig,
}

/// Shared application state
pub struct AppState {
    pub config: ServerConfig,
}

/// Create the application router
pub fn create_router(config: ServerConfig) -> Router {
    let cors = build_cors(&config.allowed_origins);
    let state = Arc::new(AppState { config });

    let api_routes = Router::new()
        // Debts and plans
        .route("/debts/normalize", post(handlers::normalize))
        .route("/plan", post(handlers::plan))
        .route("/plan/simulate", post(handlers::simulate))
        // Amortization
        .route("/payoff", get(handlers::payoff))
        .route("/interest-saved", get(handlers::interest_saved))
        // Investments
        .route("/investments/skim", post(handlers::skim))
        // Advice and scoring
        .route("/recommendations", post(handlers::recommendations))
        .route("/health-score", get(handlers::health_score))
        .route("/dashboard", post(handlers::dashboard));

    // CSP: API only, nothing should ever be framed or scripted
    let csp_value = HeaderValue::from_static("default-src 'none'; frame-ancestors 'none'");

    Router::new()
        .nest("/api", api_routes)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        // Security headers
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::CONTENT_SECURITY_POLICY,
            csp_value,
        ))
}

fn build_cors(allowed_origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    if allowed_origins.is_empty() {
        // Restrictive default: only allow same-origin
        cors
    } else {
        let origins: Vec<HeaderValue> = allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        cors.allow_origin(origins)
    }
}

/// Start the server with custom configuration
pub async fn serve_with_config(host: &str, port: u16, config: ServerConfig) -> anyhow::Result<()> {
    info!(
        strategy = config.plan.strategy.as_str(),
        extra_payment = config.plan.extra_payment,
        origins = config.allowed_origins.len(),
        "Plan defaults loaded"
    );

    let app = create_router(config);
    let addr = format!("{}:{}", host, port);

    info!("Starting server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Parse an optional `today` override, defaulting to the local date
pub(crate) fn resolve_today(today: Option<&str>) -> Result<NaiveDate, AppError> {
    match today {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map_err(|_| AppError::bad_request("Invalid today date format (use YYYY-MM-DD)")),
        None => Ok(chrono::Local::now().date_naive()),
    }
}

// ============================================================================
// Error Handling
// ============================================================================

/// Application error type with proper HTTP status codes.
///
/// Every engine operation is infallible, so the only rejections are malformed
/// inputs. Body and query extraction failures are answered by axum itself.
pub struct AppError {
    status: StatusCode,
    message: String,
}

impl AppError {
    pub fn bad_request(msg: &str) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: msg.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        debug!(status = %self.status, message = %self.message, "Request rejected");

        let body = Json(serde_json::json!({
            "error": self.message
        }));

        (self.status, body).into_response()
    }
}
