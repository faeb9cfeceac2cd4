//! Strategy API Routes
//!
//! ## Endpoints
//!
//! - `POST /api/strategy` - Generate a strategy for a case description
//! - `GET /api/health` - Provider availability
//! - `GET /health` - Service liveness
//! - `GET /` - Service banner

use std::time::Instant;

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};

use super::types::{
    ProviderHealthResponse, ServiceHealthResponse, ServiceInfo, StrategyRequest, StrategyResponse,
};
use super::{AppState, SERVICE_NAME};
use crate::error::ApiError;
use crate::prompt::build_prompt;
use crate::sanitize::CaseDescription;

/// POST /api/strategy
///
/// Validates and sanitizes the case description, then hands the prompt to
/// the configured provider. Only lengths, counts and timings are logged.
pub async fn generate_strategy(
    State(state): State<AppState>,
    payload: Result<Json<StrategyRequest>, JsonRejection>,
) -> Result<Json<StrategyResponse>, ApiError> {
    let Json(request) = payload?;
    let case = CaseDescription::parse(&request.case_description)?;
    let report = case.report();
    tracing::debug!(
        chars = case.char_count(),
        markup_removed = report.markup_removed,
        ssn = report.ssn,
        phone = report.phone,
        email = report.email,
        "Case description sanitized"
    );

    let prompt = build_prompt(&case);

    let started = Instant::now();
    let generation = state.provider.generate(&prompt).await?;
    let processing_time = started.elapsed().as_secs_f64();

    tracing::info!(
        "Strategy generated using {} provider in {:.2}s",
        state.provider_name,
        processing_time
    );

    Ok(Json(StrategyResponse {
        strategy: generation.text,
        provider: state.provider_name.to_string(),
        tokens_used: generation.tokens_used,
        processing_time: Some(processing_time),
    }))
}

/// GET /api/health
///
/// Never fails; an unconfigured provider is reported through
/// `provider_available`, not through `status`.
pub async fn provider_health(State(state): State<AppState>) -> Json<ProviderHealthResponse> {
    let provider_available = state.provider.is_available();
    if !provider_available {
        tracing::warn!(provider = %state.provider_name, "Strategy provider unavailable");
    }

    Json(ProviderHealthResponse {
        status: "healthy".to_string(),
        provider: state.provider_name.to_string(),
        provider_available,
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

/// GET /health
pub async fn service_health(State(state): State<AppState>) -> Json<ServiceHealthResponse> {
    Json(ServiceHealthResponse {
        status: "healthy".to_string(),
        service: SERVICE_NAME.to_string(),
        provider: state.provider_name.to_string(),
    })
}

/// GET /
pub async fn service_info() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        message: SERVICE_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
