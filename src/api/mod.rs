//! HTTP facade for strategy generation
//!
//! Wires the intake pipeline (validate, sanitize, build prompt) to the
//! configured provider. The provider is constructed once at startup and
//! shared read-only by every request.

pub mod routes;
pub mod types;

use std::sync::Arc;

use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::provider::StrategyProvider;

pub use types::{
    ProviderHealthResponse, ServiceHealthResponse, ServiceInfo, StrategyRequest, StrategyResponse,
};

/// Service name reported by the banner and liveness endpoints
pub const SERVICE_NAME: &str = "Legal Strategy AI Service";

/// Application state shared by all handlers
#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn StrategyProvider>,
    pub provider_name: Arc<str>,
}

impl AppState {
    pub fn new(provider: Arc<dyn StrategyProvider>) -> Self {
        let provider_name = Arc::from(provider.name());
        Self {
            provider,
            provider_name,
        }
    }
}

/// Routes only, no middleware
pub fn create_strategy_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::service_info))
        .route("/health", get(routes::service_health))
        .route("/api/health", get(routes::provider_health))
        .route("/api/strategy", post(routes::generate_strategy))
        .with_state(state)
}

/// Full application router with tracing and CORS
pub fn build_router(state: AppState, cors_origins: &[String]) -> Router {
    create_strategy_router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(cors_layer(cors_origins)),
    )
}

/// CORS restricted to `origins`, with credentials allowed
fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
}
