//! Request and response bodies for the strategy API

use serde::{Deserialize, Serialize};

/// POST /api/strategy body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategyRequest {
    pub case_description: String,
}

/// POST /api/strategy response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategyResponse {
    /// Generated strategy, or bracketed provider error text
    pub strategy: String,
    pub provider: String,
    pub tokens_used: Option<u32>,
    /// Seconds spent in the provider
    pub processing_time: Option<f64>,
}

/// GET /api/health response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderHealthResponse {
    pub status: String,
    pub provider: String,
    pub provider_available: bool,
    pub timestamp: String,
}

/// GET /health response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceHealthResponse {
    pub status: String,
    pub service: String,
    pub provider: String,
}

/// GET / response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub message: String,
    pub version: String,
}
