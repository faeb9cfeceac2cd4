//! Error types for the strategy service
//!
//! Domain errors use thiserror so callers can match on the failure kind;
//! provider plumbing and the server binary use anyhow.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Rejection reasons for a raw case description
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Case description cannot be empty")]
    Empty,

    #[error("Case description too short ({length} characters, minimum 10)")]
    TooShort { length: usize },

    #[error("Case description too long ({length} characters, maximum 5000)")]
    TooLong { length: usize },
}

impl ValidationError {
    /// Stable machine-readable kind, used in logs and API payloads
    pub fn kind(&self) -> &'static str {
        match self {
            ValidationError::Empty => "empty",
            ValidationError::TooShort { .. } => "too_short",
            ValidationError::TooLong { .. } => "too_long",
        }
    }
}

/// Configuration errors raised while reading settings at startup
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Unknown MODEL_PROVIDER '{0}'. Valid values: fake, openai")]
    UnknownProvider(String),

    #[error("Invalid value '{value}' for {key}: {reason}")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Errors surfaced by the HTTP facade
#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Body missing, not JSON, or lacking `case_description`
    #[error(transparent)]
    Payload(#[from] JsonRejection),

    /// Details stay server-side; the client only sees a fixed message
    #[error("Strategy generation failed: {0:#}")]
    Internal(#[from] anyhow::Error),
}

/// Fixed user-facing message for internal failures
pub const GENERIC_FAILURE_MESSAGE: &str = "An error occurred while generating the legal strategy";

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<&'static str>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(e) => {
                tracing::debug!(kind = e.kind(), "Rejected case description");
                let body = ErrorBody {
                    error: e.to_string(),
                    field: Some("case_description"),
                    kind: Some(e.kind()),
                };
                (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response()
            }
            ApiError::Payload(rejection) => {
                tracing::debug!(status = %rejection.status(), "Rejected request body");
                let body = ErrorBody {
                    error: rejection.body_text(),
                    field: Some("case_description"),
                    kind: Some("invalid_body"),
                };
                (rejection.status(), Json(body)).into_response()
            }
            ApiError::Internal(e) => {
                tracing::error!("Error generating strategy: {:?}", e);
                let body = ErrorBody {
                    error: GENERIC_FAILURE_MESSAGE.to_string(),
                    field: None,
                    kind: None,
                };
                (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
            }
        }
    }
}
