//! Legal Strategy Advisor
//!
//! HTTP service that turns a free-text legal case description into a
//! strategy document using a pluggable generation provider.
//!
//! Every case description goes through the same intake pipeline before it
//! reaches a prompt or a log line:
//!
//! raw text -> validate (10..=5000 chars, trimmed) -> strip markup ->
//! redact SSN -> redact phone -> redact email -> prompt -> provider
//!
//! ## Quick Start
//!
//! ```rust
//! use legal_strategy_advisor::sanitize::{sanitize, CaseDescription};
//!
//! assert_eq!(
//!     sanitize("Call 555-123-4567 or email a.b+c@example.com"),
//!     "Call [PHONE REDACTED] or email [EMAIL REDACTED]"
//! );
//!
//! let case = CaseDescription::parse("  Client SSN 123-45-6789, contract dispute  ").unwrap();
//! assert_eq!(case.as_str(), "Client SSN [SSN REDACTED], contract dispute");
//! ```

// Core error handling
pub mod error;

// Case description validation and PII redaction
pub mod sanitize;

pub mod prompt;

// Generation backends
pub mod provider;

pub mod config;

// REST API
pub mod api;

pub use api::{build_router, AppState};
pub use config::Settings;
pub use error::{ApiError, ConfigError, ValidationError};
pub use prompt::build_prompt;
pub use provider::{build_provider, Generation, ProviderKind, StrategyProvider};
pub use sanitize::{sanitize, validate, CaseDescription, RedactionPlaceholder};
