//! Strategy generation providers
//!
//! Unified interface over the backends that turn a prompt into strategy
//! text. Providers report their own failures as text in the returned
//! [`Generation`]; an `Err` is reserved for failures the provider could not
//! describe, and the HTTP layer turns those into a generic 500.

mod backend;
mod openai;
mod template;

pub use backend::ProviderKind;
pub use openai::{OpenAiProvider, OpenAiSettings};
pub use template::{LegalCategory, TemplateProvider};

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;

use crate::config::Settings;

/// Output of a single generation call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generation {
    pub text: String,
    pub tokens_used: Option<u32>,
}

impl Generation {
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tokens_used: None,
        }
    }
}

/// Strategy generation capability
#[async_trait]
pub trait StrategyProvider: Send + Sync {
    /// Generate strategy text for an already-sanitized prompt
    async fn generate(&self, prompt: &str) -> Result<Generation>;

    /// Whether the provider is configured well enough to serve requests
    fn is_available(&self) -> bool;

    /// Provider name for logging and responses
    fn name(&self) -> &str;
}

/// Build the provider selected by `settings`
pub fn build_provider(settings: &Settings) -> Result<Arc<dyn StrategyProvider>> {
    let provider: Arc<dyn StrategyProvider> = match settings.provider {
        ProviderKind::Fake => Arc::new(TemplateProvider::new()),
        ProviderKind::OpenAi => Arc::new(OpenAiProvider::new(settings.openai.clone())?),
    };
    tracing::info!(
        provider = provider.name(),
        available = provider.is_available(),
        "Strategy provider initialized"
    );
    Ok(provider)
}
