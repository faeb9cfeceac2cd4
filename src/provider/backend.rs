//! Backend Selection
//!
//! Enum for selecting the strategy generation backend.

use std::str::FromStr;

use crate::error::ConfigError;

/// Strategy provider selection, read from `MODEL_PROVIDER`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProviderKind {
    /// Deterministic keyword templates (default)
    #[default]
    Fake,
    /// OpenAI chat completions
    OpenAi,
}

impl ProviderKind {
    /// Name reported in responses and health checks
    pub fn name(&self) -> &'static str {
        match self {
            ProviderKind::Fake => "fake",
            ProviderKind::OpenAi => "openai",
        }
    }
}

impl FromStr for ProviderKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fake" => Ok(ProviderKind::Fake),
            "openai" => Ok(ProviderKind::OpenAi),
            other => Err(ConfigError::UnknownProvider(other.to_string())),
        }
    }
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
