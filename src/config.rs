//! Service configuration
//!
//! All settings come from environment variables and are read once at
//! startup:
//!
//! | Variable              | Default                         |
//! |-----------------------|---------------------------------|
//! | `MODEL_PROVIDER`      | `fake`                          |
//! | `OPENAI_API_KEY`      | unset                           |
//! | `OPENAI_MODEL`        | `gpt-4o-mini`                   |
//! | `OPENAI_MAX_TOKENS`   | `512`                           |
//! | `OPENAI_TEMPERATURE`  | `0.7`                           |
//! | `OPENAI_BASE_URL`     | `https://api.openai.com/v1`     |
//! | `OPENAI_TIMEOUT_SECS` | `30`                            |
//! | `HOST`                | `0.0.0.0`                       |
//! | `PORT`                | `8001`                          |
//! | `CORS_ORIGINS`        | localhost ports 4200/3000/5000  |

use std::str::FromStr;
use std::time::Duration;

use crate::error::ConfigError;
use crate::provider::{OpenAiSettings, ProviderKind};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8001;

/// Origins allowed by CORS when `CORS_ORIGINS` is unset
pub const DEFAULT_CORS_ORIGINS: [&str; 3] = [
    "http://localhost:4200",
    "http://localhost:3000",
    "http://localhost:5000",
];

/// Startup settings for the strategy service
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub provider: ProviderKind,
    pub openai: OpenAiSettings,
    pub host: String,
    pub port: u16,
    pub cors_origins: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            provider: ProviderKind::default(),
            openai: OpenAiSettings::default(),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            cors_origins: DEFAULT_CORS_ORIGINS.iter().map(|o| o.to_string()).collect(),
        }
    }
}

impl Settings {
    /// Read settings from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through `lookup`; empty values count as unset
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Settings::default();

        let provider = match get("MODEL_PROVIDER") {
            Some(value) => value.parse()?,
            None => defaults.provider,
        };

        let openai = OpenAiSettings {
            api_key: get("OPENAI_API_KEY"),
            model: get("OPENAI_MODEL").unwrap_or(defaults.openai.model),
            max_tokens: parse_or(
                "OPENAI_MAX_TOKENS",
                get("OPENAI_MAX_TOKENS"),
                defaults.openai.max_tokens,
            )?,
            temperature: parse_or(
                "OPENAI_TEMPERATURE",
                get("OPENAI_TEMPERATURE"),
                defaults.openai.temperature,
            )?,
            base_url: get("OPENAI_BASE_URL").unwrap_or(defaults.openai.base_url),
            timeout: Duration::from_secs(parse_or(
                "OPENAI_TIMEOUT_SECS",
                get("OPENAI_TIMEOUT_SECS"),
                defaults.openai.timeout.as_secs(),
            )?),
        };

        if !(0.0..=2.0).contains(&openai.temperature) {
            return Err(ConfigError::InvalidValue {
                key: "OPENAI_TEMPERATURE",
                value: openai.temperature.to_string(),
                reason: "must be between 0.0 and 2.0".to_string(),
            });
        }

        let cors_origins = match get("CORS_ORIGINS") {
            Some(list) => list
                .split(',')
                .map(str::trim)
                .filter(|o| !o.is_empty())
                .map(str::to_string)
                .collect(),
            None => defaults.cors_origins,
        };

        Ok(Self {
            provider,
            openai,
            host: get("HOST").unwrap_or(defaults.host),
            port: parse_or("PORT", get("PORT"), defaults.port)?,
            cors_origins,
        })
    }

    /// Socket address string for the listener
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<T>(key: &'static str, value: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match value {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::InvalidValue {
            key,
            value: raw,
            reason: e.to_string(),
        }),
    }
}
