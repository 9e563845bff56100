//! Generation service configuration from environment variables.

use std::env;
use thiserror::Error;

/// Default OpenAI base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Default model to use.
pub const DEFAULT_MODEL: &str = "gpt-4";

pub const DEFAULT_MAX_TOKENS: u32 = 2000;

pub const DEFAULT_TEMPERATURE: f32 = 0.7;

pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Unknown provider: {0} (expected \"openai\" or \"fake\")")]
    UnknownProvider(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProviderKind {
    #[default]
    OpenAi,
    Fake,
}

/// Generation service configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    /// Bearer token for the service. Without it every generation falls back
    /// to sample data.
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub max_tokens: u32,
    pub temperature: f32,
    /// Whole-request timeout; hitting it counts as the service being unreachable.
    pub timeout_secs: u64,
    pub provider: ProviderKind,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            provider: ProviderKind::default(),
        }
    }
}

impl GeneratorConfig {
    /// Load configuration from environment variables.
    ///
    /// All optional:
    /// - `OPENAI_API_KEY`: API key
    /// - `SABICOOK_AI_PROVIDER`: "openai" or "fake" (default: "openai")
    /// - `SABICOOK_AI_MODEL`: Model name (default: "gpt-4")
    /// - `SABICOOK_AI_BASE_URL`: API base URL (default: "https://api.openai.com/v1")
    /// - `SABICOOK_AI_MAX_TOKENS`: Completion token ceiling (default: 2000)
    /// - `SABICOOK_AI_TEMPERATURE`: Sampling temperature (default: 0.7)
    /// - `SABICOOK_AI_TIMEOUT_SECS`: Request timeout (default: 60)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let provider = match lookup("SABICOOK_AI_PROVIDER").as_deref() {
            None | Some("openai") => ProviderKind::OpenAi,
            Some("fake") => ProviderKind::Fake,
            Some(other) => return Err(ConfigError::UnknownProvider(other.to_string())),
        };

        let api_key = lookup("OPENAI_API_KEY").filter(|k| !k.trim().is_empty());

        let model = lookup("SABICOOK_AI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let base_url =
            lookup("SABICOOK_AI_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let max_tokens = lookup("SABICOOK_AI_MAX_TOKENS")
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_MAX_TOKENS);

        let temperature = lookup("SABICOOK_AI_TEMPERATURE")
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TEMPERATURE);

        let timeout_secs = lookup("SABICOOK_AI_TIMEOUT_SECS")
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Ok(Self {
            api_key,
            model,
            base_url,
            max_tokens,
            temperature,
            timeout_secs,
            provider,
        })
    }

    pub fn has_credentials(&self) -> bool {
        self.api_key.is_some()
    }
}
