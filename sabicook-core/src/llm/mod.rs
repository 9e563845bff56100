//! LLM provider abstraction for recipe and meal-plan generation.
//!
//! The generation pipeline talks to the service only through [`LlmProvider`],
//! so tests can swap in [`FakeProvider`] without network access.

mod fake;
mod openai;
mod types;

pub use fake::FakeProvider;
pub use openai::OpenAiProvider;
pub use types::{ChatMessage, ChatRequest, Role};

use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

use crate::config::{GeneratorConfig, ProviderKind};

/// Error type for LLM operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LlmError {
    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Rate limited, retry after {retry_after_secs:?} seconds")]
    RateLimited { retry_after_secs: Option<u64> },

    #[error("Service unreachable: {0}")]
    Unreachable(String),

    #[error("API returned error: {status} - {message}")]
    ApiError { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    ParseError(String),
}

/// Coarse classification of service failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceErrorKind {
    Unauthorized,
    RateLimited,
    Unreachable,
    Other,
}

impl LlmError {
    pub fn kind(&self) -> ServiceErrorKind {
        match self {
            // A missing credential is treated the same as a rejected one
            LlmError::NotConfigured(_) | LlmError::Unauthorized(_) => {
                ServiceErrorKind::Unauthorized
            }
            LlmError::RateLimited { .. } => ServiceErrorKind::RateLimited,
            LlmError::Unreachable(_) => ServiceErrorKind::Unreachable,
            LlmError::ApiError { .. } | LlmError::ParseError(_) => ServiceErrorKind::Other,
        }
    }
}

/// Trait for LLM providers.
///
/// Implementations should be stateless and thread-safe. The provider makes
/// exactly one call per `complete` and returns the model's text response.
#[async_trait]
pub trait LlmProvider: Send + Sync + fmt::Debug {
    /// Send a chat request and get the text of the first completion.
    ///
    /// `prompt_name` identifies the prompt template for logging.
    async fn complete(&self, prompt_name: &str, request: &ChatRequest) -> Result<String, LlmError>;

    /// Get the provider name (e.g., "openai", "fake").
    fn provider_name(&self) -> &'static str;

    /// Get the model name (e.g., "gpt-4").
    fn model_name(&self) -> &str;
}

/// Build the provider selected by the configuration.
pub fn create_provider(config: &GeneratorConfig) -> Result<Arc<dyn LlmProvider>, LlmError> {
    match config.provider {
        ProviderKind::Fake => Ok(Arc::new(FakeProvider::with_sample_responses())),
        ProviderKind::OpenAi => Ok(Arc::new(OpenAiProvider::new(config)?)),
    }
}
