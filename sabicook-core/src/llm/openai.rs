//! OpenAI-compatible chat completions provider.

use super::{ChatRequest, LlmError, LlmProvider};
use crate::config::GeneratorConfig;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Provider for any endpoint speaking the OpenAI chat completions API.
#[derive(Debug)]
pub struct OpenAiProvider {
    api_key: Option<String>,
    model: String,
    endpoint: String,
    client: reqwest::Client,
}

impl OpenAiProvider {
    /// Create a provider from configuration.
    ///
    /// A missing API key is not an error here: every call fails fast with
    /// [`LlmError::NotConfigured`] instead, without touching the network.
    pub fn new(config: &GeneratorConfig) -> Result<Self, LlmError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| LlmError::NotConfigured(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            endpoint: format!("{}/chat/completions", config.base_url.trim_end_matches('/')),
            client,
        })
    }
}

/// Chat completions request body.
#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    #[serde(flatten)]
    chat: &'a ChatRequest,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    message: CompletionMessage,
}

#[derive(Debug, Deserialize)]
struct CompletionMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ApiErrorBody,
}

fn transport_error(e: reqwest::Error) -> LlmError {
    if e.is_timeout() || e.is_connect() {
        LlmError::Unreachable(e.to_string())
    } else {
        LlmError::ApiError {
            status: e.status().map(|s| s.as_u16()).unwrap_or(0),
            message: e.to_string(),
        }
    }
}

/// Map an HTTP status and body to the completion text or a classified error.
fn classify_response(status: u16, retry_after: Option<&str>, body: &str) -> Result<String, LlmError> {
    if status == 429 {
        return Err(LlmError::RateLimited {
            retry_after_secs: retry_after.and_then(|v| v.trim().parse().ok()),
        });
    }

    if !(200..300).contains(&status) {
        let message = serde_json::from_str::<ErrorResponse>(body)
            .map(|r| r.error.message)
            .unwrap_or_else(|_| body.to_string());
        if status == 401 || status == 403 {
            return Err(LlmError::Unauthorized(message));
        }
        return Err(LlmError::ApiError { status, message });
    }

    let parsed: CompletionResponse =
        serde_json::from_str(body).map_err(|e| LlmError::ParseError(e.to_string()))?;

    parsed
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .ok_or_else(|| LlmError::ParseError("No content in response".to_string()))
}

#[async_trait]
impl LlmProvider for OpenAiProvider {
    async fn complete(&self, prompt_name: &str, request: &ChatRequest) -> Result<String, LlmError> {
        let api_key = self
            .api_key
            .as_deref()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| LlmError::NotConfigured("OPENAI_API_KEY not set".to_string()))?;

        tracing::debug!(
            prompt_name = prompt_name,
            model = %self.model,
            "Calling chat completions API"
        );

        let body = CompletionRequest {
            model: &self.model,
            chat: request,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status().as_u16();
        let retry_after = response
            .headers()
            .get("retry-after")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let text = response.text().await.map_err(transport_error)?;

        classify_response(status, retry_after.as_deref(), &text)
    }

    fn provider_name(&self) -> &'static str {
        "openai"
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::ChatMessage;

    #[tokio::test]
    async fn test_missing_key_fails_without_request() {
        let config = GeneratorConfig {
            api_key: None,
            // Unroutable; a request here would fail with Unreachable instead
            base_url: "http://127.0.0.1:9".to_string(),
            ..GeneratorConfig::default()
        };
        let provider = OpenAiProvider::new(&config).unwrap();
        let request = ChatRequest {
            messages: vec![ChatMessage::user("hello")],
            ..Default::default()
        };

        let err = provider.complete("test", &request).await.unwrap_err();
        assert!(matches!(err, LlmError::NotConfigured(_)));
    }

    #[tokio::test]
    async fn test_refused_connection_is_unreachable() {
        let config = GeneratorConfig {
            api_key: Some("sk-test".to_string()),
            base_url: "http://127.0.0.1:9".to_string(),
            timeout_secs: 5,
            ..GeneratorConfig::default()
        };
        let provider = OpenAiProvider::new(&config).unwrap();
        let request = ChatRequest {
            messages: vec![ChatMessage::user("hello")],
            ..Default::default()
        };

        let err = provider.complete("test", &request).await.unwrap_err();
        assert!(matches!(err, LlmError::Unreachable(_)), "{:?}", err);
    }

    #[test]
    fn test_classify_success() {
        let body = r#"{"choices": [{"message": {"role": "assistant", "content": "[]"}}]}"#;
        assert_eq!(classify_response(200, None, body).unwrap(), "[]");

        let empty = r#"{"choices": []}"#;
        assert!(matches!(
            classify_response(200, None, empty),
            Err(LlmError::ParseError(_))
        ));
        assert!(matches!(
            classify_response(200, None, "<html>"),
            Err(LlmError::ParseError(_))
        ));
    }

    #[test]
    fn test_classify_auth_failures() {
        let body = r#"{"error": {"message": "Incorrect API key provided"}}"#;
        assert_eq!(
            classify_response(401, None, body).unwrap_err(),
            LlmError::Unauthorized("Incorrect API key provided".to_string())
        );
        assert_eq!(
            classify_response(403, None, "forbidden").unwrap_err(),
            LlmError::Unauthorized("forbidden".to_string())
        );
    }

    #[test]
    fn test_classify_rate_limit() {
        assert_eq!(
            classify_response(429, Some("20"), "").unwrap_err(),
            LlmError::RateLimited {
                retry_after_secs: Some(20)
            }
        );
        assert_eq!(
            classify_response(429, Some("soon"), "").unwrap_err(),
            LlmError::RateLimited {
                retry_after_secs: None
            }
        );
    }

    #[test]
    fn test_classify_server_error() {
        let err = classify_response(503, None, r#"{"error": {"message": "overloaded"}}"#).unwrap_err();
        assert_eq!(
            err,
            LlmError::ApiError {
                status: 503,
                message: "overloaded".to_string()
            }
        );
        assert_eq!(err.kind(), crate::llm::ServiceErrorKind::Other);
    }

    #[test]
    fn test_request_body_shape() {
        let request = ChatRequest {
            messages: vec![ChatMessage::system("be a chef"), ChatMessage::user("jollof")],
            max_tokens: Some(2000),
            temperature: Some(0.5),
        };
        let body = CompletionRequest {
            model: "gpt-4",
            chat: &request,
        };

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["model"], "gpt-4");
        assert_eq!(json["max_tokens"], 2000);
        assert_eq!(json["temperature"], 0.5);
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["content"], "jollof");
    }

    #[test]
    fn test_endpoint_joins_base_url() {
        let config = GeneratorConfig {
            base_url: "https://api.example.com/v1/".to_string(),
            ..GeneratorConfig::default()
        };
        let provider = OpenAiProvider::new(&config).unwrap();
        assert_eq!(provider.endpoint, "https://api.example.com/v1/chat/completions");
    }
}
