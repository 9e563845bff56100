//! Fake LLM provider for testing.
//!
//! This provider returns deterministic responses based on prompt matching,
//! allowing tests to run without network access or API costs.

use super::{ChatRequest, LlmError, LlmProvider};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::RwLock;
use std::time::Duration;

/// What the fake returns for a matched prompt.
#[derive(Debug, Clone)]
enum FakeReply {
    Text(String),
    Fail(LlmError),
}

impl FakeReply {
    fn into_result(self) -> Result<String, LlmError> {
        match self {
            FakeReply::Text(text) => Ok(text),
            FakeReply::Fail(err) => Err(err),
        }
    }
}

/// A fake LLM provider for testing.
///
/// Replies are matched by checking if the prompt contains a registered
/// substring (case-insensitive), in registration order. If nothing matches,
/// the default reply is used, or an error if there is none.
#[derive(Debug, Default)]
pub struct FakeProvider {
    replies: RwLock<Vec<(String, FakeReply)>>,
    default_reply: Option<FakeReply>,
    delay: Option<Duration>,
    calls: AtomicUsize,
}

impl FakeProvider {
    /// Create a new FakeProvider with no registered responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a FakeProvider that returns a specific response for prompts containing a substring.
    pub fn with_response(prompt_contains: &str, response: &str) -> Self {
        let provider = Self::new();
        provider.add_response(prompt_contains, response);
        provider
    }

    /// Create a FakeProvider whose every call fails with `error`.
    pub fn failing(error: LlmError) -> Self {
        Self {
            default_reply: Some(FakeReply::Fail(error)),
            ..Self::default()
        }
    }

    /// Add a response for prompts containing a specific substring.
    pub fn add_response(&self, prompt_contains: &str, response: &str) {
        self.push(prompt_contains, FakeReply::Text(response.to_string()));
    }

    /// Fail prompts containing a specific substring.
    pub fn add_error(&self, prompt_contains: &str, error: LlmError) {
        self.push(prompt_contains, FakeReply::Fail(error));
    }

    fn push(&self, prompt_contains: &str, reply: FakeReply) {
        let mut replies = self.replies.write().unwrap_or_else(|e| e.into_inner());
        replies.push((prompt_contains.to_lowercase(), reply));
    }

    /// Set the default response when no pattern matches.
    pub fn with_default_response(mut self, response: &str) -> Self {
        self.default_reply = Some(FakeReply::Text(response.to_string()));
        self
    }

    /// Wait this long before replying, to simulate a slow service.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Number of times `complete` has been called.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Create a FakeProvider with plausible responses for both generation prompts.
    pub fn with_sample_responses() -> Self {
        let provider = Self::new();

        provider.add_response(
            "meal plan",
            r#"{
                "days": [
                    {"day": "Monday", "meals": {"breakfast": "Akara and Pap", "lunch": "Jollof Rice", "dinner": "Egusi Soup with Eba"}},
                    {"day": "Tuesday", "meals": {"breakfast": "Moi Moi", "lunch": "Fried Rice", "dinner": "Okra Soup with Garri"}},
                    {"day": "Wednesday", "meals": {"breakfast": "Yam and Egg Sauce", "lunch": "Ofada Rice", "dinner": "Banga Soup with Starch"}},
                    {"day": "Thursday", "meals": {"breakfast": "Agege Bread and Tea", "lunch": "Beans and Plantain", "dinner": "Efo Riro with Amala"}},
                    {"day": "Friday", "meals": {"breakfast": "Akamu and Akara", "lunch": "Coconut Rice", "dinner": "Pepper Soup"}},
                    {"day": "Saturday", "meals": {"breakfast": "Plantain Frittata", "lunch": "Party Jollof", "dinner": "Ogbono Soup with Fufu"}},
                    {"day": "Sunday", "meals": {"breakfast": "Boiled Yam", "lunch": "Rice and Stew", "dinner": "Afang Soup with Pounded Yam"}}
                ],
                "shoppingList": [
                    {"category": "Proteins", "items": [{"name": "Chicken", "quantity": "1kg"}, {"name": "Titus Fish", "quantity": "2"}]},
                    {"category": "Carbohydrates", "items": [{"name": "Rice", "quantity": "5kg"}, {"name": "Yam", "quantity": "1 tuber"}]}
                ]
            }"#,
        );

        provider.add_response(
            "recipes",
            r#"[
                {
                    "title": "Pepper Chicken Jollof",
                    "description": "Smoky jollof rice with peppered chicken",
                    "ingredients": [{"name": "Rice", "quantity": "3 cups"}, {"name": "Chicken", "quantity": "1kg"}],
                    "instructions": [
                        {"step": 1, "instruction": "Season and grill the chicken", "time": "25 mins"},
                        {"step": 2, "instruction": "Cook rice in pepper base", "time": "30 mins"}
                    ],
                    "cookingTime": "55 minutes",
                    "servings": 6,
                    "difficulty": "Medium",
                    "cost": "₦4,500",
                    "category": "Main Dish"
                }
            ]"#,
        );

        provider
    }
}

#[async_trait]
impl LlmProvider for FakeProvider {
    async fn complete(&self, _prompt_name: &str, request: &ChatRequest) -> Result<String, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        let prompt = request.full_text();
        let prompt_lower = prompt.to_lowercase();

        let matched = {
            let replies = self.replies.read().unwrap_or_else(|e| e.into_inner());
            replies
                .iter()
                .find(|(pattern, _)| prompt_lower.contains(pattern.as_str()))
                .map(|(_, reply)| reply.clone())
        };

        match matched.or_else(|| self.default_reply.clone()) {
            Some(reply) => reply.into_result(),
            None => Err(LlmError::ApiError {
                status: 0,
                message: format!(
                    "FakeProvider: No response configured for prompt (first 100 chars): {}",
                    prompt.chars().take(100).collect::<String>()
                ),
            }),
        }
    }

    fn provider_name(&self) -> &'static str {
        "fake"
    }

    fn model_name(&self) -> &str {
        "fake-model"
    }
}
