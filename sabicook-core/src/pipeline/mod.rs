//! Recipe and meal-plan generation.
//!
//! Each request runs through a small state machine:
//!
//! ```text
//! Idle -> Validating -> Requesting -> Parsing -> Done
//!                    |             \-> FallbackSubstituted
//!                    \-> Rejected
//! ```
//!
//! Only local validation failures reach the caller as errors. Anything that
//! goes wrong with the service (no credentials, rejected key, rate limits,
//! timeouts, unparseable output) is logged and replaced by the sample data in
//! [`fallback`], tagged with [`ResultSource::Fallback`].
//!
//! At most one request runs per pipeline. A second call made while one is in
//! flight is rejected with [`GenerateError::AlreadyInProgress`].

pub mod fallback;
pub mod normalize;
pub mod parse;

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::Utc;
use tracing::{debug, info, info_span, warn, Instrument};

use crate::catalog;
use crate::config::GeneratorConfig;
use crate::error::{GenerateError, InputRejected, ParseFailure};
use crate::llm::{ChatMessage, ChatRequest, LlmError, LlmProvider, ServiceErrorKind};
use crate::prompts::{
    render_meal_plan_prompt, render_recipes_prompt, CHEF_SYSTEM_PROMPT, MEAL_PLAN_PROMPT_NAME,
    RECIPES_PROMPT_NAME,
};
use crate::selection::{MAX_SELECTIONS, MIN_SELECTIONS};
use crate::types::{Generated, MealPlan, Recipe, RecipeRequest, ResultSource};

/// Where the most recent request is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Validating,
    Requesting,
    Parsing,
    Done,
    FallbackSubstituted,
    Rejected,
}

impl Phase {
    pub fn is_busy(&self) -> bool {
        matches!(self, Phase::Validating | Phase::Requesting | Phase::Parsing)
    }
}

/// Sampling parameters sent with every request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationSettings {
    pub max_tokens: u32,
    pub temperature: f32,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        let config = GeneratorConfig::default();
        Self::from(&config)
    }
}

impl From<&GeneratorConfig> for GenerationSettings {
    fn from(config: &GeneratorConfig) -> Self {
        Self {
            max_tokens: config.max_tokens,
            temperature: config.temperature,
        }
    }
}

/// Why a request ended up on the fallback path.
#[derive(Debug)]
enum Degraded {
    Service(LlmError),
    Parse(ParseFailure),
}

impl Degraded {
    fn reason(&self) -> String {
        match self {
            Degraded::Service(e) => e.to_string(),
            Degraded::Parse(e) => e.to_string(),
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            Degraded::Service(e) => match e.kind() {
                ServiceErrorKind::Unauthorized => "unauthorized",
                ServiceErrorKind::RateLimited => "rate_limited",
                ServiceErrorKind::Unreachable => "unreachable",
                ServiceErrorKind::Other => "service_error",
            },
            Degraded::Parse(_) => "malformed_payload",
        }
    }
}

#[derive(Debug, Default)]
struct PipelineState {
    phase: Phase,
    last_request: Option<RecipeRequest>,
    recipes: Vec<Recipe>,
    recipes_source: Option<ResultSource>,
    meal_plan: Option<MealPlan>,
    meal_plan_source: Option<ResultSource>,
}

/// Marks the pipeline busy for as long as it lives.
///
/// Dropping it (including when the caller abandons the future mid-request)
/// frees the pipeline and resets a half-finished phase to `Idle`.
struct InFlight<'a> {
    pipeline: &'a GenerationPipeline,
}

impl<'a> InFlight<'a> {
    fn acquire(pipeline: &'a GenerationPipeline) -> Option<Self> {
        pipeline
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self { pipeline })
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        let mut state = self.pipeline.lock_state();
        if state.phase.is_busy() {
            state.phase = Phase::Idle;
        }
        drop(state);
        self.pipeline.in_flight.store(false, Ordering::Release);
    }
}

/// Generates recipes and meal plans and keeps the latest results.
#[derive(Debug)]
pub struct GenerationPipeline {
    provider: Arc<dyn LlmProvider>,
    settings: GenerationSettings,
    in_flight: AtomicBool,
    state: Mutex<PipelineState>,
}

/// Check a recipe request's distinct ingredient count.
pub fn validate_request(request: &RecipeRequest) -> Result<(), InputRejected> {
    let selected = request.ingredient_ids.iter().collect::<HashSet<_>>().len();
    if selected < MIN_SELECTIONS {
        return Err(InputRejected::TooFewIngredients { selected });
    }
    if selected > MAX_SELECTIONS {
        return Err(InputRejected::TooManyIngredients { selected });
    }
    Ok(())
}

impl GenerationPipeline {
    pub fn new(provider: Arc<dyn LlmProvider>, settings: GenerationSettings) -> Self {
        Self {
            provider,
            settings,
            in_flight: AtomicBool::new(false),
            state: Mutex::new(PipelineState::default()),
        }
    }

    pub fn with_provider(provider: Arc<dyn LlmProvider>) -> Self {
        Self::new(provider, GenerationSettings::default())
    }

    fn lock_state(&self) -> MutexGuard<'_, PipelineState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn set_phase(&self, phase: Phase) {
        self.lock_state().phase = phase;
    }

    pub fn phase(&self) -> Phase {
        self.lock_state().phase
    }

    pub fn is_generating(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Recipes from the most recent generation, empty after `clear`.
    pub fn last_recipes(&self) -> Vec<Recipe> {
        self.lock_state().recipes.clone()
    }

    pub fn last_recipes_source(&self) -> Option<ResultSource> {
        self.lock_state().recipes_source.clone()
    }

    pub fn meal_plan(&self) -> Option<MealPlan> {
        self.lock_state().meal_plan.clone()
    }

    pub fn meal_plan_source(&self) -> Option<ResultSource> {
        self.lock_state().meal_plan_source.clone()
    }

    /// Tick or untick a shopping-list item on the current meal plan.
    ///
    /// Returns the item's new state, or `None` if there is no plan or no such item.
    pub fn toggle_shopping_item(&self, category_index: usize, item_index: usize) -> Option<bool> {
        let mut state = self.lock_state();
        state
            .meal_plan
            .as_mut()?
            .toggle_item(category_index, item_index)
    }

    /// Drop the last recipes and meal plan.
    pub fn clear(&self) {
        let mut state = self.lock_state();
        state.recipes.clear();
        state.recipes_source = None;
        state.meal_plan = None;
        state.meal_plan_source = None;
        if !state.phase.is_busy() {
            state.phase = Phase::Idle;
        }
    }

    fn chat_request(&self, prompt: String) -> ChatRequest {
        ChatRequest {
            messages: vec![
                ChatMessage::system(CHEF_SYSTEM_PROMPT),
                ChatMessage::user(prompt),
            ],
            max_tokens: Some(self.settings.max_tokens),
            temperature: Some(self.settings.temperature),
        }
    }

    /// Call the service once and parse its reply with `parse_reply`.
    async fn request_and_parse<T>(
        &self,
        prompt_name: &str,
        prompt: String,
        parse_reply: impl FnOnce(&str) -> Result<T, ParseFailure>,
    ) -> Result<T, Degraded> {
        self.set_phase(Phase::Requesting);
        let request = self.chat_request(prompt);

        let text = self
            .provider
            .complete(prompt_name, &request)
            .await
            .map_err(Degraded::Service)?;

        self.set_phase(Phase::Parsing);
        parse_reply(&text).map_err(Degraded::Parse)
    }

    /// Generate recipes for a captured ingredient selection.
    pub async fn generate_recipes(
        &self,
        request: RecipeRequest,
    ) -> Result<Generated<Vec<Recipe>>, GenerateError> {
        let _guard = InFlight::acquire(self).ok_or(GenerateError::AlreadyInProgress)?;

        self.set_phase(Phase::Validating);
        if let Err(rejected) = validate_request(&request) {
            debug!(selected = request.ingredient_ids.len(), "Recipe request rejected");
            self.set_phase(Phase::Rejected);
            return Err(rejected.into());
        }

        self.lock_state().last_request = Some(request.clone());

        let names = catalog::display_names(&request.ingredient_ids);
        let batch_millis = Utc::now().timestamp_millis();
        let span = info_span!(
            "generate_recipes",
            provider = self.provider.provider_name(),
            ingredients = names.len()
        );

        let outcome = self
            .request_and_parse(RECIPES_PROMPT_NAME, render_recipes_prompt(&names), |text| {
                normalize::normalize_recipes(&parse::extract_json(text)?, batch_millis)
            })
            .instrument(span)
            .await;

        let (recipes, source, phase) = match outcome {
            Ok(recipes) => {
                info!(
                    source = "live",
                    count = recipes.len(),
                    model = self.provider.model_name(),
                    "Generated recipes"
                );
                (recipes, ResultSource::Live, Phase::Done)
            }
            Err(degraded) => {
                warn!(
                    source = "fallback",
                    kind = degraded.kind(),
                    reason = %degraded.reason(),
                    "Recipe generation degraded, serving sample recipes"
                );
                (
                    fallback::sample_recipes(),
                    ResultSource::Fallback {
                        reason: degraded.reason(),
                    },
                    Phase::FallbackSubstituted,
                )
            }
        };

        let mut state = self.lock_state();
        state.recipes = recipes.clone();
        state.recipes_source = Some(source.clone());
        state.phase = phase;

        Ok(Generated {
            value: recipes,
            source,
        })
    }

    /// Re-run the last recipe request with the same captured inputs.
    pub async fn regenerate_recipes(&self) -> Result<Generated<Vec<Recipe>>, GenerateError> {
        let last = self.lock_state().last_request.clone();
        match last {
            Some(request) => self.generate_recipes(request).await,
            None => Err(InputRejected::TooFewIngredients { selected: 0 }.into()),
        }
    }

    /// Generate a fresh seven-day meal plan, replacing the current one.
    pub async fn generate_meal_plan(&self) -> Result<Generated<MealPlan>, GenerateError> {
        let _guard = InFlight::acquire(self).ok_or(GenerateError::AlreadyInProgress)?;

        // Nothing to validate: meal plans take no input
        self.set_phase(Phase::Validating);

        let batch_millis = Utc::now().timestamp_millis();
        let span = info_span!(
            "generate_meal_plan",
            provider = self.provider.provider_name()
        );

        let outcome = self
            .request_and_parse(MEAL_PLAN_PROMPT_NAME, render_meal_plan_prompt(), |text| {
                normalize::normalize_meal_plan(&parse::extract_json(text)?, batch_millis)
            })
            .instrument(span)
            .await;

        let (plan, source, phase) = match outcome {
            Ok(plan) => {
                info!(
                    source = "live",
                    shopping_categories = plan.shopping_list.len(),
                    model = self.provider.model_name(),
                    "Generated meal plan"
                );
                (plan, ResultSource::Live, Phase::Done)
            }
            Err(degraded) => {
                warn!(
                    source = "fallback",
                    kind = degraded.kind(),
                    reason = %degraded.reason(),
                    "Meal plan generation degraded, serving sample plan"
                );
                (
                    fallback::sample_meal_plan(),
                    ResultSource::Fallback {
                        reason: degraded.reason(),
                    },
                    Phase::FallbackSubstituted,
                )
            }
        };

        let mut state = self.lock_state();
        state.meal_plan = Some(plan.clone());
        state.meal_plan_source = Some(source.clone());
        state.phase = phase;

        Ok(Generated {
            value: plan,
            source,
        })
    }

    /// Same as [`generate_meal_plan`](Self::generate_meal_plan); plans never depend on prior input.
    pub async fn regenerate_meal_plan(&self) -> Result<Generated<MealPlan>, GenerateError> {
        self.generate_meal_plan().await
    }
}
