pub mod account;
pub mod catalog;
pub mod config;
pub mod error;
pub mod llm;
pub mod pipeline;
pub mod prompts;
pub mod saved;
pub mod selection;
pub mod types;

pub use account::{AccountSession, Session, User};
pub use catalog::{CategoryId, Ingredient, IngredientCategory, UnknownCategory};
pub use config::{ConfigError, GeneratorConfig, ProviderKind};
pub use error::{AuthError, GenerateError, InputRejected, ParseFailure, SelectionError};
pub use llm::{create_provider, FakeProvider, LlmError, LlmProvider, OpenAiProvider};
pub use pipeline::{GenerationPipeline, GenerationSettings, Phase};
pub use saved::SavedRecipes;
pub use selection::{SelectionStore, MAX_SELECTIONS, MIN_SELECTIONS};
pub use types::{
    DayPlan, Difficulty, Generated, InstructionStep, MealPlan, Meals, Recipe, RecipeIngredient,
    RecipeRequest, ResultSource, ShoppingCategory, ShoppingItem,
};
