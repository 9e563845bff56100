//! Prompt templates for the generation service.

pub mod meal_plan;
pub mod recipes;

pub use meal_plan::{render_meal_plan_prompt, MEAL_PLAN_PROMPT_NAME};
pub use recipes::{render_recipes_prompt, RECIPES_PROMPT_NAME};

/// System instruction shared by every generation prompt.
pub const CHEF_SYSTEM_PROMPT: &str = "You are a professional Nigerian chef and nutritionist. \
Generate authentic Nigerian dishes with detailed ingredients, instructions, and nutritional information. \
Always respond with valid JSON only, no other text, following the exact structure requested.";
