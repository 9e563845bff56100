//! Recipe generation prompt.

/// Prompt name for logging.
pub const RECIPES_PROMPT_NAME: &str = "nigerian_recipes";

/// Number of recipes requested per generation.
pub const RECIPES_PER_REQUEST: usize = 5;

/// Render the recipe prompt for the given ingredient names.
pub fn render_recipes_prompt(ingredient_names: &[String]) -> String {
    let ingredients_list = ingredient_names.join(", ");

    format!(
        r#"Generate {count} authentic Nigerian recipes using these ingredients: {ingredients_list}.

For each recipe, provide:
- A creative Nigerian recipe title
- Brief description (under 100 characters)
- Complete ingredients list with quantities
- Step-by-step cooking instructions with time estimates
- Total cooking time
- Number of servings
- Difficulty level (Easy, Medium, or Hard)
- Estimated cost in Naira
- Recipe category (Main Dish, Soup, etc.)

Format your response as a valid JSON array with this exact structure:
[
  {{
    "title": "Recipe Name",
    "description": "Brief description",
    "ingredients": [{{"name": "ingredient", "quantity": "amount"}}],
    "instructions": [{{"step": 1, "instruction": "instruction", "time": "time"}}],
    "cookingTime": "total time",
    "servings": 4,
    "difficulty": "Medium",
    "cost": "₦1,500",
    "category": "Main Dish"
  }}
]

Focus on authentic Nigerian cuisine and be creative with the ingredient combinations!"#,
        count = RECIPES_PER_REQUEST,
        ingredients_list = ingredients_list
    )
}
