//! Weekly meal plan prompt. Takes no input; every plan starts from scratch.

pub const MEAL_PLAN_PROMPT_NAME: &str = "weekly_meal_plan";

pub fn render_meal_plan_prompt() -> String {
    r#"Generate a complete 7-day Nigerian meal plan with shopping list.

For each day (Monday to Sunday), provide:
- Breakfast, Lunch, and Dinner - all authentic Nigerian dishes
- Focus on variety and nutritional balance
- Include both traditional and modern Nigerian recipes

Also generate a comprehensive shopping list grouped by categories:
- Proteins (meat, fish, eggs, legumes)
- Carbohydrates (rice, yam, garri, etc.)
- Vegetables & Fruits
- Spices & Seasonings
- Oils & Condiments

Format your response as valid JSON with this structure:
{
  "days": [
    {
      "day": "Monday",
      "meals": {
        "breakfast": "dish name",
        "lunch": "dish name",
        "dinner": "dish name"
      }
    }
  ],
  "shoppingList": [
    {
      "category": "Proteins",
      "items": [
        {"name": "item", "quantity": "amount"}
      ]
    }
  ]
}

Make sure all dishes are authentic Nigerian cuisine!"#
        .to_string()
}
