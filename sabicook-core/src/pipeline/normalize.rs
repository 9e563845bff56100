//! Turn loosely-typed service JSON into canonical records.
//!
//! Missing or invalid fields get fixed defaults instead of failing the
//! batch. Only a payload with no usable records at all is an error.

use serde_json::{Map, Value as JsonValue};

use crate::error::ParseFailure;
use crate::pipeline::fallback::sample_day;
use crate::types::{
    DayPlan, Difficulty, InstructionStep, MealPlan, Meals, Recipe, RecipeIngredient,
    ShoppingCategory, ShoppingItem, DAYS_PER_PLAN, WEEKDAYS,
};

pub const DEFAULT_TITLE: &str = "Nigerian Dish";
pub const DEFAULT_DESCRIPTION: &str = "Delicious Nigerian recipe";
pub const DEFAULT_COOKING_TIME: &str = "30 minutes";
pub const DEFAULT_SERVINGS: u32 = 4;
pub const DEFAULT_COST: &str = "₦0";
pub const DEFAULT_CATEGORY: &str = "Main Dish";
pub const DEFAULT_QUANTITY: &str = "to taste";
pub const DEFAULT_MEAL: &str = "Chef's choice";

type JsonObject = Map<String, JsonValue>;

/// Keys that mark a bare object as a recipe rather than an error body or some other wrapper.
const RECIPE_KEYS: [&str; 3] = ["title", "ingredients", "instructions"];

/// Non-empty, trimmed string value under any of `keys`.
fn text_field(obj: &JsonObject, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|k| obj.get(*k))
        .find_map(|v| match v {
            JsonValue::String(s) if !s.trim().is_empty() => Some(s.clone()),
            JsonValue::Number(n) => Some(n.to_string()),
            _ => None,
        })
}

fn servings(obj: &JsonObject) -> u32 {
    let parsed = match obj.get("servings") {
        Some(JsonValue::Number(n)) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 1.0).map(|f| f.round() as u64)),
        Some(JsonValue::String(s)) => s.trim().parse::<u64>().ok(),
        _ => None,
    };

    parsed
        .filter(|n| *n > 0)
        .and_then(|n| u32::try_from(n).ok())
        .unwrap_or(DEFAULT_SERVINGS)
}

fn recipe_ingredients(obj: &JsonObject) -> Vec<RecipeIngredient> {
    let Some(JsonValue::Array(items)) = obj.get("ingredients") else {
        return Vec::new();
    };

    items
        .iter()
        .filter_map(|item| match item {
            JsonValue::String(name) if !name.trim().is_empty() => Some(RecipeIngredient {
                name: name.clone(),
                quantity: DEFAULT_QUANTITY.to_string(),
            }),
            JsonValue::Object(o) => Some(RecipeIngredient {
                name: text_field(o, &["name"])?,
                quantity: text_field(o, &["quantity", "amount"])
                    .unwrap_or_else(|| DEFAULT_QUANTITY.to_string()),
            }),
            _ => None,
        })
        .collect()
}

/// Instructions in the order given, renumbered 1..n.
fn recipe_instructions(obj: &JsonObject) -> Vec<InstructionStep> {
    let Some(JsonValue::Array(items)) = obj.get("instructions") else {
        return Vec::new();
    };

    items
        .iter()
        .filter_map(|item| match item {
            JsonValue::String(s) if !s.trim().is_empty() => Some((s.clone(), None)),
            JsonValue::Object(o) => Some((
                text_field(o, &["instruction", "text"])?,
                text_field(o, &["time"]),
            )),
            _ => None,
        })
        .zip(1..)
        .map(|((instruction, time), step)| InstructionStep {
            step,
            instruction,
            time,
        })
        .collect()
}

/// Normalize one recipe object.
pub fn normalize_recipe(obj: &JsonObject, id: String) -> Recipe {
    let difficulty = obj
        .get("difficulty")
        .and_then(|v| v.as_str())
        .and_then(Difficulty::parse)
        .unwrap_or_default();

    Recipe {
        id,
        title: text_field(obj, &["title"]).unwrap_or_else(|| DEFAULT_TITLE.to_string()),
        description: text_field(obj, &["description"])
            .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string()),
        ingredients: recipe_ingredients(obj),
        instructions: recipe_instructions(obj),
        cooking_time: text_field(obj, &["cookingTime", "cooking_time"])
            .unwrap_or_else(|| DEFAULT_COOKING_TIME.to_string()),
        servings: servings(obj),
        difficulty,
        cost: text_field(obj, &["cost"]).unwrap_or_else(|| DEFAULT_COST.to_string()),
        category: text_field(obj, &["category"]).unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
    }
}

/// Normalize a batch of recipes.
///
/// Accepts a bare array, an object wrapping the array under `recipes`, or a
/// single recipe object (one carrying a title, ingredients or instructions). Ids are `recipe_<batch_millis>_<index>`.
pub fn normalize_recipes(value: &JsonValue, batch_millis: i64) -> Result<Vec<Recipe>, ParseFailure> {
    let items: Vec<&JsonValue> = match value {
        JsonValue::Array(items) => items.iter().collect(),
        JsonValue::Object(obj) => match obj.get("recipes") {
            Some(JsonValue::Array(items)) => items.iter().collect(),
            Some(_) => {
                return Err(ParseFailure::UnexpectedShape(
                    "\"recipes\" is not an array".to_string(),
                ))
            }
            None if RECIPE_KEYS.iter().any(|k| obj.contains_key(*k)) => vec![value],
            None => {
                return Err(ParseFailure::UnexpectedShape(
                    "object is neither a recipe nor a recipe list".to_string(),
                ))
            }
        },
        _ => {
            return Err(ParseFailure::UnexpectedShape(
                "expected an array of recipes".to_string(),
            ))
        }
    };

    let recipes: Vec<Recipe> = items
        .into_iter()
        .filter_map(|v| v.as_object())
        .enumerate()
        .map(|(index, obj)| normalize_recipe(obj, format!("recipe_{}_{}", batch_millis, index)))
        .collect();

    if recipes.is_empty() {
        return Err(ParseFailure::Empty);
    }

    Ok(recipes)
}

fn meals(obj: &JsonObject, fallback: &Meals) -> Meals {
    let Some(JsonValue::Object(m)) = obj.get("meals") else {
        return fallback.clone();
    };
    let meal = |key: &str| text_field(m, &[key]).unwrap_or_else(|| DEFAULT_MEAL.to_string());
    Meals {
        breakfast: meal("breakfast"),
        lunch: meal("lunch"),
        dinner: meal("dinner"),
    }
}

fn shopping_list(obj: &JsonObject) -> Vec<ShoppingCategory> {
    let Some(JsonValue::Array(categories)) = obj
        .get("shoppingList")
        .or_else(|| obj.get("shopping_list"))
    else {
        return Vec::new();
    };

    categories
        .iter()
        .filter_map(|c| c.as_object())
        .map(|c| ShoppingCategory {
            category: text_field(c, &["category"]).unwrap_or_else(|| "Other".to_string()),
            items: match c.get("items") {
                Some(JsonValue::Array(items)) => items
                    .iter()
                    .filter_map(|i| i.as_object())
                    .map(|i| ShoppingItem {
                        name: text_field(i, &["name"]).unwrap_or_else(|| "Item".to_string()),
                        quantity: text_field(i, &["quantity"])
                            .unwrap_or_else(|| "1 unit".to_string()),
                        // Checking items off is the user's job, never the model's
                        checked: false,
                    })
                    .collect(),
                _ => Vec::new(),
            },
        })
        .collect()
}

/// Normalize a meal plan object into exactly seven days.
///
/// Days the service left out are filled from the sample week; extra days are
/// dropped. A payload without any day entries is rejected.
pub fn normalize_meal_plan(value: &JsonValue, batch_millis: i64) -> Result<MealPlan, ParseFailure> {
    let obj = value
        .as_object()
        .ok_or_else(|| ParseFailure::UnexpectedShape("expected a meal plan object".to_string()))?;

    let provided: Vec<&JsonObject> = match obj.get("days") {
        Some(JsonValue::Array(days)) => days.iter().filter_map(|d| d.as_object()).collect(),
        _ => Vec::new(),
    };

    if provided.is_empty() {
        return Err(ParseFailure::Empty);
    }

    let days = (0..DAYS_PER_PLAN)
        .map(|index| {
            let sample = sample_day(index);
            match provided.get(index) {
                Some(day) => DayPlan {
                    day: text_field(day, &["day"]).unwrap_or_else(|| WEEKDAYS[index].to_string()),
                    meals: meals(day, &sample.meals),
                },
                None => sample,
            }
        })
        .collect();

    Ok(MealPlan {
        id: format!("mealplan_{}", batch_millis),
        week: text_field(obj, &["week"]).unwrap_or_else(|| "This Week".to_string()),
        days,
        shopping_list: shopping_list(obj),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_servings_defaults_to_four() {
        let value = json!([{
            "title": "Ofada Stew",
            "description": "Spicy green pepper stew",
            "ingredients": [{"name": "Locust beans", "quantity": "2 tbsp"}],
            "instructions": [{"step": 1, "instruction": "Bleach the palm oil", "time": "10 mins"}],
            "cookingTime": "1 hour",
            "difficulty": "Hard",
            "cost": "₦3,000",
            "category": "Stew"
        }]);

        let recipes = normalize_recipes(&value, 42).unwrap();
        let recipe = &recipes[0];
        assert_eq!(recipe.servings, 4);
        assert_eq!(recipe.id, "recipe_42_0");
        assert_eq!(recipe.title, "Ofada Stew");
        assert_eq!(recipe.description, "Spicy green pepper stew");
        assert_eq!(recipe.cooking_time, "1 hour");
        assert_eq!(recipe.difficulty, Difficulty::Hard);
        assert_eq!(recipe.cost, "₦3,000");
        assert_eq!(recipe.category, "Stew");
        assert_eq!(recipe.ingredients[0].quantity, "2 tbsp");
        assert_eq!(recipe.instructions[0].time.as_deref(), Some("10 mins"));
    }

    #[test]
    fn test_defaults_for_empty_object() {
        let recipes = normalize_recipes(&json!([{}]), 1).unwrap();
        let recipe = &recipes[0];
        assert_eq!(recipe.title, DEFAULT_TITLE);
        assert_eq!(recipe.description, DEFAULT_DESCRIPTION);
        assert_eq!(recipe.cooking_time, DEFAULT_COOKING_TIME);
        assert_eq!(recipe.servings, DEFAULT_SERVINGS);
        assert_eq!(recipe.difficulty, Difficulty::Medium);
        assert_eq!(recipe.cost, DEFAULT_COST);
        assert_eq!(recipe.category, DEFAULT_CATEGORY);
        assert!(recipe.ingredients.is_empty());
        assert!(recipe.instructions.is_empty());
    }

    #[test]
    fn test_invalid_values_are_replaced() {
        let value = json!({
            "title": "   ",
            "servings": 0,
            "difficulty": "Expert",
            "ingredients": "rice, beans",
            "cost": null
        });
        let recipe = &normalize_recipes(&value, 1).unwrap()[0];
        assert_eq!(recipe.title, DEFAULT_TITLE);
        assert_eq!(recipe.servings, DEFAULT_SERVINGS);
        assert_eq!(recipe.difficulty, Difficulty::Medium);
        assert!(recipe.ingredients.is_empty());
        assert_eq!(recipe.cost, DEFAULT_COST);
    }

    #[test]
    fn test_servings_coercion() {
        let recipe = |servings: JsonValue| normalize_recipe(json!({ "servings": servings }).as_object().unwrap(), String::new());
        assert_eq!(recipe(json!(6)).servings, 6);
        assert_eq!(recipe(json!("8")).servings, 8);
        assert_eq!(recipe(json!(2.6)).servings, 3);
        assert_eq!(recipe(json!(-2)).servings, 4);
        assert_eq!(recipe(json!("a few")).servings, 4);
    }

    #[test]
    fn test_instructions_are_renumbered() {
        let value = json!([{
            "instructions": [
                {"step": 3, "instruction": "Wash the rice"},
                {"step": 7, "instruction": ""},
                "Boil water",
                {"step": 9, "instruction": "Serve hot", "time": "1 min"}
            ]
        }]);
        let recipe = &normalize_recipes(&value, 1).unwrap()[0];
        let steps: Vec<(u32, &str)> = recipe
            .instructions
            .iter()
            .map(|s| (s.step, s.instruction.as_str()))
            .collect();
        assert_eq!(
            steps,
            vec![(1, "Wash the rice"), (2, "Boil water"), (3, "Serve hot")]
        );
    }

    #[test]
    fn test_ingredient_entries() {
        let value = json!([{
            "ingredients": [
                {"name": "Garri"},
                {"quantity": "2 cups"},
                "Sugar",
                {"name": "Groundnuts", "quantity": 1}
            ]
        }]);
        let recipe = &normalize_recipes(&value, 1).unwrap()[0];
        assert_eq!(
            recipe.ingredients,
            vec![
                RecipeIngredient {
                    name: "Garri".to_string(),
                    quantity: DEFAULT_QUANTITY.to_string()
                },
                RecipeIngredient {
                    name: "Sugar".to_string(),
                    quantity: DEFAULT_QUANTITY.to_string()
                },
                RecipeIngredient {
                    name: "Groundnuts".to_string(),
                    quantity: "1".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_recipe_batch_shapes() {
        let wrapped = json!({"recipes": [{"title": "A"}, {"title": "B"}]});
        assert_eq!(normalize_recipes(&wrapped, 5).unwrap().len(), 2);

        let single = json!({"title": "Suya"});
        assert_eq!(normalize_recipes(&single, 5).unwrap()[0].title, "Suya");

        assert_eq!(normalize_recipes(&json!([]), 5), Err(ParseFailure::Empty));
        assert_eq!(normalize_recipes(&json!([1, "x"]), 5), Err(ParseFailure::Empty));
        assert!(matches!(
            normalize_recipes(&json!("just text"), 5),
            Err(ParseFailure::UnexpectedShape(_))
        ));
        assert!(matches!(
            normalize_recipes(&json!({"recipes": "none"}), 5),
            Err(ParseFailure::UnexpectedShape(_))
        ));
    }

    #[test]
    fn test_non_recipe_objects_are_rejected() {
        for value in [
            json!({}),
            json!({"error": {"message": "content filtered"}}),
            json!({"data": [{"title": "Jollof"}, {"title": "Egusi"}]}),
        ] {
            assert!(
                matches!(
                    normalize_recipes(&value, 5),
                    Err(ParseFailure::UnexpectedShape(_))
                ),
                "{}",
                value
            );
        }

        let instructions_only = json!({"instructions": ["Boil water"]});
        assert_eq!(normalize_recipes(&instructions_only, 5).unwrap().len(), 1);
    }

    #[test]
    fn test_meal_plan_padded_to_seven_days() {
        let value = json!({
            "days": [
                {"day": "Monday", "meals": {"breakfast": "Akara", "lunch": "Amala", "dinner": "Suya"}},
                {"meals": {"breakfast": "Moi Moi"}}
            ],
            "shoppingList": [
                {"category": "Proteins", "items": [{"name": "Beef", "quantity": "1kg", "checked": true}, {}]},
                {"items": []}
            ]
        });

        let plan = normalize_meal_plan(&value, 99).unwrap();
        assert_eq!(plan.id, "mealplan_99");
        assert_eq!(plan.days.len(), 7);
        assert_eq!(plan.days[0].meals.dinner, "Suya");
        assert_eq!(plan.days[1].day, "Tuesday");
        assert_eq!(plan.days[1].meals.breakfast, "Moi Moi");
        assert_eq!(plan.days[1].meals.lunch, DEFAULT_MEAL);
        assert_eq!(plan.days[6], sample_day(6));

        let proteins = &plan.shopping_list[0];
        assert!(!proteins.items[0].checked);
        assert_eq!(proteins.items[1].name, "Item");
        assert_eq!(proteins.items[1].quantity, "1 unit");
        assert_eq!(plan.shopping_list[1].category, "Other");
    }

    #[test]
    fn test_meal_plan_extra_days_truncated() {
        let days: Vec<JsonValue> = (0..9)
            .map(|i| json!({"day": format!("Day {}", i), "meals": {"breakfast": "b", "lunch": "l", "dinner": "d"}}))
            .collect();
        let plan = normalize_meal_plan(&json!({ "days": days }), 1).unwrap();
        assert_eq!(plan.days.len(), 7);
        assert_eq!(plan.days[6].day, "Day 6");
        assert!(plan.shopping_list.is_empty());
    }

    #[test]
    fn test_meal_plan_without_days_is_rejected() {
        assert_eq!(normalize_meal_plan(&json!({}), 1), Err(ParseFailure::Empty));
        assert!(matches!(
            normalize_meal_plan(&json!([{"day": "Monday"}]), 1),
            Err(ParseFailure::UnexpectedShape(_))
        ));
    }
}
