//! Fixed sample data served when the generation service can't be used.

use crate::types::{
    DayPlan, Difficulty, InstructionStep, MealPlan, Meals, Recipe, RecipeIngredient,
    ShoppingCategory, ShoppingItem, WEEKDAYS,
};

pub const FALLBACK_MEAL_PLAN_ID: &str = "mealplan_sample";

fn ingredients(items: &[(&str, &str)]) -> Vec<RecipeIngredient> {
    items
        .iter()
        .map(|(name, quantity)| RecipeIngredient {
            name: name.to_string(),
            quantity: quantity.to_string(),
        })
        .collect()
}

fn steps(items: &[(&str, &str)]) -> Vec<InstructionStep> {
    items
        .iter()
        .zip(1..)
        .map(|((instruction, time), step)| InstructionStep {
            step,
            instruction: instruction.to_string(),
            time: Some(time.to_string()),
        })
        .collect()
}

struct Sample<'a> {
    title: &'a str,
    description: &'a str,
    ingredients: &'a [(&'a str, &'a str)],
    steps: &'a [(&'a str, &'a str)],
    cooking_time: &'a str,
    servings: u32,
    difficulty: Difficulty,
    cost: &'a str,
    category: &'a str,
}

const SAMPLE_RECIPES: [Sample<'static>; 5] = [
    Sample {
        title: "Classic Jollof Rice",
        description: "Perfectly spiced jollof rice with chicken",
        ingredients: &[
            ("Rice", "2 cups"),
            ("Tomatoes", "4 medium"),
            ("Onions", "2 medium"),
            ("Chicken", "500g"),
        ],
        steps: &[
            ("Parboil rice for 10 minutes", "10 mins"),
            ("Blend tomatoes and peppers", "5 mins"),
            ("Cook the rice in tomato sauce", "20 mins"),
        ],
        cooking_time: "35 minutes",
        servings: 4,
        difficulty: Difficulty::Medium,
        cost: "₦1,500",
        category: "Main Dish",
    },
    Sample {
        title: "Egusi Soup",
        description: "Rich and flavorful melon seed soup",
        ingredients: &[
            ("Egusi", "2 cups"),
            ("Spinach", "1 bunch"),
            ("Palm Oil", "1/2 cup"),
            ("Stockfish", "1 piece"),
            ("Crayfish", "2 tbsp"),
            ("Ugu", "1 bunch"),
            ("Pepper", "3"),
            ("Onion", "1"),
            ("Maggi", "2"),
            ("Salt", "to taste"),
        ],
        steps: &[
            ("Boil and grind egusi seeds", "15 mins"),
            ("Cook vegetables in palm oil", "10 mins"),
            ("Add egusi paste and cook", "15 mins"),
            ("Add spinach and stockfish", "5 mins"),
        ],
        cooking_time: "45 minutes",
        servings: 6,
        difficulty: Difficulty::Medium,
        cost: "₦2,500",
        category: "Soup",
    },
    Sample {
        title: "Pounded Yam",
        description: "Smooth and fluffy pounded yam with soup",
        ingredients: &[
            ("Yam", "1 large tuber"),
            ("Efo Riro", "1 pot"),
            ("Red Palm Oil", "3 tbsp"),
            ("Irish Potatoes", "2 medium"),
            ("Scotch Bonnet", "1 bunch"),
            ("Onion", "1"),
            ("Crayfish", "1 tbsp"),
            ("Salt", "to taste"),
        ],
        steps: &[
            ("Peel and boil yam until soft", "20 mins"),
            ("Cook vegetables for efo riro", "15 mins"),
            ("Pound yam until smooth", "10 mins"),
        ],
        cooking_time: "45 minutes",
        servings: 4,
        difficulty: Difficulty::Easy,
        cost: "₦2,000",
        category: "Main Dish",
    },
    Sample {
        title: "Nigerian Fried Rice",
        description: "Colorful and flavorful fried rice with vegetables",
        ingredients: &[
            ("Rice", "2 cups"),
            ("Shrimps", "200g"),
            ("Liver", "200g"),
            ("Carrots", "1 medium"),
            ("Green Beans", "1 cup"),
            ("Peas", "1 cup"),
            ("Onions", "1 medium"),
            ("Vegetable Oil", "3 tbsp"),
            ("Curry Powder", "2 tsp"),
            ("Thyme", "1 tsp"),
        ],
        steps: &[
            ("Parboil rice and set aside", "10 mins"),
            ("Cook liver and shrimps", "10 mins"),
            ("Fry rice with vegetables and proteins", "15 mins"),
        ],
        cooking_time: "35 minutes",
        servings: 4,
        difficulty: Difficulty::Easy,
        cost: "₦1,800",
        category: "Main Dish",
    },
    Sample {
        title: "Okra Soup",
        description: "Tasty okra soup with palm oil and fish",
        ingredients: &[
            ("Okra", "2 cups"),
            ("Fish", "1 small"),
            ("Palm Oil", "1/2 cup"),
            ("Crayfish", "1 tbsp"),
            ("Onion", "1"),
            ("Pepper", "2"),
            ("Maggi", "1"),
            ("Salt", "to taste"),
        ],
        steps: &[
            ("Wash and chop okra", "5 mins"),
            ("Cook fish in palm oil", "10 mins"),
            ("Add okra and seasonings", "15 mins"),
        ],
        cooking_time: "30 minutes",
        servings: 4,
        difficulty: Difficulty::Easy,
        cost: "₦1,200",
        category: "Soup",
    },
];

/// The five sample recipes. Identical on every call, ids included.
pub fn sample_recipes() -> Vec<Recipe> {
    SAMPLE_RECIPES
        .iter()
        .zip(1..)
        .map(|(s, n): (&Sample, u32)| Recipe {
            id: format!("sample_recipe_{}", n),
            title: s.title.to_string(),
            description: s.description.to_string(),
            ingredients: ingredients(s.ingredients),
            instructions: steps(s.steps),
            cooking_time: s.cooking_time.to_string(),
            servings: s.servings,
            difficulty: s.difficulty,
            cost: s.cost.to_string(),
            category: s.category.to_string(),
        })
        .collect()
}

/// (breakfast, lunch, dinner) for Monday through Sunday.
const SAMPLE_WEEK: [(&str, &str, &str); 7] = [
    ("Akara and Pap", "Jollof Rice with Chicken", "Egusi Soup with Pounded Yam"),
    ("Bread and Tea", "Fried Rice with Salad", "Okra Soup with Garri"),
    ("Moi Moi", "Coconut Rice with Beef", "Banga Soup with Fufu"),
    ("Yam and Egg Sauce", "Jollof Spaghetti", "Vegetable Soup with Semolina"),
    ("Akamu and Beans", "Rice and Stew", "Ogbono Soup with Eba"),
    ("Pancakes", "Party Jollof Rice", "Pepper Soup with Yam"),
    ("Indomie and Egg", "Rice and Stew with Salad", "Afang Soup with Pounded Yam"),
];

const SAMPLE_SHOPPING: [(&str, &[(&str, &str)]); 3] = [
    (
        "Proteins",
        &[("Chicken", "1kg"), ("Beef", "500g"), ("Fish", "2 medium")],
    ),
    (
        "Carbohydrates",
        &[("Rice", "5kg"), ("Yam", "3 tubers"), ("Garri", "2kg")],
    ),
    (
        "Vegetables",
        &[
            ("Tomatoes", "10 pieces"),
            ("Pepper", "1 bunch"),
            ("Onions", "5 pieces"),
        ],
    ),
];

/// The sample day for `index` (0 = Monday). Also used to fill gaps in live plans.
pub fn sample_day(index: usize) -> DayPlan {
    let (breakfast, lunch, dinner) = SAMPLE_WEEK[index % SAMPLE_WEEK.len()];
    DayPlan {
        day: WEEKDAYS[index % WEEKDAYS.len()].to_string(),
        meals: Meals {
            breakfast: breakfast.to_string(),
            lunch: lunch.to_string(),
            dinner: dinner.to_string(),
        },
    }
}

/// The sample week with its shopping list, nothing checked off.
pub fn sample_meal_plan() -> MealPlan {
    MealPlan {
        id: FALLBACK_MEAL_PLAN_ID.to_string(),
        week: "This Week".to_string(),
        days: (0..WEEKDAYS.len()).map(sample_day).collect(),
        shopping_list: SAMPLE_SHOPPING
            .iter()
            .map(|(category, items)| ShoppingCategory {
                category: category.to_string(),
                items: items
                    .iter()
                    .map(|(name, quantity)| ShoppingItem {
                        name: name.to_string(),
                        quantity: quantity.to_string(),
                        checked: false,
                    })
                    .collect(),
            })
            .collect(),
    }
}
