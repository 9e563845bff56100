use serde::{Deserialize, Serialize};

/// Difficulty level of a recipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    /// Parse a difficulty label, ignoring case and surrounding whitespace.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeIngredient {
    pub name: String,
    pub quantity: String,
}

/// A single cooking step. Steps in a recipe are numbered contiguously from 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstructionStep {
    pub step: u32,
    pub instruction: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
}

/// A generated recipe.
///
/// Field names serialize in camelCase to match the JSON contract the
/// generation service is asked to produce.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,
    pub title: String,
    pub description: String,
    pub ingredients: Vec<RecipeIngredient>,
    pub instructions: Vec<InstructionStep>,
    pub cooking_time: String,
    pub servings: u32,
    pub difficulty: Difficulty,
    pub cost: String,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meals {
    pub breakfast: String,
    pub lunch: String,
    pub dinner: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayPlan {
    pub day: String,
    pub meals: Meals,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoppingItem {
    pub name: String,
    pub quantity: String,
    #[serde(default)]
    pub checked: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoppingCategory {
    pub category: String,
    pub items: Vec<ShoppingItem>,
}

/// A week of meals plus the shopping list needed to cook them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealPlan {
    pub id: String,
    pub week: String,
    /// Always exactly [`DAYS_PER_PLAN`] entries, Monday first.
    pub days: Vec<DayPlan>,
    pub shopping_list: Vec<ShoppingCategory>,
}

pub const DAYS_PER_PLAN: usize = 7;

pub const WEEKDAYS: [&str; DAYS_PER_PLAN] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

impl MealPlan {
    /// Flip the `checked` flag of one shopping-list item.
    ///
    /// Returns the new value, or `None` if either index is out of range.
    pub fn toggle_item(&mut self, category_index: usize, item_index: usize) -> Option<bool> {
        let item = self
            .shopping_list
            .get_mut(category_index)?
            .items
            .get_mut(item_index)?;
        item.checked = !item.checked;
        Some(item.checked)
    }

    /// Number of shopping-list items already checked off.
    pub fn checked_count(&self) -> usize {
        self.shopping_list
            .iter()
            .flat_map(|c| c.items.iter())
            .filter(|i| i.checked)
            .count()
    }
}

/// Immutable snapshot of the inputs for one recipe generation request.
///
/// Captured from the selection store at call time so later selection changes
/// can't leak into a request that is already running.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeRequest {
    pub ingredient_ids: Vec<String>,
}

impl RecipeRequest {
    /// Build a request from ingredient ids. Repeated ids collapse to one entry.
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut ingredient_ids: Vec<String> = Vec::new();
        for id in ids {
            let id = id.into();
            if !ingredient_ids.contains(&id) {
                ingredient_ids.push(id);
            }
        }
        Self { ingredient_ids }
    }
}

/// Where a generated result came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum ResultSource {
    /// Produced from a successful service response.
    Live,
    /// The service could not be used; sample data was substituted.
    Fallback { reason: String },
}

impl ResultSource {
    pub fn is_fallback(&self) -> bool {
        matches!(self, ResultSource::Fallback { .. })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ResultSource::Live => "live",
            ResultSource::Fallback { .. } => "fallback",
        }
    }
}

/// A generated value tagged with how it was obtained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Generated<T> {
    pub value: T,
    pub source: ResultSource,
}
