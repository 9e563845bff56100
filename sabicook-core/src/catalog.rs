//! Ingredient catalog used by the selection screen.
//!
//! Category and ingredient data is loaded from `data/ingredients.json` at
//! compile time and parsed once on first use.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::LazyLock;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown category: {0} (expected one of proteins, carbohydrates, vegetables, oils-fats, spices-seasonings)")]
pub struct UnknownCategory(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CategoryId {
    Proteins,
    Carbohydrates,
    Vegetables,
    OilsFats,
    SpicesSeasonings,
}

impl CategoryId {
    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryId::Proteins => "proteins",
            CategoryId::Carbohydrates => "carbohydrates",
            CategoryId::Vegetables => "vegetables",
            CategoryId::OilsFats => "oils-fats",
            CategoryId::SpicesSeasonings => "spices-seasonings",
        }
    }
}

impl FromStr for CategoryId {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "proteins" => Ok(CategoryId::Proteins),
            "carbohydrates" => Ok(CategoryId::Carbohydrates),
            "vegetables" => Ok(CategoryId::Vegetables),
            "oils-fats" => Ok(CategoryId::OilsFats),
            "spices-seasonings" => Ok(CategoryId::SpicesSeasonings),
            other => Err(UnknownCategory(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: String,
    pub name: String,
    pub category: CategoryId,
    pub icon: String,
    /// Shown with a "Popular" badge.
    pub common: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientCategory {
    pub id: CategoryId,
    pub name: String,
    pub icon: String,
    pub ingredients: Vec<Ingredient>,
}

#[derive(Deserialize)]
struct CatalogData {
    categories: Vec<IngredientCategory>,
}

static CATEGORIES: LazyLock<Vec<IngredientCategory>> = LazyLock::new(|| {
    let json = include_str!("../../data/ingredients.json");
    let data: CatalogData = serde_json::from_str(json).expect("Failed to parse ingredients.json");
    data.categories
});

/// All categories in display order.
pub fn categories() -> &'static [IngredientCategory] {
    &CATEGORIES
}

pub fn all_ingredients() -> impl Iterator<Item = &'static Ingredient> {
    CATEGORIES.iter().flat_map(|c| c.ingredients.iter())
}

pub fn ingredient_by_id(id: &str) -> Option<&'static Ingredient> {
    all_ingredients().find(|i| i.id == id)
}

pub fn ingredients_in_category(category: CategoryId) -> &'static [Ingredient] {
    CATEGORIES
        .iter()
        .find(|c| c.id == category)
        .map(|c| c.ingredients.as_slice())
        .unwrap_or(&[])
}

pub fn common_ingredients() -> Vec<&'static Ingredient> {
    all_ingredients().filter(|i| i.common).collect()
}

/// Case-insensitive substring search on ingredient names.
///
/// A blank query matches everything.
pub fn search(query: &str) -> Vec<&'static Ingredient> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return all_ingredients().collect();
    }
    all_ingredients()
        .filter(|i| i.name.to_lowercase().contains(&query))
        .collect()
}

/// Map ingredient ids to display names for prompt building.
///
/// Ids that aren't in the catalog are passed through unchanged.
pub fn display_names(ids: &[String]) -> Vec<String> {
    ids.iter()
        .map(|id| {
            ingredient_by_id(id)
                .map(|i| i.name.clone())
                .unwrap_or_else(|| id.clone())
        })
        .collect()
}
