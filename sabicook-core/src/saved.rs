//! Session-scoped recipe bookmarks.

use crate::types::Recipe;

/// Recipes the user saved this session, keyed by id, in the order saved.
#[derive(Debug, Clone, Default)]
pub struct SavedRecipes {
    recipes: Vec<Recipe>,
}

impl SavedRecipes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Save a recipe. Returns false if a recipe with the same id is already saved.
    pub fn save(&mut self, recipe: Recipe) -> bool {
        if self.is_saved(&recipe.id) {
            return false;
        }
        self.recipes.push(recipe);
        true
    }

    /// Remove a saved recipe. Returns false if nothing was saved under `id`.
    pub fn unsave(&mut self, id: &str) -> bool {
        let before = self.recipes.len();
        self.recipes.retain(|r| r.id != id);
        self.recipes.len() != before
    }

    /// Save if unsaved, unsave if saved. Returns whether the recipe is now saved.
    pub fn toggle(&mut self, recipe: &Recipe) -> bool {
        if self.unsave(&recipe.id) {
            false
        } else {
            self.recipes.push(recipe.clone());
            true
        }
    }

    pub fn is_saved(&self, id: &str) -> bool {
        self.recipes.iter().any(|r| r.id == id)
    }

    pub fn list(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    pub fn clear(&mut self) {
        self.recipes.clear();
    }
}
