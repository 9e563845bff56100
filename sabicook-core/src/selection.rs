//! Bounded multi-select of ingredient ids driving recipe generation.

use crate::error::SelectionError;
use crate::types::RecipeRequest;

/// Maximum number of ingredients a user may select.
pub const MAX_SELECTIONS: usize = 10;

/// Minimum number of ingredients needed before recipes can be generated.
pub const MIN_SELECTIONS: usize = 2;

/// In-memory store of the user's selected ingredient ids.
///
/// Ids keep the order they were selected in. A rejected mutation leaves the
/// set untouched and records the rejection in [`SelectionStore::error`]; the
/// next successful mutation clears it.
#[derive(Debug, Clone, Default)]
pub struct SelectionStore {
    selected: Vec<String>,
    error: Option<SelectionError>,
}

impl SelectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select `id` if it isn't selected, deselect it if it is.
    ///
    /// Selecting fails once [`MAX_SELECTIONS`] ids are already chosen.
    /// Deselecting always succeeds.
    pub fn toggle(&mut self, id: &str) -> Result<(), SelectionError> {
        if let Some(pos) = self.selected.iter().position(|s| s == id) {
            self.selected.remove(pos);
            self.error = None;
            return Ok(());
        }

        if self.selected.len() >= MAX_SELECTIONS {
            let err = SelectionError::MaxReached {
                max: MAX_SELECTIONS,
            };
            self.error = Some(err.clone());
            return Err(err);
        }

        self.selected.push(id.to_string());
        self.error = None;
        Ok(())
    }

    /// Replace the whole selection. Duplicate ids collapse to one entry.
    pub fn set_all<I, S>(&mut self, ids: I) -> Result<(), SelectionError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut next: Vec<String> = Vec::new();
        for id in ids {
            let id = id.into();
            if !next.contains(&id) {
                next.push(id);
            }
        }

        if next.len() > MAX_SELECTIONS {
            let err = SelectionError::TooMany {
                requested: next.len(),
                max: MAX_SELECTIONS,
            };
            self.error = Some(err.clone());
            return Err(err);
        }

        self.selected = next;
        self.error = None;
        Ok(())
    }

    pub fn clear(&mut self) {
        self.selected.clear();
        self.error = None;
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.iter().any(|s| s == id)
    }

    pub fn count(&self) -> usize {
        self.selected.len()
    }

    pub fn can_select_more(&self) -> bool {
        self.selected.len() < MAX_SELECTIONS
    }

    pub fn can_generate(&self) -> bool {
        (MIN_SELECTIONS..=MAX_SELECTIONS).contains(&self.selected.len())
    }

    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    /// The last rejection, if no successful mutation happened since.
    pub fn error(&self) -> Option<&SelectionError> {
        self.error.as_ref()
    }

    /// Capture the current selection for a generation request.
    pub fn snapshot(&self) -> RecipeRequest {
        RecipeRequest::new(self.selected.iter().cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("ingredient-{}", i)).collect()
    }

    #[test]
    fn test_toggle_adds_and_removes() {
        let mut store = SelectionStore::new();
        store.toggle("rice").unwrap();
        store.toggle("chicken").unwrap();
        assert!(store.is_selected("rice"));
        assert_eq!(store.count(), 2);

        store.toggle("rice").unwrap();
        assert!(!store.is_selected("rice"));
        assert_eq!(store.selected(), ["chicken".to_string()]);
    }

    #[test]
    fn test_toggle_rejected_at_cap() {
        let mut store = SelectionStore::new();
        store.set_all(ids(MAX_SELECTIONS)).unwrap();

        let err = store.toggle("one-too-many").unwrap_err();
        assert_eq!(err, SelectionError::MaxReached { max: 10 });
        assert_eq!(store.count(), MAX_SELECTIONS);
        assert!(!store.is_selected("one-too-many"));
        assert_eq!(store.error(), Some(&err));

        // Removing at the cap still works and clears the error
        store.toggle("ingredient-0").unwrap();
        assert_eq!(store.count(), MAX_SELECTIONS - 1);
        assert!(store.error().is_none());
    }

    #[test]
    fn test_set_all_rejects_oversized() {
        let mut store = SelectionStore::new();
        store.set_all(["rice", "yam"]).unwrap();

        let err = store.set_all(ids(11)).unwrap_err();
        assert_eq!(
            err,
            SelectionError::TooMany {
                requested: 11,
                max: 10
            }
        );
        assert_eq!(store.selected(), ["rice".to_string(), "yam".to_string()]);
        assert!(store.error().is_some());
    }

    #[test]
    fn test_set_all_collapses_duplicates() {
        let mut store = SelectionStore::new();
        store.set_all(["rice", "rice", "beans"]).unwrap();
        assert_eq!(store.count(), 2);
    }

    #[test]
    fn test_clear_resets_error() {
        let mut store = SelectionStore::new();
        store.set_all(ids(10)).unwrap();
        let _ = store.toggle("extra");
        store.clear();
        assert_eq!(store.count(), 0);
        assert!(store.error().is_none());
    }

    #[test]
    fn test_can_generate_bounds() {
        let mut store = SelectionStore::new();
        assert!(!store.can_generate());
        store.toggle("rice").unwrap();
        assert!(!store.can_generate());
        store.toggle("tomatoes").unwrap();
        assert!(store.can_generate());
        store.set_all(ids(10)).unwrap();
        assert!(store.can_generate());
        assert!(!store.can_select_more());
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut store = SelectionStore::new();
        store.set_all(["rice", "chicken"]).unwrap();
        let request = store.snapshot();
        store.toggle("rice").unwrap();
        assert_eq!(request.ingredient_ids, vec!["rice", "chicken"]);
    }
}
