//! Browse the ingredient catalog.

use anyhow::Result;
use sabicook_core::catalog::{self, CategoryId, Ingredient};

pub fn list(search: Option<&str>, category: Option<&str>, common_only: bool) -> Result<()> {
    let category = category.map(str::parse::<CategoryId>).transpose()?;

    let matches: Vec<&Ingredient> = catalog::search(search.unwrap_or(""))
        .into_iter()
        .filter(|i| category.is_none() || category == Some(i.category))
        .filter(|i| !common_only || i.common)
        .collect();

    for ingredient in &matches {
        println!(
            "{} {:<24} {:<16} {}{}",
            ingredient.icon,
            ingredient.name,
            ingredient.category.as_str(),
            ingredient.id,
            if ingredient.common { "  (popular)" } else { "" }
        );
    }
    eprintln!("{} ingredients", matches.len());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_filter() {
        assert!(list(None, Some("oils-fats"), true).is_ok());
        assert!(list(Some("rice"), None, false).is_ok());

        let err = list(None, Some("grains-tubers"), false).unwrap_err();
        assert!(err.to_string().contains("grains-tubers"));
    }
}
