//! Golden file tests for turning service replies into results.
//!
//! Each fixture in `fixtures/replies/` holds a raw reply as the service might
//! send it, and what the pipeline should publish after parsing, normalizing,
//! or falling back.

use sabicook_core::{FakeProvider, GenerationPipeline, RecipeRequest};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
enum ReplyKind {
    Recipes,
    MealPlan,
}

/// A test case loaded from a JSON fixture file
#[derive(Debug, Deserialize)]
struct TestCase {
    kind: ReplyKind,
    /// Raw text returned by the fake service
    reply: String,
    expected: Expected,
}

#[derive(Debug, Deserialize)]
struct Expected {
    /// "live" or "fallback"
    source: String,
    #[serde(default)]
    titles: Vec<String>,
    #[serde(default)]
    servings: Option<Vec<u32>>,
    #[serde(default)]
    days: Vec<String>,
}

fn load_test_cases() -> Vec<(String, TestCase)> {
    let fixtures_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/replies");

    let mut cases = Vec::new();

    for entry in fs::read_dir(&fixtures_dir).expect("Failed to read fixtures directory") {
        let entry = entry.expect("Failed to read directory entry");
        let path = entry.path();

        if path.extension().map(|e| e == "json").unwrap_or(false) {
            let name = path.file_stem().unwrap().to_string_lossy().into_owned();
            let content = fs::read_to_string(&path)
                .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e));
            let case: TestCase = serde_json::from_str(&content)
                .unwrap_or_else(|e| panic!("Failed to parse {}: {}", path.display(), e));
            cases.push((name, case));
        }
    }

    assert!(
        !cases.is_empty(),
        "No test fixtures found in {:?}",
        fixtures_dir
    );
    cases.sort_by(|a, b| a.0.cmp(&b.0));
    cases
}

#[tokio::test]
async fn test_reply_golden_files() {
    for (name, case) in load_test_cases() {
        println!("Testing: {}", name);

        let provider = Arc::new(FakeProvider::new().with_default_response(&case.reply));
        let pipeline = GenerationPipeline::with_provider(provider.clone());

        match case.kind {
            ReplyKind::Recipes => {
                let generated = pipeline
                    .generate_recipes(RecipeRequest::new(["rice", "beans", "plantain"]))
                    .await
                    .unwrap_or_else(|e| panic!("Generation failed for {}: {}", name, e));

                assert_eq!(
                    generated.source.as_str(),
                    case.expected.source,
                    "Source mismatch for {}",
                    name
                );

                let titles: Vec<&str> = generated.value.iter().map(|r| r.title.as_str()).collect();
                assert_eq!(titles, case.expected.titles, "Title mismatch for {}", name);

                if let Some(servings) = &case.expected.servings {
                    let actual: Vec<u32> = generated.value.iter().map(|r| r.servings).collect();
                    assert_eq!(&actual, servings, "Servings mismatch for {}", name);
                }

                for recipe in &generated.value {
                    let steps: Vec<u32> = recipe.instructions.iter().map(|s| s.step).collect();
                    let expected: Vec<u32> = (1..=steps.len() as u32).collect();
                    assert_eq!(steps, expected, "Step numbering for {} in {}", recipe.title, name);
                }
            }
            ReplyKind::MealPlan => {
                let generated = pipeline
                    .generate_meal_plan()
                    .await
                    .unwrap_or_else(|e| panic!("Generation failed for {}: {}", name, e));

                assert_eq!(
                    generated.source.as_str(),
                    case.expected.source,
                    "Source mismatch for {}",
                    name
                );

                let days: Vec<&str> = generated.value.days.iter().map(|d| d.day.as_str()).collect();
                assert_eq!(days, case.expected.days, "Day mismatch for {}", name);
                assert_eq!(generated.value.checked_count(), 0, "Checked items in {}", name);
            }
        }

        assert_eq!(provider.call_count(), 1, "Exactly one service call for {}", name);
    }
}
