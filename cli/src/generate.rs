//! Run the generation pipeline and print results as JSON.

use anyhow::{Context, Result};
use sabicook_core::{
    create_provider, GenerationPipeline, GenerationSettings, GeneratorConfig, ResultSource,
    SelectionStore,
};

fn build_pipeline() -> Result<GenerationPipeline> {
    let config = GeneratorConfig::from_env().context("Invalid generator configuration")?;
    if !config.has_credentials() {
        tracing::warn!("OPENAI_API_KEY not set, results will be sample data");
    }
    let provider = create_provider(&config).context("Failed to create LLM provider")?;
    Ok(GenerationPipeline::new(
        provider,
        GenerationSettings::from(&config),
    ))
}

fn report_source(source: &ResultSource) {
    match source {
        ResultSource::Live => eprintln!("source: live"),
        ResultSource::Fallback { reason } => eprintln!("source: fallback ({})", reason),
    }
}

pub async fn recipes(ids: &[String]) -> Result<()> {
    let mut selection = SelectionStore::new();
    selection.set_all(ids.iter().map(String::as_str))?;

    let pipeline = build_pipeline()?;
    let generated = pipeline.generate_recipes(selection.snapshot()).await?;

    println!("{}", serde_json::to_string_pretty(&generated.value)?);
    report_source(&generated.source);
    Ok(())
}

pub async fn meal_plan() -> Result<()> {
    let pipeline = build_pipeline()?;
    let generated = pipeline.generate_meal_plan().await?;

    println!("{}", serde_json::to_string_pretty(&generated.value)?);
    report_source(&generated.source);
    Ok(())
}
