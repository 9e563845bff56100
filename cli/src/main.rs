mod generate;
mod ingredients;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
#[command(name = "sabicook")]
#[command(about = "SabiCook CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List catalog ingredients
    Ingredients {
        /// Only ingredients whose name contains this text (case-insensitive)
        #[arg(long)]
        search: Option<String>,
        /// Only ingredients in this category: proteins, carbohydrates, vegetables, oils-fats or spices-seasonings
        #[arg(long)]
        category: Option<String>,
        /// Only ingredients marked as popular
        #[arg(long)]
        common: bool,
    },
    /// Generate recipes from 2 to 10 ingredient ids
    Recipes {
        /// Ingredient ids, e.g. rice tomatoes chicken
        #[arg(required = true)]
        ids: Vec<String>,
    },
    /// Generate a weekly meal plan
    MealPlan,
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Ingredients {
            search,
            category,
            common,
        } => {
            ingredients::list(search.as_deref(), category.as_deref(), common)?;
        }
        Commands::Recipes { ids } => {
            generate::recipes(&ids).await?;
        }
        Commands::MealPlan => {
            generate::meal_plan().await?;
        }
    }

    Ok(())
}
