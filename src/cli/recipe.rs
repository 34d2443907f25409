use std::path::PathBuf;

use clap::Subcommand;
use saborbr_shared::RecipeRepository;

#[derive(Subcommand)]
pub enum RecipeCommand {
    /// Import recipes from a JSON file holding an array of recipes
    Import { file: PathBuf },
    /// List stored recipes
    List,
}

pub async fn run(config: saborbr::Config, command: RecipeCommand) -> anyhow::Result<()> {
    let store = super::open_store(&config).await?;

    match command {
        RecipeCommand::Import { file } => {
            let content = tokio::fs::read_to_string(&file).await?;
            let recipes = saborbr_shared::import_recipes(&content)?;

            for recipe in &recipes {
                RecipeRepository::save(&store, recipe).await?;
            }

            tracing::info!(count = recipes.len(), file = %file.display(), "recipes imported");
            println!("{} recipes imported", recipes.len());
        }
        RecipeCommand::List => {
            for recipe in RecipeRepository::list(&store).await? {
                println!(
                    "{}\t{} ({} servings, {} ingredients)",
                    recipe.id,
                    recipe.title,
                    recipe.servings,
                    recipe.ingredients.len()
                );
            }
        }
    }

    Ok(())
}
