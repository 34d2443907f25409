use anyhow::Result;
use clap::{Parser, Subcommand};
use sqlx::migrate::MigrateDatabase;

mod cli;

/// saborbr - weekly meal plans and grocery lists
#[derive(Parser)]
#[command(name = "saborbr")]
#[command(about = "Plan the week's meals and build the grocery list", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run database migrations
    Migrate,
    /// Drop database if exists and recreate with migrations
    Reset,
    /// Manage recipes
    #[command(subcommand)]
    Recipe(cli::recipe::RecipeCommand),
    /// Edit the weekly meal plan
    #[command(subcommand)]
    Plan(cli::plan::PlanCommand),
    /// Generate and manage grocery lists
    #[command(subcommand)]
    Groceries(cli::groceries::GroceriesCommand),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = saborbr::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    saborbr::observability::init_observability(
        "saborbr",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    match cli.command {
        Commands::Migrate => migrate_command(config).await,
        Commands::Reset => reset_command(config).await,
        Commands::Recipe(command) => cli::recipe::run(config, command).await,
        Commands::Plan(command) => cli::plan::run(config, command).await,
        Commands::Groceries(command) => cli::groceries::run(config, command).await,
    }
}

#[tracing::instrument(skip(config))]
async fn migrate_command(config: saborbr::Config) -> Result<()> {
    tracing::info!("Running database migrations...");

    if !sqlx::Sqlite::database_exists(&config.database.url).await? {
        tracing::info!("Database does not exist, creating: {}", config.database.url);
        sqlx::Sqlite::create_database(&config.database.url).await?;
    }

    let pool = saborbr::create_pool(&config.database.url, 1).await?;
    saborbr::migrate(&pool).await?;

    tracing::info!("Migrations completed successfully");

    Ok(())
}

#[tracing::instrument(skip(config))]
async fn reset_command(config: saborbr::Config) -> Result<()> {
    tracing::info!("Resetting database...");

    if sqlx::Sqlite::database_exists(&config.database.url).await? {
        tracing::info!("Dropping existing database: {}", config.database.url);
        sqlx::Sqlite::drop_database(&config.database.url).await?;
    } else {
        tracing::info!("Database does not exist, nothing to drop");
    }

    migrate_command(config).await?;

    tracing::info!("Database reset completed successfully");

    Ok(())
}
