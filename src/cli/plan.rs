use std::collections::HashMap;

use clap::Subcommand;
use saborbr_mealplan::Command;
use saborbr_shared::{MealSlot, RecipeRepository};
use time::Date;

#[derive(Subcommand)]
pub enum PlanCommand {
    /// Put a recipe in a meal slot
    Assign {
        /// Any day of the week, defaults to the current week
        #[arg(long, value_parser = super::parse_date)]
        week: Option<Date>,
        #[arg(long, value_parser = super::parse_date)]
        day: Date,
        /// breakfast, lunch, dinner or snack
        #[arg(long)]
        slot: MealSlot,
        #[arg(long)]
        recipe: String,
    },
    /// Remove a recipe from a meal slot
    Clear {
        #[arg(long, value_parser = super::parse_date)]
        week: Option<Date>,
        #[arg(long, value_parser = super::parse_date)]
        day: Date,
        #[arg(long)]
        slot: MealSlot,
        /// Snack to remove, all snacks when omitted
        #[arg(long)]
        recipe: Option<String>,
    },
    /// Print the plan of a week
    Show {
        #[arg(long, value_parser = super::parse_date)]
        week: Option<Date>,
    },
}

pub async fn run(config: saborbr::Config, command: PlanCommand) -> anyhow::Result<()> {
    let store = super::open_store(&config).await?;
    let command_store = Command(store.clone());

    match command {
        PlanCommand::Assign {
            week,
            day,
            slot,
            recipe,
        } => {
            if RecipeRepository::get(&store, &recipe).await?.is_none() {
                tracing::warn!(recipe_id = %recipe, "assigning unknown recipe");
            }

            let week = week.unwrap_or(day);
            command_store.assign(week, day, slot, &recipe).await?;
            println!("{recipe} assigned to {slot} on {}", saborbr_shared::day_key(day)?);
        }
        PlanCommand::Clear {
            week,
            day,
            slot,
            recipe,
        } => {
            let week = week.unwrap_or(day);
            command_store
                .clear(week, day, slot, recipe.as_deref())
                .await?;
            println!("{slot} cleared on {}", saborbr_shared::day_key(day)?);
        }
        PlanCommand::Show { week } => {
            let week = week.unwrap_or_else(super::today);
            let Some(plan) = command_store.for_week(week).await? else {
                println!(
                    "no meal plan for the week of {}",
                    saborbr_shared::day_key(saborbr_shared::week_start(week))?
                );
                return Ok(());
            };

            let mut titles = HashMap::new();
            for id in plan.recipe_ids() {
                if let Some(recipe) = RecipeRepository::get(&store, id).await? {
                    titles.insert(id.to_owned(), recipe.title);
                }
            }
            let title = |id: &str| {
                titles
                    .get(id)
                    .cloned()
                    .unwrap_or_else(|| format!("{id} (missing)"))
            };

            println!("week of {}", saborbr_shared::day_key(plan.week_start)?);
            for day in saborbr_shared::week_days(plan.week_start) {
                let Some(meals) = plan.day(day) else {
                    continue;
                };

                println!("{} ({})", saborbr_shared::day_key(day)?, day.weekday());
                for (slot, id) in [
                    (MealSlot::Breakfast, &meals.breakfast),
                    (MealSlot::Lunch, &meals.lunch),
                    (MealSlot::Dinner, &meals.dinner),
                ] {
                    if let Some(id) = id {
                        println!("  {slot}: {}", title(id.as_str()));
                    }
                }
                for id in &meals.snacks {
                    println!("  {}: {}", MealSlot::Snack, title(id.as_str()));
                }
            }
        }
    }

    Ok(())
}
