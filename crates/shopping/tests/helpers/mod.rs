#![allow(dead_code)]

use saborbr_db::SqliteStore;
use saborbr_shared::{DayMeals, Ingredient, MealPlan, MealPlanRepository, Recipe, RecipeRepository};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx_migrator::{Migrate, Plan};
use time::Date;

pub async fn setup_sqlite_store() -> anyhow::Result<SqliteStore> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await?;

    let mut conn = pool.acquire().await?;
    saborbr_db::migrator()?
        .run(&mut conn, &Plan::apply_all())
        .await?;
    drop(conn);

    Ok(SqliteStore::new(pool))
}

/// Recipe A: 200 g flour, 1 egg. Recipe B: 300 g flour, 1 onion.
pub async fn seed_recipes<S: RecipeRepository>(store: &S) -> anyhow::Result<()> {
    let a = Recipe::new("recipe-a", "Panqueca")
        .ingredient(Ingredient::new("flour", 200.0, "g"))
        .ingredient(Ingredient::new("egg", 1.0, "un"));
    let b = Recipe::new("recipe-b", "Torta de cebola")
        .ingredient(Ingredient::new("flour", 300.0, "g"))
        .ingredient(Ingredient::new("onion", 1.0, "un").with_category("Hortifruti"));

    RecipeRepository::save(store, &a).await?;
    RecipeRepository::save(store, &b).await?;

    Ok(())
}

pub async fn seed_plan<S: MealPlanRepository>(
    store: &S,
    week: Date,
    days: Vec<(&str, DayMeals)>,
) -> anyhow::Result<MealPlan> {
    let mut plan = MealPlan::new(week);
    for (day, meals) in days {
        plan.meals.insert(day.to_owned(), meals);
    }

    MealPlanRepository::save(store, &plan).await?;

    Ok(plan)
}

pub fn meals(breakfast: Option<&str>, lunch: Option<&str>, snacks: &[&str]) -> DayMeals {
    DayMeals {
        breakfast: breakfast.map(ToOwned::to_owned),
        lunch: lunch.map(ToOwned::to_owned),
        dinner: None,
        snacks: snacks.iter().map(|s| s.to_string()).collect(),
    }
}
