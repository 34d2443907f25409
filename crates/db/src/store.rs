use async_trait::async_trait;
use saborbr_shared::{
    DayMeals, GroceryItem, GroceryList, GroceryListRepository, Ingredient, MealPlan,
    MealPlanRepository, Recipe, RecipeRepository, day_key, parse_day_key,
};
use sea_query::{Expr, ExprTrait, OnConflict, Order, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::{SqlitePool, prelude::FromRow, types::Json};
use std::collections::BTreeMap;
use time::{Date, OffsetDateTime};

use crate::table;

/// SQLite-backed store implementing every repository.
///
/// Nested values (ingredients, meals, items) live in JSON text columns.
#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[derive(FromRow)]
struct RecipeRow {
    id: String,
    title: String,
    servings: u16,
    ingredients: Json<Vec<Ingredient>>,
}

impl From<RecipeRow> for Recipe {
    fn from(row: RecipeRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            servings: row.servings,
            ingredients: row.ingredients.0,
        }
    }
}

#[derive(FromRow)]
struct MealPlanRow {
    id: String,
    week_start: String,
    meals: Json<BTreeMap<String, DayMeals>>,
}

impl TryFrom<MealPlanRow> for MealPlan {
    type Error = saborbr_shared::Error;

    fn try_from(row: MealPlanRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.id,
            week_start: parse_day_key(&row.week_start)?,
            meals: row.meals.0,
        })
    }
}

#[derive(FromRow)]
struct GroceryListRow {
    id: String,
    name: String,
    items: Json<Vec<GroceryItem>>,
    created_at: i64,
    completed: bool,
}

impl TryFrom<GroceryListRow> for GroceryList {
    type Error = saborbr_shared::Error;

    fn try_from(row: GroceryListRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.id,
            name: row.name,
            items: row.items.0,
            created_at: OffsetDateTime::from_unix_timestamp_nanos(row.created_at.into())?,
            completed: row.completed,
        })
    }
}

fn recipe_columns() -> [table::Recipe; 4] {
    [
        table::Recipe::Id,
        table::Recipe::Title,
        table::Recipe::Servings,
        table::Recipe::Ingredients,
    ]
}

fn meal_plan_columns() -> [table::MealPlan; 3] {
    [
        table::MealPlan::Id,
        table::MealPlan::WeekStart,
        table::MealPlan::Meals,
    ]
}

fn grocery_list_columns() -> [table::GroceryList; 5] {
    [
        table::GroceryList::Id,
        table::GroceryList::Name,
        table::GroceryList::Items,
        table::GroceryList::CreatedAt,
        table::GroceryList::Completed,
    ]
}

#[async_trait]
impl RecipeRepository for SqliteStore {
    async fn get(&self, id: &str) -> saborbr_shared::Result<Option<Recipe>> {
        let statement = Query::select()
            .columns(recipe_columns())
            .from(table::Recipe::Table)
            .and_where(Expr::col(table::Recipe::Id).eq(id))
            .limit(1)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let row = sqlx::query_as_with::<_, RecipeRow, _>(&sql, values)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(Into::into))
    }

    async fn save(&self, recipe: &Recipe) -> saborbr_shared::Result<()> {
        let ingredients = serde_json::to_string(&recipe.ingredients)?;
        let statement = Query::insert()
            .into_table(table::Recipe::Table)
            .columns(recipe_columns())
            .values_panic([
                recipe.id.to_owned().into(),
                recipe.title.to_owned().into(),
                recipe.servings.into(),
                ingredients.into(),
            ])
            .on_conflict(
                OnConflict::column(table::Recipe::Id)
                    .update_columns([
                        table::Recipe::Title,
                        table::Recipe::Servings,
                        table::Recipe::Ingredients,
                    ])
                    .to_owned(),
            )
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&self.pool).await?;

        Ok(())
    }

    async fn delete(&self, id: &str) -> saborbr_shared::Result<()> {
        let statement = Query::delete()
            .from_table(table::Recipe::Table)
            .and_where(Expr::col(table::Recipe::Id).eq(id))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&self.pool).await?;

        Ok(())
    }

    async fn list(&self) -> saborbr_shared::Result<Vec<Recipe>> {
        let statement = Query::select()
            .columns(recipe_columns())
            .from(table::Recipe::Table)
            .order_by(table::Recipe::Id, Order::Asc)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let rows = sqlx::query_as_with::<_, RecipeRow, _>(&sql, values)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}

#[async_trait]
impl MealPlanRepository for SqliteStore {
    async fn get(&self, id: &str) -> saborbr_shared::Result<Option<MealPlan>> {
        let statement = Query::select()
            .columns(meal_plan_columns())
            .from(table::MealPlan::Table)
            .and_where(Expr::col(table::MealPlan::Id).eq(id))
            .limit(1)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let row = sqlx::query_as_with::<_, MealPlanRow, _>(&sql, values)
            .fetch_optional(&self.pool)
            .await?;

        row.map(TryInto::try_into).transpose()
    }

    async fn find_by_week(&self, week_start: Date) -> saborbr_shared::Result<Option<MealPlan>> {
        let statement = Query::select()
            .columns(meal_plan_columns())
            .from(table::MealPlan::Table)
            .and_where(Expr::col(table::MealPlan::WeekStart).eq(day_key(week_start)?))
            .limit(1)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let row = sqlx::query_as_with::<_, MealPlanRow, _>(&sql, values)
            .fetch_optional(&self.pool)
            .await?;

        row.map(TryInto::try_into).transpose()
    }

    async fn save(&self, plan: &MealPlan) -> saborbr_shared::Result<()> {
        let meals = serde_json::to_string(&plan.meals)?;
        let statement = Query::insert()
            .into_table(table::MealPlan::Table)
            .columns(meal_plan_columns())
            .values_panic([
                plan.id.to_owned().into(),
                day_key(plan.week_start)?.into(),
                meals.into(),
            ])
            .on_conflict(
                OnConflict::column(table::MealPlan::Id)
                    .update_columns([table::MealPlan::WeekStart, table::MealPlan::Meals])
                    .to_owned(),
            )
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&self.pool).await?;

        Ok(())
    }

    async fn delete(&self, id: &str) -> saborbr_shared::Result<()> {
        let statement = Query::delete()
            .from_table(table::MealPlan::Table)
            .and_where(Expr::col(table::MealPlan::Id).eq(id))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&self.pool).await?;

        Ok(())
    }

    async fn list(&self) -> saborbr_shared::Result<Vec<MealPlan>> {
        let statement = Query::select()
            .columns(meal_plan_columns())
            .from(table::MealPlan::Table)
            .order_by(table::MealPlan::WeekStart, Order::Asc)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let rows = sqlx::query_as_with::<_, MealPlanRow, _>(&sql, values)
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(TryInto::try_into).collect()
    }
}

#[async_trait]
impl GroceryListRepository for SqliteStore {
    async fn get(&self, id: &str) -> saborbr_shared::Result<Option<GroceryList>> {
        let statement = Query::select()
            .columns(grocery_list_columns())
            .from(table::GroceryList::Table)
            .and_where(Expr::col(table::GroceryList::Id).eq(id))
            .limit(1)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let row = sqlx::query_as_with::<_, GroceryListRow, _>(&sql, values)
            .fetch_optional(&self.pool)
            .await?;

        row.map(TryInto::try_into).transpose()
    }

    async fn save(&self, list: &GroceryList) -> saborbr_shared::Result<()> {
        let items = serde_json::to_string(&list.items)?;
        let created_at = i64::try_from(list.created_at.unix_timestamp_nanos())
            .map_err(anyhow::Error::from)?;

        let statement = Query::insert()
            .into_table(table::GroceryList::Table)
            .columns(grocery_list_columns())
            .values_panic([
                list.id.to_owned().into(),
                list.name.to_owned().into(),
                items.into(),
                created_at.into(),
                list.completed.into(),
            ])
            .on_conflict(
                OnConflict::column(table::GroceryList::Id)
                    .update_columns([
                        table::GroceryList::Name,
                        table::GroceryList::Items,
                        table::GroceryList::Completed,
                    ])
                    .to_owned(),
            )
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&self.pool).await?;

        Ok(())
    }

    async fn delete(&self, id: &str) -> saborbr_shared::Result<()> {
        let statement = Query::delete()
            .from_table(table::GroceryList::Table)
            .and_where(Expr::col(table::GroceryList::Id).eq(id))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&self.pool).await?;

        Ok(())
    }

    async fn list(&self) -> saborbr_shared::Result<Vec<GroceryList>> {
        let statement = Query::select()
            .columns(grocery_list_columns())
            .from(table::GroceryList::Table)
            .order_by(table::GroceryList::CreatedAt, Order::Desc)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let rows = sqlx::query_as_with::<_, GroceryListRow, _>(&sql, values)
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(TryInto::try_into).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::sqlite::SqlitePoolOptions;
    use sqlx_migrator::{Migrate, Plan};
    use time::macros::date;

    async fn store() -> SqliteStore {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();

        let mut conn = pool.acquire().await.unwrap();
        crate::migrator()
            .unwrap()
            .run(&mut *conn, &Plan::apply_all())
            .await
            .unwrap();
        drop(conn);

        SqliteStore::new(pool)
    }

    #[tokio::test]
    async fn recipe_upsert_and_list() {
        let store = store().await;
        let mut recipe = Recipe::new("recipe-1", "Brigadeiro")
            .ingredient(Ingredient::new("Leite condensado", 1.0, "lata"))
            .ingredient(
                Ingredient::new("Chocolate em pó", 2.0, "colheres").with_category("Mercearia"),
            );

        RecipeRepository::save(&store, &recipe).await.unwrap();
        recipe.servings = 20;
        RecipeRepository::save(&store, &recipe).await.unwrap();

        let recipes = RecipeRepository::list(&store).await.unwrap();
        assert_eq!(recipes, vec![recipe]);

        RecipeRepository::delete(&store, "recipe-1").await.unwrap();
        assert!(RecipeRepository::get(&store, "recipe-1")
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn meal_plan_found_by_week() {
        let store = store().await;
        let mut plan = MealPlan::new(date!(2025 - 10 - 15));
        plan.meals.insert(
            "2025-10-13".to_owned(),
            DayMeals {
                lunch: Some("recipe-2".to_owned()),
                snacks: vec!["recipe-1".to_owned()],
                ..Default::default()
            },
        );
        MealPlanRepository::save(&store, &plan).await.unwrap();

        let found = store.find_by_week(date!(2025 - 10 - 12)).await.unwrap();
        assert_eq!(found, Some(plan.clone()));
        assert!(store
            .find_by_week(date!(2025 - 10 - 19))
            .await
            .unwrap()
            .is_none());

        assert_eq!(
            MealPlanRepository::get(&store, &plan.id).await.unwrap(),
            Some(plan)
        );
    }

    #[tokio::test]
    async fn grocery_lists_newest_first() {
        let store = store().await;
        let mut older = GroceryList::new("Lista 01/10/2025", vec![]);
        older.created_at = OffsetDateTime::now_utc() - time::Duration::days(3);
        let newer = GroceryList::new(
            "Lista 04/10/2025",
            vec![GroceryItem::new("Arroz", 1.0, "kg", None)],
        );

        GroceryListRepository::save(&store, &older).await.unwrap();
        GroceryListRepository::save(&store, &newer).await.unwrap();

        let lists = GroceryListRepository::list(&store).await.unwrap();
        assert_eq!(lists.len(), 2);
        assert_eq!(lists[0].id, newer.id);
        assert_eq!(lists[0].items, newer.items);
        assert_eq!(lists[1].id, older.id);
    }

    #[tokio::test]
    async fn grocery_list_save_overwrites() {
        let store = store().await;
        let mut list = GroceryList::new(
            "Lista",
            vec![GroceryItem::new("Ovos", 12.0, "unidades", None)],
        );
        GroceryListRepository::save(&store, &list).await.unwrap();

        list.items[0].checked = true;
        list.completed = true;
        GroceryListRepository::save(&store, &list).await.unwrap();

        let saved = GroceryListRepository::get(&store, &list.id)
            .await
            .unwrap()
            .unwrap();
        assert!(saved.completed);
        assert!(saved.items[0].checked);
        assert_eq!(
            saved.created_at.unix_timestamp_nanos(),
            list.created_at.unix_timestamp_nanos()
        );
    }
}
