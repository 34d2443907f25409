use sea_query::{
    ColumnDef, Index, IndexCreateStatement, IndexDropStatement, Table, TableCreateStatement,
    TableDropStatement,
};

use crate::table::MealPlan;

pub struct CreateTable;

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(MealPlan::Table)
        .col(
            ColumnDef::new(MealPlan::Id)
                .string()
                .not_null()
                .string_len(36)
                .primary_key(),
        )
        .col(
            ColumnDef::new(MealPlan::WeekStart)
                .string()
                .not_null()
                .string_len(10),
        )
        .col(ColumnDef::new(MealPlan::Meals).text().not_null())
        .to_owned()
}

fn drop_table() -> TableDropStatement {
    Table::drop().table(MealPlan::Table).to_owned()
}

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for CreateTable {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = create_table().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = drop_table().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }
}

pub struct CreateWeekStartIdx;

fn create_week_start_idx() -> IndexCreateStatement {
    Index::create()
        .name("idx_meal_plan_week_start")
        .table(MealPlan::Table)
        .unique()
        .col(MealPlan::WeekStart)
        .to_owned()
}

fn drop_week_start_idx() -> IndexDropStatement {
    Index::drop()
        .name("idx_meal_plan_week_start")
        .table(MealPlan::Table)
        .to_owned()
}

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for CreateWeekStartIdx {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = create_week_start_idx().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = drop_week_start_idx().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }
}
