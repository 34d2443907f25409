use sqlx_migrator::{Info, Migrator};

mod m0_1;
mod store;
pub mod table;

pub use store::SqliteStore;

pub fn migrator() -> Result<Migrator<sqlx::Sqlite>, sqlx_migrator::Error> {
    let mut migrator = Migrator::default();
    migrator.add_migrations(vec![Box::new(m0_1::Migration)])?;

    Ok(migrator)
}

#[cfg(test)]
mod tests {
    use sqlx::sqlite::SqlitePoolOptions;
    use sqlx_migrator::{Info, Migrate, Plan};

    #[test]
    fn migrator_registers_initial_migration() {
        let migrator = super::migrator().unwrap();
        assert_eq!(migrator.migrations().len(), 1);
    }

    #[tokio::test]
    async fn migrations_create_tables() {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();

        let mut conn = pool.acquire().await.unwrap();
        super::migrator()
            .unwrap()
            .run(&mut *conn, &Plan::apply_all())
            .await
            .unwrap();

        let count: (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' \
             AND name IN ('recipe', 'meal_plan', 'grocery_list')",
        )
        .fetch_one(&mut *conn)
        .await
        .unwrap();
        assert_eq!(count.0, 3);
    }
}
