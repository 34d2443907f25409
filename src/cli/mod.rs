pub mod groceries;
pub mod plan;
pub mod recipe;

use saborbr_db::SqliteStore;
use time::{Date, OffsetDateTime};

pub fn parse_date(value: &str) -> Result<Date, String> {
    saborbr_shared::parse_day_key(value).map_err(|e| e.to_string())
}

pub fn today() -> Date {
    OffsetDateTime::now_utc().date()
}

/// Store over a migrated database.
pub async fn open_store(config: &saborbr::Config) -> anyhow::Result<SqliteStore> {
    let pool =
        saborbr::create_pool(&config.database.url, config.database.max_connections).await?;
    saborbr::migrate(&pool).await?;

    Ok(SqliteStore::new(pool))
}
