use common::error::Res;
use sqlx::{
    SqlitePool,
    sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions},
};
use std::{str::FromStr, time::Duration};

pub mod cart;
pub mod order;
pub mod product;
pub mod seed;
pub mod session;
pub mod user;

pub mod models {
    pub mod cart;
    pub mod order;
    pub mod product;
    pub mod session;
    pub mod user;
}

pub mod dtos {
    pub mod order;
    pub mod product;
    pub mod session;
    pub mod user;
}

/// Opens (creating if missing) the database at `database_url` and applies
/// pending migrations.
pub async fn setup(database_url: &str) -> Res<SqlitePool> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_secs(5));

    let pool = SqlitePoolOptions::new().connect_with(options).await?;

    sqlx::migrate!("./migrations").run(&pool).await?;

    log::info!("Database ready at {}", database_url);
    Ok(pool)
}

/// Private in-memory database with migrations applied.
///
/// Every connection to `sqlite::memory:` sees its own database, so the pool
/// holds exactly one connection and never recycles it.
pub async fn setup_in_memory() -> Res<SqlitePool> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;

    Ok(pool)
}
