//! Postgres persistence layer: pool construction, migrations, models, and
//! repositories.

use std::str::FromStr;

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};

pub mod models;
pub mod repositories;

pub type DbPool = sqlx::PgPool;

/// Server-side cap on any single statement. Must exceed [`LOCK_TIMEOUT`],
/// since time spent blocked on a row lock counts against the statement.
const STATEMENT_TIMEOUT: &str = "15s";

/// Server-side cap on waiting for a row lock. Deck initialization holds
/// the session row lock while it talks to the upstream catalog, so this
/// must exceed the catalog client's request timeout or the second
/// participant errors out during a slow (but healthy) first fetch.
const LOCK_TIMEOUT: &str = "12s";

/// Create a connection pool from a database URL.
///
/// Every connection carries conservative `statement_timeout` and
/// `lock_timeout` settings so a wedged lock holder cannot block its
/// session's other participant for more than seconds.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    let options = PgConnectOptions::from_str(database_url)?.options([
        ("statement_timeout", STATEMENT_TIMEOUT),
        ("lock_timeout", LOCK_TIMEOUT),
    ]);

    PgPoolOptions::new()
        .max_connections(20)
        .connect_with(options)
        .await
}

/// Verify the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply any pending migrations from `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}
