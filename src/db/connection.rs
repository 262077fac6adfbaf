//! Database connection management

use std::time::Duration;

use sqlx::{postgres::PgPoolOptions, PgPool};

use crate::config::DatabaseConfig;

/// How long to wait for Postgres before giving up at startup
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Create the application's connection pool
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(CONNECT_TIMEOUT)
        .connect(&config.url)
        .await
}

/// Round-trip a trivial query to confirm the pool is usable
pub async fn test_connection(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
