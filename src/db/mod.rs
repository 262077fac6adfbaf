//! Database layer
//!
//! Pool construction, startup migrations, and the repository structs
//! that own all SQL in the crate.

pub mod connection;
pub mod repositories;

use sqlx::PgPool;

pub use connection::*;

/// Apply any pending migrations from `./migrations`
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
