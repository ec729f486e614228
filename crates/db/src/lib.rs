//! Postgres persistence for teams, users, pull requests and reviewer links.
//!
//! - [`repositories`] hold the SQL, one zero-sized repo per table.
//! - [`store::PgReviewStore`] adapts them to the core store contract.
//! - [`service::ReviewService`] runs each domain operation in one transaction.

use sqlx::postgres::PgPoolOptions;

pub mod models;
pub mod repositories;
pub mod service;
pub mod store;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Verify the database answers a trivial query.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply pending migrations from `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}
