//! PostgreSQL persistence for the resource manager.
//!
//! Models live in [`models`], one zero-sized repository per table in
//! [`repositories`], and the two multi-statement business-day operations in
//! [`scheduling`].

pub mod connect;
pub mod models;
pub mod patch;
pub mod repositories;
pub mod scheduling;

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};

pub use connect::{ConnectInfoError, DbConnectInfo};

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from explicit connect options.
pub async fn create_pool(
    options: PgConnectOptions,
    max_connections: u32,
) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
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
