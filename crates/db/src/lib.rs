//! Persistence layer: connection pool, schema bootstrap, models, and
//! repositories.
//!
//! Repository methods are single SQL statements generic over
//! [`sqlx::PgExecutor`], so the same call works against the pool directly
//! or inside a transaction. A unit of work is an ordinary
//! `pool.begin()` scope: commit on success, automatic rollback when the
//! transaction guard is dropped on any error path.

use sqlx::postgres::PgPoolOptions;

pub mod error;
pub mod models;
pub mod repositories;
pub mod seed;

pub use error::DbError;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await
}

/// Verify the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply all pending migrations from `db/migrations`.
///
/// Idempotent: the migrations ledger makes a repeat run a no-op, so
/// bootstrapping an already-initialized store neither errors nor touches
/// existing data.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}

/// Drop every waxlab table, including the migrations ledger, so the next
/// [`run_migrations`] recreates the schema from scratch.
///
/// Destructive. Callers are expected to gate this behind explicit user
/// confirmation; see the `waxlab-init` binary.
pub async fn drop_all_tables(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        "DROP TABLE IF EXISTS test_sessions, wax_products, ski_models, _sqlx_migrations CASCADE",
    )
    .execute(pool)
    .await?;
    tracing::info!("Dropped all tables");
    Ok(())
}
