//! PostgreSQL access for both applications: pool helpers, migrations,
//! row models and repositories.

use sqlx::postgres::PgPoolOptions;

pub mod failure;
pub mod health;
pub mod models;
pub mod repositories;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(20)
        .connect(database_url)
        .await
}

/// Round-trip a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply the Fyyur schema and genre seed.
pub async fn run_fyyur_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations/fyyur").run(pool).await
}

/// Apply the Trivia schema and category seed.
pub async fn run_trivia_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations/trivia").run(pool).await
}
