/**
 * Database Configuration
 *
 * Opens the SQLite pool described by `DATABASE_URL` and applies the
 * embedded migrations from `migrations/`.
 *
 * A connection or migration failure aborts startup.
 */

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

/// Pool size for file-backed databases
const MAX_CONNECTIONS: u32 = 5;

/// Whether a connection string names a private in-memory database
fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}

/// Open a SQLite connection pool
///
/// File databases are created if missing. An in-memory database lives
/// only as long as its connection, so it gets exactly one connection
/// that is never recycled.
pub async fn connect_database(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = if is_in_memory(database_url) {
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?
    } else {
        SqlitePoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect_with(options)
            .await?
    };

    tracing::info!("Database connection pool created");
    Ok(pool)
}

/// Apply all pending migrations
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    tracing::info!("Running database migrations...");
    sqlx::migrate!("./migrations").run(pool).await?;
    tracing::info!("Database migrations completed successfully");
    Ok(())
}

/// Open a pool and bring its schema up to date
pub async fn load_database(database_url: &str) -> Result<SqlitePool, crate::backend::server::init::InitError> {
    let pool = connect_database(database_url).await?;
    run_migrations(&pool).await?;
    Ok(pool)
}
