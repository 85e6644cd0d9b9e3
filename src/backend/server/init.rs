/**
 * Server Initialization
 *
 * Turns an `AppConfig` into a ready-to-serve router:
 * 1. Open the SQLite pool and run migrations
 * 2. Build `AppState` (token keys, password hasher)
 * 3. Assemble routes and layers
 *
 * Any failure aborts startup with an `InitError`.
 */

use axum::Router;
use thiserror::Error;

use crate::backend::error::BackendError;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::load_database;
use crate::backend::server::state::AppState;
use crate::shared::{AppConfig, ConfigError};

/// Startup failures
#[derive(Debug, Error)]
pub enum InitError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("password hasher setup failed: {0}")]
    Hasher(#[from] BackendError),
}

/// Create and configure the Axum application
pub async fn create_app(config: &AppConfig) -> Result<Router<()>, InitError> {
    tracing::info!("Initializing recordbook server");

    let db_pool = load_database(&config.database_url).await?;
    let app_state = AppState::new(db_pool, config).await?;

    let app = create_router(app_state, config)?;
    tracing::info!("Router configured");

    Ok(app)
}
