/**
 * Application State Management
 *
 * `AppState` is built once from `AppConfig` and cloned into every
 * request. It replaces any process-wide globals: the database pool, the
 * token keys, and the password hasher all travel through axum state.
 *
 * # State Extraction
 *
 * `FromRef` implementations let handlers extract only the piece they
 * need, e.g. `State(pool): State<SqlitePool>`.
 */

use axum::extract::FromRef;
use chrono::Duration;
use sqlx::SqlitePool;

use crate::backend::auth::password::PasswordHasher;
use crate::backend::auth::sessions::TokenService;
use crate::backend::error::BackendError;
use crate::shared::AppConfig;

/// Shared application state
///
/// Every field is cheap to clone: the pool and the token keys are
/// reference-counted internally.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Credential and record store
    pub db_pool: SqlitePool,

    /// Session token issuer and verifier
    pub tokens: TokenService,

    /// bcrypt hasher at the configured cost
    pub hasher: PasswordHasher,
}

impl AppState {
    /// Build state from an open pool and the process configuration
    pub async fn new(db_pool: SqlitePool, config: &AppConfig) -> Result<Self, BackendError> {
        Ok(Self {
            db_pool,
            tokens: TokenService::new(
                config.jwt_secret.as_bytes(),
                Duration::hours(config.token_ttl_hours),
            ),
            hasher: PasswordHasher::new(config.bcrypt_cost).await?,
        })
    }
}

impl FromRef<AppState> for SqlitePool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db_pool.clone()
    }
}

impl FromRef<AppState> for TokenService {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.tokens.clone()
    }
}

impl FromRef<AppState> for PasswordHasher {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.hasher.clone()
    }
}
