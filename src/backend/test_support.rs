//! Fixtures shared by the backend unit tests.

use sqlx::SqlitePool;

use crate::backend::server::config::load_database;
use crate::backend::server::state::AppState;
use crate::shared::AppConfig;

/// Secret used by every test configuration
pub(crate) const TEST_SECRET: &str = "test-secret";

/// A migrated, private in-memory database
pub(crate) async fn memory_pool() -> SqlitePool {
    load_database("sqlite::memory:")
        .await
        .expect("in-memory database should open")
}

/// Configuration with the cheapest bcrypt cost
pub(crate) fn test_config() -> AppConfig {
    AppConfig::builder()
        .jwt_secret(TEST_SECRET)
        .database_url("sqlite::memory:")
        .bcrypt_cost(crate::shared::MIN_BCRYPT_COST)
        .build()
        .expect("test configuration should be valid")
}

/// Application state over a fresh in-memory database
pub(crate) async fn test_state() -> AppState {
    AppState::new(memory_pool().await, &test_config())
        .await
        .expect("test state should build")
}
