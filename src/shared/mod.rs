//! Shared Module
//!
//! Types that do not depend on the HTTP server: request-input errors and
//! process configuration. Both are used by the backend and by tests that
//! build an application without touching the environment.

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use error::SharedError;
pub use config::{AppConfig, AppConfigBuilder, ConfigError, MIN_BCRYPT_COST};
