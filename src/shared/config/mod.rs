//! Application configuration module
//!
//! `AppConfig` is built once at process start and handed to the server
//! initialisation code, which derives the shared `AppState` from it.
//! Nothing reads the environment after that point.
//!
//! # Environment
//!
//! | Variable        | Default                   |
//! |-----------------|---------------------------|
//! | `JWT_SECRET`    | required                  |
//! | `DATABASE_URL`  | `sqlite://recordbook.db`  |
//! | `CLIENT_URL`    | `http://localhost:3000`   |
//! | `PORT`          | `5000`                    |
//! | `BCRYPT_COST`   | `12`                      |
//! | `JWT_TTL_HOURS` | `24`                      |

use thiserror::Error;

/// Default SQLite database location
pub const DEFAULT_DATABASE_URL: &str = "sqlite://recordbook.db";
/// Default allowed cross-origin caller
pub const DEFAULT_CLIENT_URL: &str = "http://localhost:3000";
/// Default listening port
pub const DEFAULT_PORT: u16 = 5000;
/// Default bcrypt work factor
pub const DEFAULT_BCRYPT_COST: u32 = 12;
/// Lowest bcrypt work factor bcrypt accepts
pub const MIN_BCRYPT_COST: u32 = 4;
/// Highest bcrypt work factor bcrypt accepts
pub const MAX_BCRYPT_COST: u32 = 31;
/// Default session token lifetime in hours
pub const DEFAULT_TOKEN_TTL_HOURS: i64 = 24;

/// Application configuration
#[derive(Clone)]
pub struct AppConfig {
    /// HMAC secret used to sign session tokens
    pub jwt_secret: String,
    /// sqlx SQLite connection string
    pub database_url: String,
    /// Origin allowed by the CORS layer
    pub client_url: String,
    /// TCP port the server listens on
    pub port: u16,
    /// bcrypt cost for new password hashes
    pub bcrypt_cost: u32,
    /// Lifetime of issued tokens, in hours
    pub token_ttl_hours: i64,
}

// The secret stays out of logs and panic messages.
impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("jwt_secret", &"<redacted>")
            .field("database_url", &self.database_url)
            .field("client_url", &self.client_url)
            .field("port", &self.port)
            .field("bcrypt_cost", &self.bcrypt_cost)
            .field("token_ttl_hours", &self.token_ttl_hours)
            .finish()
    }
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    ///
    /// Unset variables fall back to their defaults; set but unparsable
    /// values are rejected rather than silently replaced.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = Self::builder();

        if let Some(secret) = lookup("JWT_SECRET") {
            builder = builder.jwt_secret(secret);
        }
        if let Some(url) = lookup("DATABASE_URL") {
            builder = builder.database_url(url);
        }
        if let Some(url) = lookup("CLIENT_URL") {
            builder = builder.client_url(url);
        }
        if let Some(port) = lookup("PORT") {
            builder = builder.port(parse_var("PORT", &port)?);
        }
        if let Some(cost) = lookup("BCRYPT_COST") {
            builder = builder.bcrypt_cost(parse_var("BCRYPT_COST", &cost)?);
        }
        if let Some(hours) = lookup("JWT_TTL_HOURS") {
            builder = builder.token_ttl_hours(parse_var("JWT_TTL_HOURS", &hours)?);
        }

        builder.build()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.jwt_secret.trim().is_empty() {
            return Err(ConfigError::MissingValue("JWT_SECRET"));
        }
        if self.database_url.trim().is_empty() {
            return Err(ConfigError::MissingValue("DATABASE_URL"));
        }
        if !(self.client_url.starts_with("http://") || self.client_url.starts_with("https://")) {
            return Err(ConfigError::InvalidUrl(self.client_url.clone()));
        }
        if !(MIN_BCRYPT_COST..=MAX_BCRYPT_COST).contains(&self.bcrypt_cost) {
            return Err(ConfigError::InvalidValue {
                key: "BCRYPT_COST",
                message: format!(
                    "must be between {} and {}",
                    MIN_BCRYPT_COST, MAX_BCRYPT_COST
                ),
            });
        }
        if self.token_ttl_hours <= 0 {
            return Err(ConfigError::InvalidValue {
                key: "JWT_TTL_HOURS",
                message: "must be positive".to_string(),
            });
        }
        Ok(())
    }
}

fn parse_var<T: std::str::FromStr>(key: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key,
        message: format!("could not parse {:?}", raw),
    })
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    jwt_secret: Option<String>,
    database_url: Option<String>,
    client_url: Option<String>,
    port: Option<u16>,
    bcrypt_cost: Option<u32>,
    token_ttl_hours: Option<i64>,
}

impl AppConfigBuilder {
    /// Set the token signing secret
    pub fn jwt_secret(mut self, secret: impl Into<String>) -> Self {
        self.jwt_secret = Some(secret.into());
        self
    }

    /// Set the database connection string
    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = Some(url.into());
        self
    }

    /// Set the allowed cross-origin caller
    pub fn client_url(mut self, url: impl Into<String>) -> Self {
        self.client_url = Some(url.into());
        self
    }

    /// Set the listening port
    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Set the bcrypt cost
    pub fn bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = Some(cost);
        self
    }

    /// Set the token lifetime in hours
    pub fn token_ttl_hours(mut self, hours: i64) -> Self {
        self.token_ttl_hours = Some(hours);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let config = AppConfig {
            jwt_secret: self.jwt_secret.ok_or(ConfigError::MissingValue("JWT_SECRET"))?,
            database_url: self
                .database_url
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            client_url: self
                .client_url
                .unwrap_or_else(|| DEFAULT_CLIENT_URL.to_string()),
            port: self.port.unwrap_or(DEFAULT_PORT),
            bcrypt_cost: self.bcrypt_cost.unwrap_or(DEFAULT_BCRYPT_COST),
            token_ttl_hours: self.token_ttl_hours.unwrap_or(DEFAULT_TOKEN_TTL_HOURS),
        };
        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("invalid value for {key}: {message}")]
    InvalidValue {
        key: &'static str,
        message: String,
    },
}
