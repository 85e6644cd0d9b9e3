//! recordbook
//!
//! A small authenticated API: users register and log in with an email
//! and password, receive a signed bearer token, and manage their own
//! records. Every record operation is scoped to the token's identity.
//!
//! # Module Structure
//!
//! - **`shared`** - Configuration and request-level error types
//! - **`backend`** - Axum server, auth, records, SQLite persistence
//!
//! # Usage
//!
//! ```rust,no_run
//! use recordbook::backend::create_app;
//! use recordbook::shared::AppConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::from_env()?;
//! let app = create_app(&config).await?;
//! let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration
//!
//! Read from the environment (a `.env` file is honoured by the binary):
//! `JWT_SECRET` (required), `DATABASE_URL`, `CLIENT_URL`, `PORT`,
//! `BCRYPT_COST`, `JWT_TTL_HOURS`.

/// Configuration and shared error types
pub mod shared;

/// Backend server-side code
pub mod backend;
