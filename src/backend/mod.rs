//! Backend Module
//!
//! Server-side code: an Axum HTTP API with bearer-token authentication
//! and per-user records stored in SQLite.
//!
//! # Architecture
//!
//! - **`server`** - Initialisation, application state, database pool
//! - **`routes`** - Route tables and router assembly
//! - **`auth`** - Users, password hashing, session tokens, auth handlers
//! - **`middleware`** - The identity layer for protected routes
//! - **`records`** - Ownership-scoped record CRUD
//! - **`validation`** - Request body schemas and the `ValidJson` extractor
//! - **`health`** - Liveness endpoint
//! - **`error`** - Backend error taxonomy and HTTP conversion
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Binary entry point
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── auth/           - Authentication
//! ├── middleware/     - Request middleware
//! ├── records/        - Record handlers and store operations
//! ├── validation.rs   - Body schemas
//! ├── health.rs       - Health check
//! └── error/          - Error types
//! ```
//!
//! # State Management
//!
//! `AppState` holds the SQLite pool, the token service, and the
//! password hasher. It is built once from `AppConfig` and passed to
//! every handler through axum state; there are no process globals.

/// Server initialization and state
pub mod server;

/// HTTP route configuration
pub mod routes;

/// Authentication and user management
pub mod auth;

/// Request middleware
pub mod middleware;

/// Per-user records
pub mod records;

/// Request body validation
pub mod validation;

/// Health check
pub mod health;

/// Backend error types
pub mod error;

#[cfg(test)]
pub(crate) mod test_support;

pub use error::BackendError;
pub use server::{create_app, AppState, InitError};
