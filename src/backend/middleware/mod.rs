//! Middleware Module
//!
//! Request processing that runs before handlers.
//!
//! - **`auth`** - the identity layer for protected routes and the
//!   `CurrentUser` extractor handlers use to read its result

pub mod auth;

pub use auth::{bearer_token, require_identity, CurrentUser};
