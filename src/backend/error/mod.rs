//! Backend Error Module
//!
//! Error types used by HTTP handlers and middleware, and their conversion
//! into HTTP responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - IntoResponse implementation
//! ```
//!
//! # Client Visibility
//!
//! Responses carry only a short generic message. Internal causes (store
//! errors, token sub-causes, hashing failures) are logged with `tracing`
//! when the error is converted and never serialized.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::{AuthFailure, BackendError};
