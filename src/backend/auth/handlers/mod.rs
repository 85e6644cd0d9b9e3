//! Authentication Handlers Module
//!
//! HTTP handlers for the authentication endpoints.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs       - Module exports and documentation
//! ├── types.rs     - Request and response types
//! ├── register.rs  - User registration handler
//! ├── login.rs     - User authentication handler
//! └── me.rs        - Current user handlers
//! ```
//!
//! # Handlers
//!
//! - **`register`** - POST /api/auth/register
//! - **`login`** - POST /api/auth/login
//! - **`get_me`** - GET /api/auth/me (protected)
//! - **`update_me`** - PUT /api/auth/me (protected)

/// Request and response types
pub mod types;

/// Register handler
pub mod register;

/// Login handler
pub mod login;

/// Current user handlers
pub mod me;

pub use types::{AuthResponse, LoginRequest, RegisterRequest, UpdateProfileRequest, UserEnvelope, UserResponse};

pub use login::login;
pub use me::{get_me, update_me};
pub use register::register;
