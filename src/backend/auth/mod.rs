//! Authentication Module
//!
//! User registration, login, and session tokens.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── users.rs        - User model and store operations
//! ├── password.rs     - bcrypt hashing
//! ├── sessions.rs     - Session token issue and verification
//! └── handlers/       - HTTP handlers
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: name, email, password → user created → token returned
//! 2. **Login**: email, password → credentials verified → token returned
//! 3. **Me**: token → identity middleware resolves the user → user returned
//!
//! Tokens are HS256 JWTs whose only identity claim is the user ID. The
//! lifetime comes from `AppConfig::token_ttl_hours`.

/// User data model and store operations
pub mod users;

/// Password hashing
pub mod password;

/// Session token issue and verification
pub mod sessions;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use handlers::{get_me, login, register, update_me};
pub use handlers::types::{AuthResponse, UserResponse};
