//! Server Module
//!
//! Server initialisation and shared state.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── state.rs        - AppState and FromRef implementations
//! ├── config.rs       - Database pool and migrations
//! └── init.rs         - Server initialization and app creation
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Configuration**: `AppConfig::from_env()` in `main`
//! 2. **Database**: pool opened, migrations applied
//! 3. **State**: token keys and password hasher derived from the config
//! 4. **Router**: routes, identity layer, CORS and tracing layers

/// Application state management
pub mod state;

/// Database pool and migrations
pub mod config;

/// Server initialization
pub mod init;

// Re-export commonly used types
pub use init::{create_app, InitError};
pub use state::AppState;
