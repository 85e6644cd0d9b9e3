//! Route Configuration Module
//!
//! - **`router`** - Router assembly and layers
//! - **`api_routes`** - Public and protected route tables
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Router assembly, CORS and tracing
//! └── api_routes.rs   - Route tables
//! ```

/// Router assembly
pub mod router;

/// Route tables
pub mod api_routes;

pub use router::create_router;
