//! Records Module
//!
//! Per-user records behind the identity middleware.
//!
//! - **`types`** - request schema and response shapes
//! - **`db`** - owner-scoped store operations
//! - **`handlers`** - `/api/data` handlers

pub mod db;
pub mod handlers;
pub mod types;

pub use db::Record;
pub use types::{MessageResponse, RecordRequest, RecordResponse};
