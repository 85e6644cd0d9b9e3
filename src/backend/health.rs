//! Liveness endpoint.

use axum::response::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Health check body
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

/// GET /health
///
/// Public, and does not touch the store.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK".to_string(),
        timestamp: Utc::now(),
    })
}
