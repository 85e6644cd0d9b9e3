/**
 * Router Configuration
 *
 * Combines the public and protected routes and wraps them in the
 * cross-cutting layers:
 * 1. CORS, allowing only the configured client origin
 * 2. HTTP request tracing
 */

use axum::{
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        HeaderValue, Method,
    },
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::backend::routes::api_routes::{protected_routes, public_routes};
use crate::backend::server::state::AppState;
use crate::shared::{AppConfig, ConfigError};

/// CORS policy for the configured client origin
pub fn cors_layer(client_url: &str) -> Result<CorsLayer, ConfigError> {
    let origin = HeaderValue::from_str(client_url)
        .map_err(|_| ConfigError::InvalidUrl(client_url.to_string()))?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE]))
}

/// Create the Axum router with all routes configured
///
/// Unknown paths fall through to axum's default 404.
pub fn create_router(app_state: AppState, config: &AppConfig) -> Result<Router<()>, ConfigError> {
    let router = Router::new()
        .merge(public_routes())
        .merge(protected_routes(app_state.clone()))
        .layer(cors_layer(&config.client_url)?)
        .layer(TraceLayer::new_for_http());

    Ok(router.with_state(app_state))
}
