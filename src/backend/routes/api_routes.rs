/**
 * API Routes
 *
 * # Public
 * - `POST /api/auth/register` - User registration
 * - `POST /api/auth/login` - User login
 * - `GET /health` - Liveness
 *
 * # Protected (identity middleware)
 * - `GET|PUT /api/auth/me` - Current user
 * - `GET|POST /api/data` - List and create records
 * - `GET|PUT|DELETE /api/data/{id}` - One owned record
 */

use axum::{
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};

use crate::backend::auth::{get_me, login, register, update_me};
use crate::backend::health::health;
use crate::backend::middleware::require_identity;
use crate::backend::records::handlers as records;
use crate::backend::server::state::AppState;

/// Routes reachable without a token
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login))
        .route("/health", get(health))
}

/// Routes behind the identity middleware
///
/// The layer is applied with `route_layer`, so it only runs for requests
/// that match one of these routes.
pub fn protected_routes(app_state: AppState) -> Router<AppState> {
    Router::new()
        .route("/api/auth/me", get(get_me).put(update_me))
        .route("/api/data", get(records::list).post(records::create))
        .route(
            "/api/data/{id}",
            get(records::get_one)
                .put(records::update)
                .delete(records::remove),
        )
        .route_layer(from_fn_with_state(app_state, require_identity))
}
