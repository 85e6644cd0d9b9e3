/**
 * Register Handler
 *
 * POST /api/auth/register
 *
 * # Registration Process
 *
 * 1. Validate the body (name, email, password)
 * 2. Hash the password with bcrypt
 * 3. Insert the user; the store rejects a taken email
 * 4. Issue a session token
 * 5. Return `201` with the token and the user
 */

use axum::{extract::State, http::StatusCode, response::Json};

use crate::backend::auth::handlers::types::{AuthResponse, RegisterRequest};
use crate::backend::auth::users::{create_user, is_unique_violation};
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;
use crate::backend::validation::ValidJson;

/// Message returned when the email is already registered
pub const USER_EXISTS: &str = "User already exists";

/// Register handler
///
/// # Errors
///
/// * `400 Bad Request` - missing fields, bad email, short password, or a
///   taken email
/// * `500 Internal Server Error` - hashing, store, or signing failure
///
/// # Example Request
///
/// ```http
/// POST /api/auth/register HTTP/1.1
/// Content-Type: application/json
///
/// {"name": "John", "email": "john@x.com", "password": "password123"}
/// ```
pub async fn register(
    State(app_state): State<AppState>,
    ValidJson(registration): ValidJson<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), BackendError> {
    tracing::info!("Registration request for: {}", registration.email);

    let password_hash = app_state.hasher.hash(registration.password).await?;

    let user = create_user(
        &app_state.db_pool,
        &registration.name,
        &registration.email,
        &password_hash,
    )
    .await
    .map_err(|e| {
        if is_unique_violation(&e) {
            tracing::debug!("Email already registered: {}", registration.email);
            BackendError::conflict(USER_EXISTS)
        } else {
            BackendError::from(e)
        }
    })?;

    let token = app_state
        .tokens
        .issue(user.id)
        .map_err(|e| BackendError::internal(format!("failed to sign token: {}", e)))?;

    tracing::info!("User registered: {} ({})", user.id, user.email);

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            token,
            user: user.into(),
        }),
    ))
}
