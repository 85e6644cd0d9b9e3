/**
 * Login Handler
 *
 * POST /api/auth/login
 *
 * # Authentication Process
 *
 * 1. Look up the user by (normalised) email
 * 2. Verify the password with bcrypt
 * 3. Issue a session token
 * 4. Return the token and the user
 *
 * An unknown email and a wrong password produce the same response. For
 * an unknown email a throwaway hash is still verified so both paths do
 * one bcrypt verification.
 */

use axum::{extract::State, response::Json};

use crate::backend::auth::handlers::types::{AuthResponse, LoginRequest};
use crate::backend::auth::users::get_user_by_email;
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;
use crate::backend::validation::ValidJson;

/// Login handler
///
/// # Errors
///
/// * `400 Bad Request` - missing fields, or invalid credentials
/// * `500 Internal Server Error` - store or signing failure
pub async fn login(
    State(app_state): State<AppState>,
    ValidJson(credentials): ValidJson<LoginRequest>,
) -> Result<Json<AuthResponse>, BackendError> {
    let user = get_user_by_email(&app_state.db_pool, &credentials.email).await?;

    let user = match user {
        Some(user) => user,
        None => {
            app_state.hasher.verify_dummy(credentials.password).await;
            tracing::debug!("Login for unknown email: {}", credentials.email);
            return Err(BackendError::InvalidCredentials);
        }
    };

    let valid = app_state
        .hasher
        .verify(credentials.password, user.password_hash.clone())
        .await;
    if !valid {
        tracing::debug!("Wrong password for user {}", user.id);
        return Err(BackendError::InvalidCredentials);
    }

    let token = app_state
        .tokens
        .issue(user.id)
        .map_err(|e| BackendError::internal(format!("failed to sign token: {}", e)))?;

    tracing::info!("User logged in: {}", user.id);

    Ok(Json(AuthResponse {
        token,
        user: user.into(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::auth::handlers::types::Credentials;
    use crate::backend::auth::password::hash_password;
    use crate::backend::auth::users::create_user;
    use crate::backend::test_support::test_state;
    use assert_matches::assert_matches;

    fn credentials(email: &str, password: &str) -> ValidJson<LoginRequest> {
        ValidJson(Credentials {
            email: email.to_string(),
            password: password.to_string(),
        })
    }

    async fn seeded_state() -> AppState {
        let state = test_state().await;
        let hash = hash_password("password123", state.hasher.cost()).unwrap();
        create_user(&state.db_pool, "John", "john@x.com", &hash).await.unwrap();
        state
    }

    #[tokio::test]
    async fn test_login_success() {
        let state = seeded_state().await;

        let Json(response) = login(State(state.clone()), credentials("john@x.com", "password123"))
            .await
            .unwrap();

        assert_eq!(response.user.name, "John");
        assert_eq!(state.tokens.verify(&response.token).unwrap().sub, response.user.id);
    }

    #[tokio::test]
    async fn test_login_email_is_case_insensitive() {
        let state = seeded_state().await;
        let result = login(State(state), credentials("JOHN@X.COM", "password123")).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_unknown_email_and_wrong_password_are_identical() {
        let state = seeded_state().await;

        let wrong = login(State(state.clone()), credentials("john@x.com", "wrong-pass"))
            .await
            .unwrap_err();
        let unknown = login(State(state), credentials("nobody@x.com", "password123"))
            .await
            .unwrap_err();

        assert_matches!(wrong, BackendError::InvalidCredentials);
        assert_matches!(unknown, BackendError::InvalidCredentials);
        assert_eq!(wrong.status_code(), unknown.status_code());
        assert_eq!(wrong.message(), unknown.message());
    }
}
