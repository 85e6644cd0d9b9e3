/**
 * Current User Handlers
 *
 * GET /api/auth/me and PUT /api/auth/me. Both sit behind the identity
 * middleware, so the caller is already resolved when they run.
 */

use axum::{extract::State, response::Json};

use crate::backend::auth::handlers::types::{UpdateProfileRequest, UserEnvelope};
use crate::backend::auth::users::update_profile;
use crate::backend::error::{AuthFailure, BackendError};
use crate::backend::middleware::CurrentUser;
use crate::backend::server::state::AppState;
use crate::backend::validation::ValidJson;

/// Get current user handler
///
/// Returns the identity the middleware attached, without touching the
/// store again.
///
/// # Example Response
///
/// ```json
/// {"user": {"id": "...", "name": "John", "email": "john@x.com", "role": "user", ...}}
/// ```
pub async fn get_me(CurrentUser(identity): CurrentUser) -> Json<UserEnvelope> {
    Json(UserEnvelope {
        user: identity.into(),
    })
}

/// Update current user handler
///
/// Changes the caller's own name and/or password. Email and role are not
/// editable here.
pub async fn update_me(
    State(app_state): State<AppState>,
    CurrentUser(identity): CurrentUser,
    ValidJson(update): ValidJson<UpdateProfileRequest>,
) -> Result<Json<UserEnvelope>, BackendError> {
    let password_hash = match update.password {
        Some(password) => Some(app_state.hasher.hash(password).await?),
        None => None,
    };

    let updated = update_profile(
        &app_state.db_pool,
        identity.id,
        update.name.as_deref(),
        password_hash.as_deref(),
    )
    .await?
    .ok_or(AuthFailure::UnknownIdentity)?;

    tracing::info!("Profile updated for user {}", updated.id);

    Ok(Json(UserEnvelope {
        user: updated.into(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::auth::handlers::types::ProfileUpdate;
    use crate::backend::auth::password::verify_password;
    use crate::backend::auth::users::{create_user, get_user_by_email, Identity};
    use crate::backend::test_support::test_state;

    #[tokio::test]
    async fn test_get_me_returns_attached_identity() {
        let state = test_state().await;
        let user = create_user(&state.db_pool, "Ann", "ann@x.com", "hash").await.unwrap();
        let identity = Identity::from(user);

        let Json(envelope) = get_me(CurrentUser(identity.clone())).await;

        assert_eq!(envelope.user.id, identity.id);
        assert_eq!(envelope.user.email, "ann@x.com");
    }

    #[tokio::test]
    async fn test_update_me_rehashes_password() {
        let state = test_state().await;
        let user = create_user(&state.db_pool, "Ann", "ann@x.com", "hash").await.unwrap();

        let Json(envelope) = update_me(
            State(state.clone()),
            CurrentUser(user.into()),
            ValidJson(ProfileUpdate {
                name: Some("Annie".into()),
                password: Some("new-password".into()),
            }),
        )
        .await
        .unwrap();

        assert_eq!(envelope.user.name, "Annie");

        let stored = get_user_by_email(&state.db_pool, "ann@x.com").await.unwrap().unwrap();
        assert!(verify_password("new-password", &stored.password_hash));
    }

    #[tokio::test]
    async fn test_update_me_vanished_user_is_unauthorized() {
        let state = test_state().await;
        let user = create_user(&state.db_pool, "Ann", "ann@x.com", "hash").await.unwrap();
        sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(user.id)
            .execute(&state.db_pool)
            .await
            .unwrap();

        let err = update_me(
            State(state),
            CurrentUser(user.into()),
            ValidJson(ProfileUpdate { name: Some("x".into()), password: None }),
        )
        .await
        .unwrap_err();

        assert_eq!(err.status_code(), axum::http::StatusCode::UNAUTHORIZED);
    }
}
