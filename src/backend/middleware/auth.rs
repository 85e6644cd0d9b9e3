/**
 * Identity Middleware
 *
 * Guards every protected route. For each request it:
 * 1. Extracts the bearer token from the `Authorization` header
 * 2. Verifies signature and expiry
 * 3. Re-resolves the identity from the store (no caching across requests)
 * 4. Attaches it to the request extensions as [`CurrentUser`]
 *
 * Any failure short-circuits with a generic 401 before the handler runs.
 * Handlers read the identity through the `CurrentUser` extractor.
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::backend::auth::users::{get_identity_by_id, Identity};
use crate::backend::error::{AuthFailure, BackendError};
use crate::backend::server::state::AppState;

/// The authenticated identity for the current request
#[derive(Clone, Debug)]
pub struct CurrentUser(pub Identity);

/// Extract the token from an `Authorization: Bearer <token>` header
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, AuthFailure> {
    headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or(AuthFailure::MissingToken)
}

/// Authentication middleware
///
/// Apply with `axum::middleware::from_fn_with_state` as a route layer on
/// the protected router.
pub async fn require_identity(
    State(app_state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    let token = bearer_token(request.headers())?.to_owned();

    let claims = app_state
        .tokens
        .verify(&token)
        .map_err(AuthFailure::from)?;

    let identity = get_identity_by_id(&app_state.db_pool, claims.sub)
        .await?
        .ok_or(AuthFailure::UnknownIdentity)?;

    tracing::debug!("Authenticated request for user {}", identity.id);
    request.extensions_mut().insert(CurrentUser(identity));

    Ok(next.run(request).await)
}

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CurrentUser>()
            .cloned()
            .ok_or_else(|| AuthFailure::MissingIdentity.into())
    }
}
