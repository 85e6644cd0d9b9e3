/**
 * Error Conversion
 *
 * `BackendError` implements `IntoResponse`, so handlers can return it
 * directly. This is also the single place where failures are logged:
 * the client only ever receives the generic message.
 *
 * # Response Format
 *
 * ```json
 * { "error": "Error message" }
 * ```
 */

use axum::{
    response::{IntoResponse, Response},
    Json,
};

use crate::backend::error::types::BackendError;

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match &self {
            err if err.is_server_error() => tracing::error!("Request failed: {}", err),
            BackendError::Unauthenticated(cause) => {
                tracing::warn!("Rejected unauthenticated request: {}", cause)
            }
            err => tracing::debug!("Request rejected: {}", err),
        }

        let body = serde_json::json!({ "error": self.message() });
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::error::types::AuthFailure;
    use axum::http::StatusCode;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_error_body_shape() {
        let response = BackendError::conflict("User already exists").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "error": "User already exists" })
        );
    }

    #[tokio::test]
    async fn test_unauthenticated_body_is_generic() {
        let response = BackendError::from(AuthFailure::UnknownIdentity).into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "error": "Not authorized" })
        );
    }

    #[tokio::test]
    async fn test_database_error_body_is_generic() {
        let response = BackendError::Database(sqlx::Error::PoolTimedOut).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "error": "Server error" })
        );
    }
}
