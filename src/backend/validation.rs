//! Request body schemas.
//!
//! Every JSON endpoint declares a raw body type (all fields optional, so
//! a missing field is our `400` and not a deserializer rejection) and a
//! [`Validate`] impl that turns it into a typed value. Handlers take
//! [`ValidJson<Raw>`] and receive only the typed value; business logic
//! never sees unchecked input.

use axum::{
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;

use crate::backend::error::BackendError;
use crate::shared::SharedError;

/// Conversion from a raw request body into a checked value
pub trait Validate {
    /// The checked value handlers work with
    type Valid;

    /// Check the raw body
    fn validate(self) -> Result<Self::Valid, SharedError>;
}

/// JSON body extractor that runs [`Validate`] before the handler
///
/// Malformed JSON and failed checks are both `400 Bad Request`.
pub struct ValidJson<T: Validate>(pub T::Valid);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = BackendError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(raw) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| SharedError::serialization(rejection.body_text()))?;

        Ok(Self(raw.validate()?))
    }
}

/// A field that must be present and not blank, trimmed
pub fn required_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// A field that must be present and not blank, kept verbatim
pub fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// A field that must be present and non-empty, kept verbatim
pub fn required_secret(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::StatusCode, response::IntoResponse, routing::post, Router};
    use serde::Deserialize;
    use tower::ServiceExt;

    #[derive(Deserialize)]
    struct NameBody {
        #[serde(default)]
        name: Option<String>,
    }

    impl Validate for NameBody {
        type Valid = String;

        fn validate(self) -> Result<String, SharedError> {
            required_text(self.name).ok_or_else(|| SharedError::validation("name", "Name required"))
        }
    }

    async fn echo(ValidJson(name): ValidJson<NameBody>) -> impl IntoResponse {
        name
    }

    async fn post_body(body: &'static str, content_type: &str) -> StatusCode {
        let router = Router::new().route("/", post(echo));
        let request = axum::http::Request::builder()
            .method("POST")
            .uri("/")
            .header("content-type", content_type)
            .body(Body::from(body))
            .unwrap();
        router.oneshot(request).await.unwrap().status()
    }

    #[test]
    fn test_required_text() {
        assert_eq!(required_text(Some("  hi ".into())), Some("hi".to_string()));
        assert_eq!(required_text(Some("   ".into())), None);
        assert_eq!(required_text(None), None);
    }

    #[test]
    fn test_non_blank_keeps_padding() {
        assert_eq!(non_blank(Some(" hi\n".into())), Some(" hi\n".to_string()));
        assert_eq!(non_blank(Some(" \t ".into())), None);
        assert_eq!(non_blank(None), None);
    }

    #[test]
    fn test_required_secret_keeps_whitespace() {
        assert_eq!(required_secret(Some(" pw ".into())), Some(" pw ".to_string()));
        assert_eq!(required_secret(Some(String::new())), None);
    }

    #[tokio::test]
    async fn test_valid_body_accepted() {
        assert_eq!(post_body(r#"{"name":"x"}"#, "application/json").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_missing_field_is_bad_request() {
        assert_eq!(post_body("{}", "application/json").await, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_malformed_json_is_bad_request() {
        assert_eq!(post_body("{not json", "application/json").await, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_missing_content_type_is_bad_request() {
        assert_eq!(post_body(r#"{"name":"x"}"#, "text/plain").await, StatusCode::BAD_REQUEST);
    }
}
