//! Common test utilities and helpers
//!
//! Builds the full application over a private in-memory database and
//! wraps it in an `axum_test::TestServer`.

#![allow(dead_code)]

use axum::http::{header::AUTHORIZATION, HeaderValue, StatusCode};
use axum_test::{TestRequest, TestServer};
use serde_json::{json, Value};

use recordbook::backend::create_app;
use recordbook::shared::{AppConfig, MIN_BCRYPT_COST};

/// Secret for every test server
pub const TEST_SECRET: &str = "integration-test-secret";

/// Configuration with an in-memory store and the cheapest bcrypt cost
pub fn test_config() -> AppConfig {
    config_for("sqlite::memory:")
}

/// Test configuration over the given database URL
pub fn config_for(database_url: &str) -> AppConfig {
    AppConfig::builder()
        .jwt_secret(TEST_SECRET)
        .database_url(database_url)
        .bcrypt_cost(MIN_BCRYPT_COST)
        .build()
        .expect("test configuration should be valid")
}

/// A running application and a handle to issue requests against it
pub struct TestApp {
    pub server: TestServer,
}

/// A registered user as seen by the client
pub struct Registered {
    pub id: String,
    pub token: String,
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_config(test_config()).await
    }

    pub async fn with_config(config: AppConfig) -> Self {
        let app = create_app(&config).await.expect("app should build");
        let server = TestServer::new(app).expect("test server should start");
        Self { server }
    }

    /// Register through the API and return the new user's id and token
    pub async fn register(&self, name: &str, email: &str, password: &str) -> Registered {
        let response = self
            .server
            .post("/api/auth/register")
            .json(&json!({ "name": name, "email": email, "password": password }))
            .await;
        assert_eq!(response.status_code(), StatusCode::CREATED);

        let body: Value = response.json();
        Registered {
            id: body["user"]["id"].as_str().unwrap().to_string(),
            token: body["token"].as_str().unwrap().to_string(),
        }
    }

    pub async fn login(&self, email: &str, password: &str) -> (StatusCode, Value) {
        let response = self
            .server
            .post("/api/auth/login")
            .json(&json!({ "email": email, "password": password }))
            .await;
        (response.status_code(), response.json())
    }
}

/// Attach a bearer token to a request
pub fn bearer(request: TestRequest, token: &str) -> TestRequest {
    let value = HeaderValue::from_str(&format!("Bearer {}", token)).unwrap();
    request.add_header(AUTHORIZATION, value)
}
