//! Authentication test helpers
//!
//! Builds the full Axum app over a temporary data directory with a cheap
//! bcrypt cost, and wraps requests so tests read as a sequence of calls.

use std::time::Duration;

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use generic_auth::auth::ValidationPolicy;
use generic_auth::backend::server::create_app;
use generic_auth::shared::config::AuthConfig;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

pub const TEST_SECRET: &str = "integration test secret";

/// Lowest cost bcrypt accepts
pub const TEST_BCRYPT_COST: u32 = 4;

pub fn test_config(policy: ValidationPolicy) -> AuthConfig {
    AuthConfig::builder()
        .secret(TEST_SECRET)
        .token_ttl(Duration::from_secs(3600))
        .validation(policy)
        .bcrypt_cost(TEST_BCRYPT_COST)
        .build()
        .expect("test configuration is valid")
}

/// Router plus the data directory backing it
pub struct TestApp {
    pub router: Router,
    pub data_dir: TempDir,
}

impl TestApp {
    pub fn new(policy: ValidationPolicy) -> Self {
        let data_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let router = create_app(&test_config(policy), data_dir.path());
        Self { router, data_dir }
    }

    pub fn permissive() -> Self {
        Self::new(ValidationPolicy::Permissive)
    }

    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        bearer: Option<&str>,
        body: Option<Value>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = bearer {
            builder = builder.header(header::AUTHORIZATION, auth_header(token));
        }
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("Failed to build request");

        self.send(request).await
    }

    /// POST an arbitrary body, with an optional content type
    pub async fn post_raw(
        &self,
        uri: &str,
        bearer: Option<&str>,
        content_type: Option<&str>,
        body: &str,
    ) -> TestResponse {
        let mut builder = Request::builder().method(Method::POST).uri(uri);
        if let Some(token) = bearer {
            builder = builder.header(header::AUTHORIZATION, auth_header(token));
        }
        if let Some(value) = content_type {
            builder = builder.header(header::CONTENT_TYPE, value);
        }
        let request = builder
            .body(Body::from(body.to_string()))
            .expect("Failed to build request");

        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read body");
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("Response body is not JSON")
        };

        TestResponse { status, body }
    }

    pub async fn register(&self, email: &str, password: &str) -> TestResponse {
        self.request(
            Method::POST,
            "/register",
            None,
            Some(serde_json::json!({ "email": email, "password": password })),
        )
        .await
    }

    pub async fn login(&self, email: &str, password: &str) -> TestResponse {
        self.request(
            Method::POST,
            "/login",
            None,
            Some(serde_json::json!({ "email": email, "password": password })),
        )
        .await
    }

    pub async fn get_recipes(&self, token: Option<&str>) -> TestResponse {
        self.request(Method::GET, "/recipes", token, None).await
    }

    pub async fn create_recipe(&self, token: Option<&str>, title: &str) -> TestResponse {
        self.request(
            Method::POST,
            "/recipes",
            token,
            Some(serde_json::json!({ "title": title })),
        )
        .await
    }
}

#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl TestResponse {
    /// The `token` field of a successful register/login
    pub fn token(&self) -> String {
        self.body["token"]
            .as_str()
            .unwrap_or_else(|| panic!("no token in {}", self.body))
            .to_string()
    }
}

/// Create authorization header value
pub fn auth_header(token: &str) -> String {
    format!("Bearer {}", token)
}
