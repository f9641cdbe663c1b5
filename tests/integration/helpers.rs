//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use warden_api::AppState;
use warden_auth::SessionAuthority;
use warden_core::config::{AppConfig, UserEntry};

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Direct handle on the authority behind the router
    pub authority: Arc<SessionAuthority>,
    /// Application config
    pub config: AppConfig,
}

/// Captured response
pub struct TestResponse {
    /// HTTP status
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Parsed JSON body (`Null` when empty or not JSON)
    pub body: Value,
}

impl TestApp {
    /// Create a test application with the default demo users
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    /// Create a test application with extra users appended
    pub fn with_users(users: Vec<UserEntry>) -> Self {
        let mut config = AppConfig::default();
        config.auth.users.extend(users);
        Self::with_config(config)
    }

    /// Create a test application from an explicit config
    pub fn with_config(config: AppConfig) -> Self {
        let state = AppState::from_config(config.clone()).expect("Failed to build app state");
        let authority = Arc::clone(&state.authority);
        let router = warden_api::build_router(state);

        Self {
            router,
            authority,
            config,
        }
    }

    /// Login and return the access token.
    ///
    /// Credentials are sent as-is, so test values must be URL-safe.
    pub async fn login(&self, username: &str, password: &str) -> String {
        let response = self.post_login(username, password).await;
        assert_eq!(
            response.status,
            StatusCode::OK,
            "Login failed: {:?}",
            response.body
        );

        response
            .body
            .get("access_token")
            .and_then(|v| v.as_str())
            .expect("No access_token in login response")
            .to_string()
    }

    /// POST the login form
    pub async fn post_login(&self, username: &str, password: &str) -> TestResponse {
        self.post_login_body(
            "application/x-www-form-urlencoded",
            format!("username={username}&password={password}"),
        )
        .await
    }

    /// POST a raw login body with the given content type
    pub async fn post_login_body(&self, content_type: &str, body: String) -> TestResponse {
        let req = Request::builder()
            .method("POST")
            .uri("/api/login")
            .header("Content-Type", content_type)
            .body(Body::from(body))
            .expect("Failed to build request");

        self.send(req).await
    }

    /// Make a request with an optional bearer token
    pub async fn request(&self, method: &str, path: &str, token: Option<&str>) -> TestResponse {
        let authorization = token.map(|t| format!("Bearer {t}"));
        self.request_with_header(method, path, authorization.as_deref())
            .await
    }

    /// Make a request with a raw `Authorization` header value
    pub async fn request_with_header(
        &self,
        method: &str,
        path: &str,
        authorization: Option<&str>,
    ) -> TestResponse {
        let mut req = Request::builder().method(method).uri(path);
        if let Some(value) = authorization {
            req = req.header("Authorization", value);
        }
        let req = req.body(Body::empty()).expect("Failed to build request");

        self.send(req).await
    }

    async fn send(&self, req: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to execute request");

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read body");
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            headers,
            body,
        }
    }
}
