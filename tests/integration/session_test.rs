//! Integration tests for session lifetime, introspection, and concurrency.

mod helpers;

use axum::http::StatusCode;
use chrono::{DateTime, TimeDelta, Utc};

use warden_auth::{AuthError, Role};

#[tokio::test]
async fn test_current_session() {
    let app = helpers::TestApp::new();
    let token = app.login("admin", "adminpass").await;

    let response = app.request("GET", "/api/session", Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["subject"], "admin");
    assert_eq!(response.body["role"], "admin");

    let issued: DateTime<Utc> = serde_json::from_value(response.body["issued_at"].clone()).unwrap();
    let expires: DateTime<Utc> =
        serde_json::from_value(response.body["expires_at"].clone()).unwrap();
    assert_eq!(expires - issued, TimeDelta::hours(1));
}

#[tokio::test]
async fn test_expired_session_is_rejected_then_gone() {
    let app = helpers::TestApp::new();
    let token = app.login("user", "password").await;
    let header = format!("Bearer {token}");

    let later = Utc::now() + TimeDelta::hours(2);
    assert_eq!(
        app.authority.validate_at(Some(&header), None, later),
        Err(AuthError::ExpiredToken)
    );

    // The entry was removed on the failed lookup.
    let response = app.request("GET", "/api/secret-data", Some(&token)).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["message"], "Invalid token");
}

#[tokio::test]
async fn test_expired_token_over_http() {
    let mut config = warden_core::config::AppConfig::default();
    config.session.ttl_seconds = 1;
    let app = helpers::TestApp::with_config(config);

    let issued = app
        .authority
        .issue_at("user", Role::new("user"), Utc::now() - TimeDelta::seconds(5));
    let token = issued.access_token.to_string();

    let response = app.request("GET", "/api/secret-data", Some(&token)).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["message"], "Token expired");

    let response = app.request("GET", "/api/secret-data", Some(&token)).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["message"], "Invalid token");
}

#[tokio::test]
async fn test_concurrent_logins_yield_independent_tokens() {
    let app = helpers::TestApp::new();

    let (first, second) = tokio::join!(
        app.login("user", "password"),
        app.login("user", "password")
    );
    assert_ne!(first, second);

    app.request("POST", "/api/logout", Some(&first)).await;

    let response = app.request("GET", "/api/secret-data", Some(&first)).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    let response = app.request("GET", "/api/secret-data", Some(&second)).await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_detailed_health_reports_stored_sessions() {
    let app = helpers::TestApp::new();
    app.login("user", "password").await;
    app.login("admin", "adminpass").await;

    let response = app.request("GET", "/api/health/detailed", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
    assert_eq!(response.body["stored_sessions"], 2);
    assert_eq!(response.body["session_ttl_seconds"], 3600);
}
