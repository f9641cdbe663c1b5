//! Integration tests for the login/logout flow and role-gated routes.

mod helpers;

use axum::http::StatusCode;

use warden_auth::PasswordHasher;
use warden_core::config::UserEntry;

#[tokio::test]
async fn test_login_success() {
    let app = helpers::TestApp::new();

    let response = app.post_login("user", "password").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.get("access_token").is_some());
    assert_eq!(response.body["token_type"], "bearer");
    assert_eq!(response.body["role"], "user");
    assert!(response.body.get("expires_at").is_some());
}

#[tokio::test]
async fn test_login_invalid_password() {
    let app = helpers::TestApp::new();

    let response = app.post_login("user", "wrongpassword").await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.headers["www-authenticate"], "Bearer");
    assert_eq!(response.body["message"], "Incorrect username or password");
}

#[tokio::test]
async fn test_login_nonexistent_user() {
    let app = helpers::TestApp::new();

    let response = app.post_login("nobody", "password").await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert!(app.authority.is_empty());
}

#[tokio::test]
async fn test_login_empty_username() {
    let app = helpers::TestApp::new();

    let response = app.post_login("", "password").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_login_missing_field_returns_json_error() {
    let app = helpers::TestApp::new();

    let response = app
        .post_login_body(
            "application/x-www-form-urlencoded",
            "username=user".to_string(),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
    assert!(response.body["message"].as_str().is_some());
    assert!(app.authority.is_empty());
}

#[tokio::test]
async fn test_login_json_body_is_rejected_as_json_error() {
    let app = helpers::TestApp::new();

    let response = app
        .post_login_body(
            "application/json",
            r#"{"username":"user","password":"password"}"#.to_string(),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_login_with_hashed_password() {
    let hash = PasswordHasher::new()
        .hash_password("opensesame")
        .expect("hashing should succeed");
    let app = helpers::TestApp::with_users(vec![UserEntry::hashed("carol", hash, "auditor")]);

    let token = app.login("carol", "opensesame").await;
    let response = app.request("GET", "/api/session", Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["subject"], "carol");
    assert_eq!(response.body["role"], "auditor");
}

#[tokio::test]
async fn test_secret_data_authenticated() {
    let app = helpers::TestApp::new();
    let token = app.login("user", "password").await;

    let response = app.request("GET", "/api/secret-data", Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body["message"],
        "Hello, user! Secret message: 42."
    );
}

#[tokio::test]
async fn test_secret_data_unauthenticated() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/api/secret-data", None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["message"], "Invalid authentication scheme");
}

#[tokio::test]
async fn test_secret_data_wrong_scheme() {
    let app = helpers::TestApp::new();
    let token = app.login("user", "password").await;

    let response = app
        .request_with_header("GET", "/api/secret-data", Some(&format!("Token {token}")))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_secret_data_unknown_token() {
    let app = helpers::TestApp::new();

    let response = app
        .request("GET", "/api/secret-data", Some("not-a-real-token"))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["message"], "Invalid token");
}

#[tokio::test]
async fn test_admin_data_forbidden_for_user() {
    let app = helpers::TestApp::new();
    let token = app.login("user", "password").await;

    let response = app.request("GET", "/api/admin-data", Some(&token)).await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert!(response.headers.get("www-authenticate").is_none());

    // The session survives a failed role check.
    let response = app.request("GET", "/api/secret-data", Some(&token)).await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_admin_data_allowed_for_admin() {
    let app = helpers::TestApp::new();
    let token = app.login("admin", "adminpass").await;

    let response = app.request("GET", "/api/admin-data", Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body["message"],
        "Hello, admin! This is the admin panel."
    );
}

#[tokio::test]
async fn test_admin_role_comes_from_config() {
    let mut config = warden_core::config::AppConfig::default();
    config.session.admin_role = "user".to_string();
    let app = helpers::TestApp::with_config(config);

    let user_token = app.login("user", "password").await;
    let admin_token = app.login("admin", "adminpass").await;

    let response = app
        .request("GET", "/api/admin-data", Some(&user_token))
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app
        .request("GET", "/api/admin-data", Some(&admin_token))
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_logout() {
    let app = helpers::TestApp::new();
    let token = app.login("user", "password").await;

    let response = app.request("POST", "/api/logout", Some(&token)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["detail"], "Logged out");

    let response = app.request("GET", "/api/secret-data", Some(&token)).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["message"], "Invalid token");
}

#[tokio::test]
async fn test_logout_is_idempotent() {
    let app = helpers::TestApp::new();
    let token = app.login("user", "password").await;

    for _ in 0..2 {
        let response = app.request("POST", "/api/logout", Some(&token)).await;
        assert_eq!(response.status, StatusCode::OK);
    }

    let response = app
        .request("POST", "/api/logout", Some("never-issued"))
        .await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_logout_without_header() {
    let app = helpers::TestApp::new();

    let response = app.request("POST", "/api/logout", None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}
