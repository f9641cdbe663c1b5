//! Auth handlers: login, logout, current session.

use axum::Json;
use axum::extract::State;
use tracing::info;

use warden_core::error::AppError;

use crate::dto::request::LoginRequest;
use crate::dto::response::{DetailResponse, SessionResponse, TokenResponse};
use crate::error::ApiError;
use crate::extractors::{BearerHeader, SessionGuard, ValidatedForm};
use crate::state::AppState;

/// POST /api/login
pub async fn login(
    State(state): State<AppState>,
    ValidatedForm(req): ValidatedForm<LoginRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    let user = state
        .credentials
        .verify(&req.username, &req.password)
        .await?
        .ok_or_else(|| {
            info!(username = %req.username, "Login rejected");
            AppError::unauthorized("Incorrect username or password")
        })?;

    let issued = state.authority.issue(&user.subject, user.role);
    Ok(Json(issued.into()))
}

/// POST /api/logout
pub async fn logout(
    State(state): State<AppState>,
    header: BearerHeader,
) -> Result<Json<DetailResponse>, ApiError> {
    state.authority.revoke(header.as_deref())?;

    Ok(Json(DetailResponse {
        detail: "Logged out".to_string(),
    }))
}

/// GET /api/session
pub async fn current_session(
    State(state): State<AppState>,
    session: SessionGuard,
) -> Json<SessionResponse> {
    Json(SessionResponse::new(&session, state.authority.ttl()))
}
