//! Routes guarded by the session authority.

use axum::Json;
use axum::extract::State;

use crate::dto::response::MessageResponse;
use crate::error::ApiError;
use crate::extractors::{BearerHeader, SessionGuard};
use crate::state::AppState;

/// GET /api/secret-data
pub async fn secret_data(session: SessionGuard) -> Json<MessageResponse> {
    Json(MessageResponse {
        message: format!("Hello, {}! Secret message: 42.", session.subject),
    })
}

/// GET /api/admin-data
///
/// Requires the configured admin role.
pub async fn admin_data(
    State(state): State<AppState>,
    header: BearerHeader,
) -> Result<Json<MessageResponse>, ApiError> {
    let session = state
        .authority
        .validate(header.as_deref(), Some(&state.admin_role))?;

    Ok(Json(MessageResponse {
        message: format!("Hello, {}! This is the admin panel.", session.subject),
    }))
}
