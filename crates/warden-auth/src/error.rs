//! Authorization failures returned by the session authority.

use thiserror::Error;

use warden_core::error::AppError;

/// Terminal per-request authorization decisions.
///
/// None of these are retried; the route handler turns them into a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthError {
    /// The header is missing or is not `Bearer <token>`.
    #[error("Invalid authentication scheme")]
    MalformedCredential,
    /// The token does not match any stored session.
    #[error("Invalid token")]
    InvalidToken,
    /// The session outlived its TTL. The entry has been removed.
    #[error("Token expired")]
    ExpiredToken,
    /// The session's role does not equal the route's required role.
    #[error("Insufficient permissions")]
    InsufficientRole,
}

impl AuthError {
    /// Whether this failure means "not authenticated" rather than "not allowed".
    pub fn is_unauthorized(&self) -> bool {
        !matches!(self, Self::InsufficientRole)
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        if err.is_unauthorized() {
            AppError::unauthorized(err.to_string())
        } else {
            AppError::forbidden(err.to_string())
        }
    }
}
