//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use warden_auth::{IssuedToken, Session};

/// Successful login body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    /// Bearer token for the `Authorization` header.
    pub access_token: String,
    /// Always `"bearer"`.
    pub token_type: String,
    /// Role bound to the session.
    pub role: String,
    /// When the token stops validating.
    pub expires_at: DateTime<Utc>,
}

impl From<IssuedToken> for TokenResponse {
    fn from(issued: IssuedToken) -> Self {
        Self {
            access_token: issued.access_token.to_string(),
            token_type: issued.token_type,
            role: issued.role.to_string(),
            expires_at: issued.expires_at,
        }
    }
}

/// Current session summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResponse {
    /// Username.
    pub subject: String,
    /// Role captured at login.
    pub role: String,
    /// Login time.
    pub issued_at: DateTime<Utc>,
    /// Expiry time.
    pub expires_at: DateTime<Utc>,
}

impl SessionResponse {
    /// Builds the summary for `session` under the given TTL.
    pub fn new(session: &Session, ttl: chrono::TimeDelta) -> Self {
        Self {
            subject: session.subject.clone(),
            role: session.role.to_string(),
            issued_at: session.issued_at,
            expires_at: session.expires_at(ttl),
        }
    }
}

/// Simple `{"message": ...}` body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message text.
    pub message: String,
}

/// Simple `{"detail": ...}` body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailResponse {
    /// Detail text.
    pub detail: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status.
    pub status: String,
    /// Crate version.
    pub version: String,
    /// Seconds since the state was built.
    pub uptime_seconds: i64,
}

/// Detailed health response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailedHealthResponse {
    /// Overall status.
    pub status: String,
    /// Crate version.
    pub version: String,
    /// Seconds since the state was built.
    pub uptime_seconds: i64,
    /// Entries in the session table, including expired ones not yet looked up.
    pub stored_sessions: usize,
    /// Configured session TTL.
    pub session_ttl_seconds: i64,
}
