//! Session, token, and role types.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use warden_core::error::AppError;

/// Literal token-type marker handed back to clients.
pub const TOKEN_TYPE: &str = "bearer";

/// Opaque bearer token. Possession grants the session's privileges.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionToken(String);

impl SessionToken {
    /// Generates a fresh random token (UUIDv4, 122 random bits).
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Returns the token as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Short prefix safe to put in logs.
    pub fn redacted(&self) -> &str {
        let end = self
            .0
            .char_indices()
            .nth(8)
            .map(|(i, _)| i)
            .unwrap_or(self.0.len());
        &self.0[..end]
    }
}

impl fmt::Display for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// Keeps full tokens out of `{:?}` output.
impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SessionToken({}…)", self.redacted())
    }
}

impl FromStr for SessionToken {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(AppError::validation("Session token must not be empty"));
        }
        Ok(Self(s.to_string()))
    }
}

/// Coarse authorization tier, compared by exact match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Role(String);

impl Role {
    /// Creates a role from its name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Return the role name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Role {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(AppError::validation("Role name must not be empty"));
        }
        Ok(Self(s.to_string()))
    }
}

/// One authenticated login. Immutable once stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Lookup key.
    pub token: SessionToken,
    /// Username the session belongs to.
    pub subject: String,
    /// Role captured at issuance time.
    pub role: Role,
    /// Creation timestamp.
    pub issued_at: DateTime<Utc>,
}

impl Session {
    /// Whether the session is past its TTL at `now`.
    ///
    /// A session checked at exactly `issued_at + ttl` is still live.
    pub fn is_expired_at(&self, now: DateTime<Utc>, ttl: TimeDelta) -> bool {
        now.signed_duration_since(self.issued_at) > ttl
    }

    /// Instant after which the session is no longer honored.
    pub fn expires_at(&self, ttl: TimeDelta) -> DateTime<Utc> {
        self.issued_at + ttl
    }
}

/// What `issue` hands back to the login handler.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssuedToken {
    /// The bearer token.
    pub access_token: SessionToken,
    /// Always [`TOKEN_TYPE`].
    pub token_type: String,
    /// Role bound to the session.
    pub role: Role,
    /// When the session stops validating.
    pub expires_at: DateTime<Utc>,
}
