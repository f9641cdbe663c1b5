//! The session authority: issues, validates, and revokes bearer tokens.

use chrono::{DateTime, TimeDelta, Utc};
use tracing::{debug, info, warn};

use warden_core::config::SessionConfig;
use warden_core::error::AppError;
use warden_core::result::AppResult;

use crate::error::AuthError;

use super::header::parse_bearer;
use super::model::{IssuedToken, Role, Session, SessionToken, TOKEN_TYPE};
use super::store::SessionTable;

/// Owns the session table and enforces TTL and role requirements on access.
///
/// Roles are captured when a session is issued and never re-read from the
/// credential store, so checks stay O(1) and independent of it. A role
/// change takes effect on the subject's next login.
///
/// Expired sessions are removed lazily when they are next looked up; there
/// is no background sweep.
#[derive(Debug)]
pub struct SessionAuthority {
    /// Token-keyed session table.
    table: SessionTable,
    /// Maximum session age.
    ttl: TimeDelta,
}

impl SessionAuthority {
    /// Creates an authority with an empty table and the configured TTL.
    pub fn new(config: &SessionConfig) -> AppResult<Self> {
        Ok(Self {
            table: SessionTable::new(),
            ttl: configured_ttl(config)?,
        })
    }

    /// Returns the session time-to-live.
    pub fn ttl(&self) -> TimeDelta {
        self.ttl
    }

    /// Issues a new session for an already-verified subject.
    pub fn issue(&self, subject: &str, role: Role) -> IssuedToken {
        self.issue_at(subject, role, Utc::now())
    }

    /// Issues a new session stamped with `now`.
    pub fn issue_at(&self, subject: &str, role: Role, now: DateTime<Utc>) -> IssuedToken {
        let session = loop {
            let candidate = Session {
                token: SessionToken::generate(),
                subject: subject.to_string(),
                role: role.clone(),
                issued_at: now,
            };
            if self.table.insert_new(candidate.clone()) {
                break candidate;
            }
            warn!("Session token collision, regenerating");
        };

        info!(
            subject = %session.subject,
            role = %session.role,
            token = session.token.redacted(),
            "Session issued"
        );

        IssuedToken {
            expires_at: session.expires_at(self.ttl),
            access_token: session.token,
            token_type: TOKEN_TYPE.to_string(),
            role: session.role,
        }
    }

    /// Validates a raw `Authorization` header value against the table.
    ///
    /// When `required_role` is given, the session's role must equal it.
    pub fn validate(
        &self,
        auth_header: Option<&str>,
        required_role: Option<&Role>,
    ) -> Result<Session, AuthError> {
        self.validate_at(auth_header, required_role, Utc::now())
    }

    /// Validates as of `now`.
    pub fn validate_at(
        &self,
        auth_header: Option<&str>,
        required_role: Option<&Role>,
        now: DateTime<Utc>,
    ) -> Result<Session, AuthError> {
        let token = parse_bearer(auth_header)?;

        match self.table.resolve(&token, now, self.ttl, required_role) {
            Ok(session) => {
                debug!(subject = %session.subject, role = %session.role, "Session validated");
                Ok(session)
            }
            Err(AuthError::ExpiredToken) => {
                info!(token = token.redacted(), "Expired session removed");
                Err(AuthError::ExpiredToken)
            }
            Err(AuthError::InsufficientRole) => {
                warn!(
                    token = token.redacted(),
                    required_role = required_role.map(Role::as_str).unwrap_or_default(),
                    "Session lacks required role"
                );
                Err(AuthError::InsufficientRole)
            }
            Err(e) => {
                debug!(token = token.redacted(), error = %e, "Session rejected");
                Err(e)
            }
        }
    }

    /// Revokes the session named by a raw `Authorization` header value.
    ///
    /// Revoking an unknown or already-revoked token succeeds.
    pub fn revoke(&self, auth_header: Option<&str>) -> Result<(), AuthError> {
        let token = parse_bearer(auth_header)?;

        match self.table.remove(&token) {
            Some(session) => info!(subject = %session.subject, "Session revoked"),
            None => debug!(token = token.redacted(), "Revoke for unknown token ignored"),
        }
        Ok(())
    }

    /// Number of stored sessions, including expired ones not yet looked up.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Whether no sessions are stored.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

/// Longest accepted session TTL, 100 years.
pub const MAX_TTL_SECONDS: u64 = 36_525 * 24 * 3600;

/// Converts `ttl_seconds` into a `TimeDelta`.
pub fn configured_ttl(config: &SessionConfig) -> AppResult<TimeDelta> {
    let ttl_seconds = config.ttl_seconds;
    if ttl_seconds == 0 || ttl_seconds > MAX_TTL_SECONDS {
        return Err(AppError::configuration(format!(
            "session.ttl_seconds must be between 1 and {MAX_TTL_SECONDS}, got {ttl_seconds}"
        )));
    }

    i64::try_from(ttl_seconds)
        .ok()
        .and_then(TimeDelta::try_seconds)
        .ok_or_else(|| {
            AppError::configuration(format!("session.ttl_seconds out of range: {ttl_seconds}"))
        })
}
