//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use warden_auth::{CredentialStore, InMemoryCredentialStore, Role, SessionAuthority};
use warden_core::config::AppConfig;
use warden_core::result::AppResult;

/// Shared application state passed to all Axum handlers via `State`.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Issues and checks bearer sessions.
    pub authority: Arc<SessionAuthority>,
    /// Verifies login credentials before a session is issued.
    pub credentials: Arc<dyn CredentialStore>,
    /// Role required by admin-only routes.
    pub admin_role: Role,
    /// Process start time, for uptime reporting.
    pub started_at: DateTime<Utc>,
}

impl AppState {
    /// Wires a fresh authority and the config-backed credential store.
    pub fn from_config(config: AppConfig) -> AppResult<Self> {
        let credentials = Arc::new(InMemoryCredentialStore::from_config(&config.auth)?);
        Self::new(config, credentials)
    }

    /// Wires a fresh authority around a caller-supplied credential store.
    pub fn new(config: AppConfig, credentials: Arc<dyn CredentialStore>) -> AppResult<Self> {
        let authority = Arc::new(SessionAuthority::new(&config.session)?);
        let admin_role = Role::new(config.session.admin_role.clone());

        Ok(Self {
            config: Arc::new(config),
            authority,
            credentials,
            admin_role,
            started_at: Utc::now(),
        })
    }
}
