//! Session authority configuration.

use serde::{Deserialize, Serialize};

/// Session lifetime and role-gating configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Seconds after issuance beyond which a session is no longer honored.
    #[serde(default = "default_ttl")]
    pub ttl_seconds: u64,
    /// Role required by admin-only routes.
    #[serde(default = "default_admin_role")]
    pub admin_role: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            ttl_seconds: default_ttl(),
            admin_role: default_admin_role(),
        }
    }
}

fn default_ttl() -> u64 {
    3600
}

fn default_admin_role() -> String {
    "admin".to_string()
}
