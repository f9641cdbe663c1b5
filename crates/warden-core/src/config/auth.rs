//! Credential store configuration.

use serde::{Deserialize, Serialize};

/// Authentication configuration: the users the credential store knows about.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Known users. Each entry carries exactly one of `password` or `password_hash`.
    #[serde(default = "default_users")]
    pub users: Vec<UserEntry>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            users: default_users(),
        }
    }
}

/// A single user record in the configuration file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserEntry {
    /// Login name, also used as the session subject.
    pub username: String,
    /// Role granted to sessions issued for this user.
    pub role: String,
    /// Plaintext password (development only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// Argon2 PHC-format password hash.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password_hash: Option<String>,
}

impl UserEntry {
    /// Creates an entry with a plaintext password.
    pub fn plaintext(
        username: impl Into<String>,
        password: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            role: role.into(),
            password: Some(password.into()),
            password_hash: None,
        }
    }

    /// Creates an entry with an Argon2 password hash.
    pub fn hashed(
        username: impl Into<String>,
        password_hash: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            role: role.into(),
            password: None,
            password_hash: Some(password_hash.into()),
        }
    }
}

fn default_users() -> Vec<UserEntry> {
    vec![
        UserEntry::plaintext("user", "password", "user"),
        UserEntry::plaintext("admin", "adminpass", "admin"),
    ]
}
