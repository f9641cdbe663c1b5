//! Configuration-backed credential store.

use std::collections::HashMap;

use async_trait::async_trait;
use tracing::{debug, info};

use warden_core::config::{AuthConfig, UserEntry};
use warden_core::error::AppError;
use warden_core::result::AppResult;

use crate::password::PasswordHasher;
use crate::session::Role;

use super::{CredentialStore, VerifiedUser};

/// How a user's password is stored.
#[derive(Clone)]
enum StoredSecret {
    /// Compared byte for byte.
    Plaintext(String),
    /// Argon2 PHC string.
    Hashed(String),
}

#[derive(Clone)]
struct StoredUser {
    role: Role,
    secret: StoredSecret,
}

/// Credential store holding users from the `[auth]` config section.
#[derive(Clone)]
pub struct InMemoryCredentialStore {
    users: HashMap<String, StoredUser>,
    hasher: PasswordHasher,
}

impl std::fmt::Debug for InMemoryCredentialStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryCredentialStore")
            .field("users", &self.users.len())
            .finish()
    }
}

impl InMemoryCredentialStore {
    /// Builds the store from configuration, rejecting malformed entries.
    pub fn from_config(config: &AuthConfig) -> AppResult<Self> {
        let hasher = PasswordHasher::new();
        let mut users = HashMap::with_capacity(config.users.len());

        for entry in &config.users {
            let user = Self::build_user(entry, &hasher)?;
            if users.insert(entry.username.clone(), user).is_some() {
                return Err(AppError::configuration(format!(
                    "Duplicate user '{}' in auth config",
                    entry.username
                )));
            }
        }

        info!(users = users.len(), "Credential store loaded");
        Ok(Self { users, hasher })
    }

    fn build_user(entry: &UserEntry, hasher: &PasswordHasher) -> AppResult<StoredUser> {
        if entry.username.is_empty() {
            return Err(AppError::configuration("User entry with empty username"));
        }

        let role: Role = entry.role.parse().map_err(|_| {
            AppError::configuration(format!("User '{}' has an empty role", entry.username))
        })?;

        let secret = match (&entry.password, &entry.password_hash) {
            (Some(plain), None) => StoredSecret::Plaintext(plain.clone()),
            (None, Some(hash)) => {
                hasher.check_format(hash)?;
                StoredSecret::Hashed(hash.clone())
            }
            _ => {
                return Err(AppError::configuration(format!(
                    "User '{}' must set exactly one of `password` or `password_hash`",
                    entry.username
                )));
            }
        };

        Ok(StoredUser { role, secret })
    }

    /// Number of known users.
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Whether no users are configured.
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[async_trait]
impl CredentialStore for InMemoryCredentialStore {
    async fn verify(&self, username: &str, password: &str) -> AppResult<Option<VerifiedUser>> {
        let Some(user) = self.users.get(username) else {
            debug!(username, "Login for unknown user");
            return Ok(None);
        };

        let matches = match &user.secret {
            StoredSecret::Plaintext(expected) => expected == password,
            StoredSecret::Hashed(hash) => self.hasher.verify_password(password, hash)?,
        };

        if !matches {
            debug!(username, "Password mismatch");
            return Ok(None);
        }

        Ok(Some(VerifiedUser {
            subject: username.to_string(),
            role: user.role.clone(),
        }))
    }
}
