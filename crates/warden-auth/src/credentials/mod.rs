//! Username/password verification ahead of session issuance.

pub mod store;

use async_trait::async_trait;

use warden_core::result::AppResult;

use crate::session::Role;

pub use store::InMemoryCredentialStore;

/// A subject whose password has been checked, with the role to issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedUser {
    /// Session subject (the username).
    pub subject: String,
    /// Role the issued session carries.
    pub role: Role,
}

/// Pluggable credential backend consulted by the login handler.
///
/// Implementations decide how passwords are matched (plaintext, Argon2, an
/// external directory). The session authority never calls this.
#[async_trait]
pub trait CredentialStore: Send + Sync + std::fmt::Debug + 'static {
    /// Returns the verified user, or `None` when the pair does not match.
    async fn verify(&self, username: &str, password: &str) -> AppResult<Option<VerifiedUser>>;
}
