//! # warden-auth
//!
//! Short-lived bearer session authentication for Warden.
//!
//! ## Modules
//!
//! - `session`: issues, validates, and revokes bearer tokens
//! - `credentials`: verifies username/password pairs before a session is issued
//! - `password`: Argon2id password hashing
//! - `error`: the authorization failure taxonomy

pub mod credentials;
pub mod error;
pub mod password;
pub mod session;

pub use credentials::{CredentialStore, InMemoryCredentialStore, VerifiedUser};
pub use error::AuthError;
pub use password::PasswordHasher;
pub use session::{IssuedToken, Role, Session, SessionAuthority, SessionToken};
