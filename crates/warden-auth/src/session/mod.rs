//! Session lifecycle: issuance, validation, revocation, and lazy expiry.

pub mod authority;
pub mod header;
pub mod model;
pub mod store;

pub use authority::{MAX_TTL_SECONDS, SessionAuthority, configured_ttl};
pub use header::parse_bearer;
pub use model::{IssuedToken, Role, Session, SessionToken, TOKEN_TYPE};
pub use store::SessionTable;
