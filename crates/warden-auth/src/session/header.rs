//! `Authorization` header parsing.

use crate::error::AuthError;

use super::model::SessionToken;

/// Scheme marker expected at the start of the header, including the space.
pub const BEARER_PREFIX: &str = "Bearer ";

/// Extracts the token from a raw `Authorization` header value.
///
/// The value must be `Bearer <token>`. A missing header, any other scheme,
/// or an empty token is a [`AuthError::MalformedCredential`].
pub fn parse_bearer(header: Option<&str>) -> Result<SessionToken, AuthError> {
    let token = header
        .and_then(|value| value.strip_prefix(BEARER_PREFIX))
        .ok_or(AuthError::MalformedCredential)?;

    token.parse().map_err(|_| AuthError::MalformedCredential)
}
