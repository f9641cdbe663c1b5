//! Extractors that hand the raw `Authorization` header to the session authority.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

use warden_auth::Session;

use crate::error::ApiError;
use crate::state::AppState;

/// Raw `Authorization` header value, if present and valid UTF-8.
///
/// Parsing is left to the authority so every route applies the same rules.
#[derive(Debug, Clone)]
pub struct BearerHeader(pub Option<String>);

impl BearerHeader {
    /// Returns the header value as a string slice.
    pub fn as_deref(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

impl<S> FromRequestParts<S> for BearerHeader
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(authorization_header(parts).map(String::from)))
    }
}

/// A session that passed validation with no role requirement.
#[derive(Debug, Clone)]
pub struct SessionGuard(pub Session);

impl std::ops::Deref for SessionGuard {
    type Target = Session;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for SessionGuard {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let session = state
            .authority
            .validate(authorization_header(parts), None)?;
        Ok(Self(session))
    }
}

fn authorization_header(parts: &Parts) -> Option<&str> {
    parts
        .headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
}
