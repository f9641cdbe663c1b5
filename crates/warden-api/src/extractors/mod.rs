//! Custom Axum extractors.

pub mod auth;
pub mod form;

pub use auth::{BearerHeader, SessionGuard};
pub use form::ValidatedForm;
