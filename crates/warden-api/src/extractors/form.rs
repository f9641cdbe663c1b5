//! Form extractor that validates its payload and rejects through [`ApiError`].

use axum::Form;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;
use validator::Validate;

use warden_core::error::AppError;

use crate::error::ApiError;

/// A `application/x-www-form-urlencoded` body that deserialized and passed
/// [`Validate`].
///
/// Missing fields, a wrong content type, and failed validation all become
/// `400 {error, message}` instead of Axum's plain-text rejection.
#[derive(Debug, Clone)]
pub struct ValidatedForm<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedForm<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Form(value) = Form::<T>::from_request(req, state).await.map_err(|e| {
            tracing::debug!(error = %e, "Form body rejected");
            AppError::validation(e.body_text())
        })?;

        value.validate()?;
        Ok(Self(value))
    }
}
