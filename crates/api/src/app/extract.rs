//! Validation stage: extractors that reject malformed input before a handler runs.

use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;

use subhub_core::DomainResult;

use crate::app::errors::ApiError;

/// Shape checks a request value must pass after deserialization.
pub trait Validate {
    fn validate(&self) -> DomainResult<()>;
}

/// JSON body that deserialized and passed [`Validate`].
#[derive(Debug)]
pub struct ValidJson<T>(pub T);

/// Path parameters that deserialized and passed [`Validate`].
#[derive(Debug)]
pub struct ValidPath<T>(pub T);

#[axum::async_trait]
impl<T, S> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::Validation(rejection.body_text()))?;
        value.validate()?;
        Ok(Self(value))
    }
}

#[axum::async_trait]
impl<T, S> FromRequestParts<S> for ValidPath<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ApiError::Validation(rejection.body_text()))?;
        value.validate()?;
        Ok(Self(value))
    }
}
