use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

use subhub_core::{DomainError, UserId};
use subhub_infra::StoreError;

/// Everything a handler can fail with.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Store(StoreError),
}

impl ApiError {
    pub fn user_not_found(id: &UserId) -> Self {
        Self::NotFound(format!("The user with this ID:{id} was not found"))
    }

    pub fn subscriber_not_found(id: &UserId) -> Self {
        Self::NotFound(format!("The subscriber with this ID:{id} was not found"))
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            ApiError::NotFound(_) => "not_found",
            ApiError::Validation(_) => "validation_error",
            ApiError::Store(_) => "store_error",
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        ApiError::Validation(err.to_string())
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => {
                ApiError::NotFound(format!("The record with this ID:{id} was not found"))
            }
            e => ApiError::Store(e),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Store(e) => tracing::error!("store failure: {e}"),
            other => tracing::debug!("request rejected: {other}"),
        }
        json_error(self.status(), self.code(), self.to_string())
    }
}

pub fn json_error(status: StatusCode, code: &'static str, message: impl Into<String>) -> Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_the_id() {
        let id = UserId::parse("does-not-exist").unwrap();
        let err = ApiError::user_not_found(&id);
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "The user with this ID:does-not-exist was not found");

        let err = ApiError::subscriber_not_found(&id);
        assert!(err.to_string().starts_with("The subscriber with this ID:does-not-exist"));
    }

    #[test]
    fn domain_errors_map_to_client_errors() {
        let err: ApiError = DomainError::invalid_id("UserId: must not be empty").into();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert!(err.to_string().contains("must not be empty"));
    }

    #[test]
    fn store_errors_map_by_kind() {
        let err: ApiError = StoreError::NotFound("x".to_string()).into();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);

        let err: ApiError = StoreError::Poisoned.into();
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn error_body_shape() {
        let res = ApiError::Validation("bad".to_string()).into_response();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }
}
