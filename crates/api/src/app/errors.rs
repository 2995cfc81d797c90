//! Consistent error responses.
//!
//! Every failure leaves the API as `{success: false, message, errors?}` with
//! the status code fixed by the taxonomy below. Internal detail goes to the
//! logs, never to the client.

use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;
use thiserror::Error;

use stockroom_auth::AuthzError;
use stockroom_core::{DomainError, FieldErrors};

#[derive(Debug, Error)]
pub enum ApiError {
    /// 422 with field-keyed validation messages.
    #[error("validation failed")]
    Validation(FieldErrors),

    /// 401: no token, unknown token, or revoked token.
    #[error("unauthenticated")]
    Unauthenticated,

    /// 401: login with a wrong email/password pair.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// 403: authenticated, but the role does not permit the action.
    #[error("forbidden")]
    Forbidden,

    /// 404: the referenced entity does not exist.
    #[error("not found")]
    NotFound,

    /// 500: anything unexpected. The message is the per-endpoint generic
    /// one, not the underlying failure.
    #[error("{0}")]
    Internal(&'static str),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, body) = match self {
            ApiError::Validation(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                json!({
                    "success": false,
                    "message": "Validation failed.",
                    "errors": errors,
                }),
            ),
            ApiError::Unauthenticated => (
                StatusCode::UNAUTHORIZED,
                json!({ "success": false, "message": "Unauthenticated." }),
            ),
            ApiError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                json!({
                    "success": false,
                    "message": "Invalid credentials. Email or password is wrong.",
                }),
            ),
            ApiError::Forbidden => (
                StatusCode::FORBIDDEN,
                json!({
                    "success": false,
                    "message": "Forbidden. You do not have permission to perform this action.",
                }),
            ),
            ApiError::NotFound => (
                StatusCode::NOT_FOUND,
                json!({ "success": false, "message": "Resource not found." }),
            ),
            ApiError::Internal(message) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "success": false, "message": message }),
            ),
        };
        (status, Json(body)).into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(errors) => ApiError::Validation(errors),
            // A malformed id in a path reads as "no such resource".
            DomainError::InvalidId(_) => ApiError::NotFound,
        }
    }
}

impl From<AuthzError> for ApiError {
    fn from(_: AuthzError) -> Self {
        ApiError::Forbidden
    }
}

/// Log the real failure, answer with the endpoint's generic message.
pub fn internal(err: impl core::fmt::Display, message: &'static str) -> ApiError {
    tracing::error!("{message} {err}");
    ApiError::Internal(message)
}
