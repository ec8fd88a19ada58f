//! Error-to-envelope bridge for fallible handlers.
//!
//! Handlers returning `Result<Response, ApiError>` emit the same error
//! envelope as the `fail_*` methods, so callers see one wire shape whether a
//! failure was rendered directly or propagated with `?`.

use axum::response::{IntoResponse, Response};
use serde_json::Value;
use thiserror::Error;

use crate::outcome::Outcome;
use crate::responder::Responder;

/// Failure outcomes a handler can propagate.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("unauthorized")]
    Unauthorized,
    #[error("forbidden")]
    Forbidden,
    #[error("not found: {0}")]
    NotFound(String),
    #[error("validation failed")]
    Validation(Value),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// The outcome this error renders as.
    pub fn outcome(&self) -> Outcome {
        match self {
            ApiError::Unauthorized => Outcome::Unauthorized,
            ApiError::Forbidden => Outcome::Forbidden,
            ApiError::NotFound(_) => Outcome::ResourceNotFound,
            ApiError::Validation(_) => Outcome::InvalidData,
            ApiError::Conflict(_) => Outcome::Conflict,
            ApiError::Internal(_) => Outcome::ServerError,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let responder = Responder::new();
        match self {
            ApiError::Unauthorized => responder.fail_unauthorized(),
            ApiError::Forbidden => responder.fail_forbidden(),
            ApiError::NotFound(description) => {
                responder.fail_not_found(Some(description.as_str()), None)
            }
            ApiError::Validation(errors) => responder.fail_validation_error(Some(errors)),
            ApiError::Conflict(description) => {
                responder.fail::<Value>(Some(description.as_str()), Outcome::Conflict.status(), None)
            }
            ApiError::Internal(description) => {
                responder.fail_server_error(Some(description.as_str()), None)
            }
        }
    }
}
