//! JSON envelope wire types.
//!
//! # Responsibilities
//! - Define the success and error envelope shapes
//! - Serialize optional fields only when present
//! - Convert an envelope into a finalized axum response
//!
//! # Design Decisions
//! - Field presence follows `Option` semantics, not truthiness: `Some(0)`,
//!   `Some(false)` and `Some("")` are serialized, `None` is omitted
//! - Envelopes are transient values, built per response and dropped
//! - Serialization failures are left to axum's `Json` (it renders a 500)

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Body of a success response: `{"code": <int>, "message"?, "data"?}`.
#[derive(Debug, Clone, Serialize)]
pub struct SuccessEnvelope<T: Serialize> {
    pub code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

/// Body of an error response: `{"code": <int>, "description"?, "errors"?}`.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorEnvelope<E: Serialize> {
    pub code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<E>,
}

impl<T: Serialize> SuccessEnvelope<T> {
    /// Build an envelope for `status`. An empty `message` is omitted.
    pub fn new(status: StatusCode, message: &str, data: Option<T>) -> Self {
        Self {
            code: status.as_u16(),
            message: (!message.is_empty()).then(|| message.to_string()),
            data,
        }
    }
}

impl<E: Serialize> ErrorEnvelope<E> {
    /// Build an envelope for `status`. A `None` description is omitted.
    pub fn new(status: StatusCode, description: Option<&str>, errors: Option<E>) -> Self {
        Self {
            code: status.as_u16(),
            description: description.map(str::to_string),
            errors,
        }
    }
}

impl<T: Serialize> IntoResponse for SuccessEnvelope<T> {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.code).unwrap_or(StatusCode::OK);
        (status, Json(self)).into_response()
    }
}

impl<E: Serialize> IntoResponse for ErrorEnvelope<E> {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}
