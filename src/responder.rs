//! Per-request response formatter.
//!
//! # Responsibilities
//! - Render already-decided outcomes into status + JSON envelope
//! - Provide one named method per common outcome
//!
//! # Design Decisions
//! - Explicit wrapper type instead of mutating a framework object at runtime
//! - `respond`/`fail` are the two entry points; everything else delegates
//! - Each method finalizes the response exactly once; writing a second
//!   response for the same request is a caller error handled by the framework

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::{json, Value};
use tracing::debug;

use crate::envelope::{ErrorEnvelope, SuccessEnvelope};
use crate::outcome::Outcome;

/// Formats outcomes into standard JSON envelopes.
///
/// Cheap to construct; one per in-flight request. Handlers can take it as an
/// extractor, receive it from the [`attach`](crate::middleware::attach)
/// middleware, or build one directly with [`Responder::new`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Responder;

impl Responder {
    pub fn new() -> Self {
        Self
    }

    /// Render a success envelope with the given status.
    ///
    /// `message` is included only when non-empty; `data` is included only
    /// when `Some` (falsy payloads like `0` or `""` are preserved).
    pub fn respond<T: Serialize>(
        &self,
        data: Option<T>,
        status: StatusCode,
        message: &str,
    ) -> Response {
        debug!(status = status.as_u16(), "rendering success envelope");
        SuccessEnvelope::new(status, message, data).into_response()
    }

    /// Render an error envelope with the given status.
    ///
    /// `description` defaults to `"Error"` when `None`; pass `Some("")` to
    /// omit it from the body. `errors` is included only when `Some`.
    pub fn fail<E: Serialize>(
        &self,
        description: Option<&str>,
        status: StatusCode,
        errors: Option<E>,
    ) -> Response {
        let description = match description {
            None => Some("Error"),
            Some("") => None,
            Some(s) => Some(s),
        };
        debug!(status = status.as_u16(), "rendering error envelope");
        ErrorEnvelope::new(status, description, errors).into_response()
    }

    /// 201 with an optional payload.
    pub fn respond_created<T: Serialize>(&self, data: Option<T>, message: &str) -> Response {
        self.respond(data, Outcome::Created.status(), message)
    }

    /// 200 after a deletion.
    pub fn respond_deleted<T: Serialize>(&self, data: Option<T>, message: &str) -> Response {
        self.respond(data, Outcome::Deleted.status(), message)
    }

    /// 200 after an update.
    pub fn respond_updated<T: Serialize>(&self, data: Option<T>, message: &str) -> Response {
        self.respond(data, Outcome::Updated.status(), message)
    }

    /// 204 with a bare `{"code": 204}` envelope.
    pub fn respond_no_content(&self) -> Response {
        self.respond::<Value>(None, Outcome::NoContent.status(), "")
    }

    /// 401 with a fixed `Unauthorized` description.
    pub fn fail_unauthorized(&self) -> Response {
        self.fail::<Value>(Some("Unauthorized"), Outcome::Unauthorized.status(), None)
    }

    /// 403 with a fixed `Forbidden` description.
    pub fn fail_forbidden(&self) -> Response {
        self.fail::<Value>(Some("Forbidden"), Outcome::Forbidden.status(), None)
    }

    /// 404. Description defaults to `Not Found`, errors to an empty list.
    pub fn fail_not_found(&self, description: Option<&str>, errors: Option<Value>) -> Response {
        self.fail(
            description.or(Some("Not Found")),
            Outcome::ResourceNotFound.status(),
            errors.or_else(|| Some(json!([]))),
        )
    }

    /// 400 with a fixed `Bad Request` description; errors omitted when `None`.
    pub fn fail_validation_error(&self, errors: Option<Value>) -> Response {
        self.fail(Some("Bad Request"), Outcome::InvalidData.status(), errors)
    }

    /// 500. Description defaults to `Internal Server Error`.
    pub fn fail_server_error(&self, description: Option<&str>, errors: Option<Value>) -> Response {
        self.fail(
            description.or(Some("Internal Server Error")),
            Outcome::ServerError.status(),
            errors,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(resp: Response) -> Value {
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_respond_created_full_body() {
        let resp = Responder::new().respond_created(Some(json!({"id": 1})), "ok");
        assert_eq!(resp.status(), StatusCode::CREATED);
        assert_eq!(
            body_json(resp).await,
            json!({"code": 201, "message": "ok", "data": {"id": 1}})
        );
    }

    #[tokio::test]
    async fn test_respond_no_content() {
        let resp = Responder::new().respond_no_content();
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
        assert_eq!(body_json(resp).await, json!({"code": 204}));
    }

    #[tokio::test]
    async fn test_respond_preserves_zero_data() {
        let resp = Responder::new().respond(Some(0), StatusCode::OK, "");
        assert_eq!(body_json(resp).await, json!({"code": 200, "data": 0}));
    }

    #[tokio::test]
    async fn test_respond_deleted_and_updated_are_200() {
        let r = Responder::new();
        assert_eq!(
            r.respond_deleted::<Value>(None, "").status(),
            StatusCode::OK
        );
        assert_eq!(
            r.respond_updated::<Value>(None, "").status(),
            StatusCode::OK
        );
    }

    #[tokio::test]
    async fn test_fail_default_description() {
        let resp = Responder::new().fail::<Value>(None, StatusCode::BAD_REQUEST, None);
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(resp).await,
            json!({"code": 400, "description": "Error"})
        );
    }

    #[tokio::test]
    async fn test_fail_empty_description_is_omitted() {
        let resp = Responder::new().fail::<Value>(Some(""), StatusCode::BAD_REQUEST, None);
        assert_eq!(body_json(resp).await, json!({"code": 400}));
    }

    #[tokio::test]
    async fn test_fail_unauthorized_and_forbidden() {
        let r = Responder::new();

        let resp = r.fail_unauthorized();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            body_json(resp).await,
            json!({"code": 401, "description": "Unauthorized"})
        );

        let resp = r.fail_forbidden();
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
        assert_eq!(
            body_json(resp).await,
            json!({"code": 403, "description": "Forbidden"})
        );
    }

    #[tokio::test]
    async fn test_fail_not_found_defaults_include_empty_errors() {
        let resp = Responder::new().fail_not_found(None, None);
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(resp).await,
            json!({"code": 404, "description": "Not Found", "errors": []})
        );
    }

    #[tokio::test]
    async fn test_fail_validation_error_default_omits_errors() {
        let resp = Responder::new().fail_validation_error(None);
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(resp).await,
            json!({"code": 400, "description": "Bad Request"})
        );
    }

    #[tokio::test]
    async fn test_fail_validation_error_with_errors() {
        let errors = json!([{"field": "email", "message": "invalid"}]);
        let resp = Responder::new().fail_validation_error(Some(errors.clone()));
        assert_eq!(
            body_json(resp).await,
            json!({"code": 400, "description": "Bad Request", "errors": errors})
        );
    }

    #[tokio::test]
    async fn test_fail_server_error_default_description() {
        let resp = Responder::new().fail_server_error(None, None);
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(resp).await,
            json!({"code": 500, "description": "Internal Server Error"})
        );
    }
}
