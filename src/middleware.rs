//! Responder installation for axum routers.
//!
//! # Responsibilities
//! - Install a [`Responder`] into request extensions and run the continuation
//! - Let handlers extract a [`Responder`] whether or not the layer is present
//!
//! # Design Decisions
//! - Two explicit entry points instead of a nullable callback: layer `attach`
//!   to install-then-continue, or call `Responder::new` to build one directly
//! - Extraction is infallible; a missing extension falls back to a fresh value

use std::convert::Infallible;

use axum::extract::{FromRequestParts, Request};
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::Response;

use crate::responder::Responder;

/// Middleware step: install a [`Responder`] for this request, then continue.
///
/// Layer it with `axum::middleware::from_fn(attach)`. Handlers downstream can
/// take `Responder` as an extractor argument.
pub async fn attach(mut req: Request, next: Next) -> Response {
    req.extensions_mut().insert(Responder::new());
    next.run(req).await
}

impl<S> FromRequestParts<S> for Responder
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(parts
            .extensions
            .get::<Responder>()
            .copied()
            .unwrap_or_default())
    }
}
