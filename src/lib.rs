//! Standardized JSON response envelopes for axum services.
//!
//! # Data Flow
//! ```text
//! Handler decides an outcome
//!     → responder.rs (named method per outcome)
//!     → outcome.rs (name → status code table)
//!     → envelope.rs (success/error body shape)
//!     → axum response (status + JSON body)
//! ```
//!
//! # Usage
//! ```no_run
//! use axum::{middleware::from_fn, routing::post, Router};
//! use axum::response::Response;
//! use axum_envelope::{attach, Responder};
//! use serde_json::json;
//!
//! async fn create_user(responder: Responder) -> Response {
//!     responder.respond_created(Some(json!({"id": 1})), "created")
//! }
//!
//! let app: Router = Router::new()
//!     .route("/users", post(create_user))
//!     .layer(from_fn(attach));
//! ```

pub mod envelope;
pub mod error;
pub mod middleware;
pub mod outcome;
pub mod responder;

pub use envelope::{ErrorEnvelope, SuccessEnvelope};
pub use error::ApiError;
pub use middleware::attach;
pub use outcome::Outcome;
pub use responder::Responder;
