//! Outcome-name → HTTP status table.
//!
//! # Responsibilities
//! - Map symbolic outcome names (CREATED, RESOURCE_NOT_FOUND, ...) to status codes
//! - Parse outcome names from their wire spelling
//!
//! # Design Decisions
//! - Compile-time table (enum + const match), no runtime construction
//! - Several client-error names intentionally share a code (e.g. 400)
//! - `INVALID_CLIENTE` keeps its historical spelling; consumers match on it

use std::str::FromStr;

use axum::http::StatusCode;
use thiserror::Error;

/// A symbolic outcome name with a fixed HTTP status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Success,
    Created,
    Deleted,
    Updated,
    NoContent,
    InvalidRequest,
    UnsupportedResponseType,
    InvalidScope,
    InvalidGrant,
    InvalidCredentials,
    InvalidRefresh,
    NoData,
    InvalidData,
    AccessDenied,
    Unauthorized,
    InvalidCliente,
    Forbidden,
    ResourceNotFound,
    NotAcceptable,
    ResourceExists,
    Conflict,
    ResourceGone,
    PayloadTooLarge,
    UnsupportedMediaType,
    TooManyRequests,
    ServerError,
    UnsupportedGrantType,
    NotImplemented,
    TemporarilyUnavailable,
}

/// Returned when parsing an unknown outcome name.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown outcome name: {0}")]
pub struct UnknownOutcome(pub String);

impl Outcome {
    /// HTTP status code for this outcome.
    pub const fn status(self) -> StatusCode {
        match self {
            Outcome::Success | Outcome::Deleted | Outcome::Updated => StatusCode::OK,
            Outcome::Created => StatusCode::CREATED,
            Outcome::NoContent => StatusCode::NO_CONTENT,
            Outcome::InvalidRequest
            | Outcome::UnsupportedResponseType
            | Outcome::InvalidScope
            | Outcome::InvalidGrant
            | Outcome::InvalidCredentials
            | Outcome::InvalidRefresh
            | Outcome::NoData
            | Outcome::InvalidData => StatusCode::BAD_REQUEST,
            Outcome::AccessDenied | Outcome::Unauthorized | Outcome::InvalidCliente => {
                StatusCode::UNAUTHORIZED
            }
            Outcome::Forbidden => StatusCode::FORBIDDEN,
            Outcome::ResourceNotFound => StatusCode::NOT_FOUND,
            Outcome::NotAcceptable => StatusCode::NOT_ACCEPTABLE,
            Outcome::ResourceExists | Outcome::Conflict => StatusCode::CONFLICT,
            Outcome::ResourceGone => StatusCode::GONE,
            Outcome::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            Outcome::UnsupportedMediaType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            Outcome::TooManyRequests => StatusCode::TOO_MANY_REQUESTS,
            Outcome::ServerError => StatusCode::INTERNAL_SERVER_ERROR,
            Outcome::UnsupportedGrantType | Outcome::NotImplemented => {
                StatusCode::NOT_IMPLEMENTED
            }
            Outcome::TemporarilyUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    /// Numeric status code for this outcome.
    pub fn code(self) -> u16 {
        self.status().as_u16()
    }

    /// Wire spelling of the outcome name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Outcome::Success => "SUCCESS",
            Outcome::Created => "CREATED",
            Outcome::Deleted => "DELETED",
            Outcome::Updated => "UPDATED",
            Outcome::NoContent => "NO_CONTENT",
            Outcome::InvalidRequest => "INVALID_REQUEST",
            Outcome::UnsupportedResponseType => "UNSUPPORTED_RESPONSE_TYPE",
            Outcome::InvalidScope => "INVALID_SCOPE",
            Outcome::InvalidGrant => "INVALID_GRANT",
            Outcome::InvalidCredentials => "INVALID_CREDENTIALS",
            Outcome::InvalidRefresh => "INVALID_REFRESH",
            Outcome::NoData => "NO_DATA",
            Outcome::InvalidData => "INVALID_DATA",
            Outcome::AccessDenied => "ACCESS_DENIED",
            Outcome::Unauthorized => "UNAUTHORIZED",
            Outcome::InvalidCliente => "INVALID_CLIENTE",
            Outcome::Forbidden => "FORBIDDEN",
            Outcome::ResourceNotFound => "RESOURCE_NOT_FOUND",
            Outcome::NotAcceptable => "NOT_ACCEPTABLE",
            Outcome::ResourceExists => "RESOURCE_EXISTS",
            Outcome::Conflict => "CONFLICT",
            Outcome::ResourceGone => "RESOURCE_GONE",
            Outcome::PayloadTooLarge => "PAYLOAD_TOO_LARGE",
            Outcome::UnsupportedMediaType => "UNSUPPORTED_MEDIA_TYPE",
            Outcome::TooManyRequests => "TOO_MANY_REQUESTS",
            Outcome::ServerError => "SERVER_ERROR",
            Outcome::UnsupportedGrantType => "UNSUPPORTED_GRANT_TYPE",
            Outcome::NotImplemented => "NOT_IMPLEMENTED",
            Outcome::TemporarilyUnavailable => "TEMPORARILY_UNAVAILABLE",
        }
    }

    /// All outcomes, in table order.
    pub const ALL: [Outcome; 29] = [
        Outcome::Success,
        Outcome::Created,
        Outcome::Deleted,
        Outcome::Updated,
        Outcome::NoContent,
        Outcome::InvalidRequest,
        Outcome::UnsupportedResponseType,
        Outcome::InvalidScope,
        Outcome::InvalidGrant,
        Outcome::InvalidCredentials,
        Outcome::InvalidRefresh,
        Outcome::NoData,
        Outcome::InvalidData,
        Outcome::AccessDenied,
        Outcome::Unauthorized,
        Outcome::InvalidCliente,
        Outcome::Forbidden,
        Outcome::ResourceNotFound,
        Outcome::NotAcceptable,
        Outcome::ResourceExists,
        Outcome::Conflict,
        Outcome::ResourceGone,
        Outcome::PayloadTooLarge,
        Outcome::UnsupportedMediaType,
        Outcome::TooManyRequests,
        Outcome::ServerError,
        Outcome::UnsupportedGrantType,
        Outcome::NotImplemented,
        Outcome::TemporarilyUnavailable,
    ];
}

impl FromStr for Outcome {
    type Err = UnknownOutcome;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Outcome::ALL
            .iter()
            .copied()
            .find(|o| o.as_str() == s)
            .ok_or_else(|| UnknownOutcome(s.to_string()))
    }
}
