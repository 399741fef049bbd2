//! Common error types for the enquiry services
//!
//! One taxonomy shared by both entry points so a validation failure, a
//! duplicate, a bad credential, and a store failure always map to the same
//! HTTP status regardless of hosting model.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Common result type for enquiry operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error taxonomy for the intake core
#[derive(Error, Debug)]
pub enum Error {
    /// Missing or malformed client input (deterministic, never retried unchanged)
    #[error("{0}")]
    Validation(String),

    /// Duplicate submission - expected outcome on re-submit, not a fault
    #[error("Already submitted")]
    Conflict,

    /// Dashboard credentials did not match
    #[error("Invalid username or password")]
    Auth,

    /// Backing store unavailable or query failure (transient, no internal retry)
    #[error("Store error: {0}")]
    Store(String),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<sqlx::Error> for Error {
    fn from(e: sqlx::Error) -> Self {
        Error::Store(e.to_string())
    }
}

impl Error {
    /// HTTP status for this error, used by both the axum responder and the
    /// function adapter's response envelope.
    pub fn status(&self) -> StatusCode {
        match self {
            Error::Validation(_) => StatusCode::BAD_REQUEST,
            Error::Conflict => StatusCode::CONFLICT,
            Error::Auth => StatusCode::UNAUTHORIZED,
            Error::Store(_) | Error::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-facing message. Store and config details stay in the logs;
    /// the wire gets a generic failure line.
    pub fn public_message(&self) -> String {
        match self {
            Error::Store(_) | Error::Config(_) => "Failed to process request".to_string(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status();

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("request failed: {}", self);
        }

        let body = Json(json!({
            "error": self.public_message(),
        }));

        (status, body).into_response()
    }
}
