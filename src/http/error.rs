//! Error types for the host HTTP primitives.

use thiserror::Error;

/// Errors raised by the request and response primitives.
#[derive(Debug, Error)]
pub enum Error {
    /// The method token is not one the dispatcher can route.
    #[error("Invalid HTTP method: {0}")]
    InvalidMethod(String),

    /// The numeric code is outside the 100..=599 range.
    #[error("Invalid HTTP status code: {0}")]
    InvalidStatusCode(u16),

    /// Error (de)serializing a JSON body.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}
