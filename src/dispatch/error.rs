//! Error types for the dispatcher.

use thiserror::Error;

/// Error type handlers may fail with; anything implementing `std::error::Error` converts via `?`.
pub type HandlerError = Box<dyn std::error::Error + Send + Sync>;

/// Errors that can occur while dispatching.
#[derive(Debug, Error)]
pub enum Error {
    /// No logger was configured on the dispatcher.
    #[error("No logger object was provided")]
    LoggerUnavailable,

    /// The logger rejected a message.
    #[error("Logger error: {0}")]
    LoggerFailed(String),

    /// The logger panicked while handling a message.
    #[error("Logger panicked: {0}")]
    LoggerPanicked(String),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}
