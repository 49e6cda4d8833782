//! Per-method request dispatch.
//!
//! A [`Dispatcher`] turns a [`MethodHandlers`] table into a [`Route`]: one
//! async request-handling function that picks the handler for the request's
//! method, contains its failures, and writes its [`Outcome`] as JSON.

mod config;
mod dispatcher;
mod error;
mod handler;
mod logger;
mod outcome;

// Re-export public items
pub use config::DispatcherOptions;
pub use dispatcher::{Dispatcher, Route};
pub use error::{Error, HandlerError};
pub use handler::{HandlerFn, HandlerFuture, HandlerResult, MethodHandlers};
pub use logger::{LogFacade, LogLevel, Logger};
pub use outcome::Outcome;
