//! Logging capability and the best-effort guard around it.

use std::any::Any;
use std::fmt;
use std::io::Write;
use std::panic::{self, AssertUnwindSafe};

use chrono::{SecondsFormat, Utc};

use crate::dispatch::error::Error;

/// The four severities the dispatcher logs at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// The lowercase level name.
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A logging sink owned by the caller.
///
/// Implementations may fail or even panic; the dispatcher tolerates both.
pub trait Logger: Send + Sync {
    /// Log a debug message.
    fn debug(&self, message: &str) -> Result<(), Error>;

    /// Log an informational message.
    fn info(&self, message: &str) -> Result<(), Error>;

    /// Log a warning.
    fn warn(&self, message: &str) -> Result<(), Error>;

    /// Log an error.
    fn error(&self, message: &str) -> Result<(), Error>;
}

/// A [`Logger`] that forwards to the `log` crate facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogFacade;

const TARGET: &str = "microdispatch";

impl Logger for LogFacade {
    fn debug(&self, message: &str) -> Result<(), Error> {
        log::debug!(target: TARGET, "{message}");
        Ok(())
    }

    fn info(&self, message: &str) -> Result<(), Error> {
        log::info!(target: TARGET, "{message}");
        Ok(())
    }

    fn warn(&self, message: &str) -> Result<(), Error> {
        log::warn!(target: TARGET, "{message}");
        Ok(())
    }

    fn error(&self, message: &str) -> Result<(), Error> {
        log::error!(target: TARGET, "{message}");
        Ok(())
    }
}

/// Send `message` to `logger` at `level`, never failing.
///
/// A missing logger, an `Err` from the sink, or a panic inside it all end up
/// on stderr with a timestamp.
pub(crate) fn log_guarded(logger: Option<&dyn Logger>, level: LogLevel, message: &str) {
    if let Err(cause) = try_log(logger, level, message) {
        write_fallback(&mut std::io::stderr().lock(), level, message, &cause);
    }
}

/// Call the sink for `level`, turning a missing sink or a panic into an `Err`.
pub(crate) fn try_log(logger: Option<&dyn Logger>, level: LogLevel, message: &str) -> Result<(), Error> {
    let logger = logger.ok_or(Error::LoggerUnavailable)?;
    panic::catch_unwind(AssertUnwindSafe(|| match level {
        LogLevel::Debug => logger.debug(message),
        LogLevel::Info => logger.info(message),
        LogLevel::Warn => logger.warn(message),
        LogLevel::Error => logger.error(message),
    }))
    .unwrap_or_else(|payload| Err(Error::LoggerPanicked(panic_message(payload.as_ref()))))
}

/// Write the timestamped diagnostic line and its cause to `out`.
///
/// Write errors are dropped; the fallback channel may itself be closed.
pub(crate) fn write_fallback(out: &mut impl Write, level: LogLevel, message: &str, cause: &Error) {
    let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
    let _ = writeln!(
        out,
        "[{timestamp}] (ERROR): Failed to log a message using the provided logger object: [{level}] {message}"
    );
    let _ = writeln!(out, "{cause}");
}

/// Render a panic payload the way it was raised, if it was a string.
pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
