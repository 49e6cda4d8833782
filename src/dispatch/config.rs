//! Dispatcher configuration.

use std::fmt;
use std::sync::Arc;

use crate::dispatch::logger::Logger;

/// Dispatcher configuration.
///
/// The default configuration has no logger; every log line then goes to the
/// stderr fallback.
#[derive(Clone, Default)]
pub struct DispatcherOptions {
    /// The logging sink. Owned by the caller, shared with the dispatcher.
    pub logger: Option<Arc<dyn Logger>>,
    /// Reserved. Stored and exposed, but does not change dispatch behavior.
    pub require_session_by_default: bool,
}

impl DispatcherOptions {
    /// Set the logging sink.
    pub fn with_logger(mut self, logger: impl Logger + 'static) -> Self {
        self.logger = Some(Arc::new(logger));
        self
    }

    /// Set a logging sink that is already shared elsewhere.
    pub fn with_shared_logger(mut self, logger: Arc<dyn Logger>) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Set the reserved `require_session_by_default` flag.
    pub fn with_require_session_by_default(mut self, require: bool) -> Self {
        self.require_session_by_default = require;
        self
    }
}

impl fmt::Debug for DispatcherOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DispatcherOptions")
            .field("logger", &self.logger.as_ref().map(|_| "<logger>"))
            .field("require_session_by_default", &self.require_session_by_default)
            .finish()
    }
}
