//! Method handlers and the per-endpoint handler table.

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use serde_json::Value;

use crate::dispatch::error::HandlerError;
use crate::dispatch::outcome::Outcome;
use crate::http::{HttpRequest, Method, ResponseWriter};

/// What a handler resolves to. `Ok(None)` means the handler already wrote the response itself.
pub type HandlerResult = Result<Option<Outcome>, HandlerError>;

/// Type alias for the boxed future a handler returns, borrowing the request and response.
pub type HandlerFuture<'a> = Pin<Box<dyn Future<Output = HandlerResult> + Send + 'a>>;

/// Type alias for a handler function that takes the request and response and returns a HandlerFuture.
pub type HandlerFn =
    Arc<dyn for<'a> Fn(&'a HttpRequest, &'a mut dyn ResponseWriter) -> HandlerFuture<'a> + Send + Sync>;

/// The handlers for one endpoint, one optional slot per method.
///
/// ```
/// use microdispatch_rs::{MethodHandlers, Outcome};
/// use serde_json::json;
///
/// let handlers = MethodHandlers::new()
///     .get(|_req, _res| Box::pin(async move { Ok(Some(Outcome::ok(json!([])))) }))
///     .with_config(json!({"bodyParser": false}));
/// assert!(handlers.config().is_some());
/// ```
#[derive(Clone, Default)]
pub struct MethodHandlers {
    get: Option<HandlerFn>,
    post: Option<HandlerFn>,
    put: Option<HandlerFn>,
    patch: Option<HandlerFn>,
    delete: Option<HandlerFn>,
    config: Option<Value>,
}

impl MethodHandlers {
    /// Create an empty handler table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` for `method`, replacing any previous one.
    pub fn on<F>(mut self, method: Method, handler: F) -> Self
    where
        F: for<'a> Fn(&'a HttpRequest, &'a mut dyn ResponseWriter) -> HandlerFuture<'a> + Send + Sync + 'static,
    {
        *self.slot_mut(method) = Some(Arc::new(handler));
        self
    }

    /// Register `handler` for GET requests.
    pub fn get<F>(self, handler: F) -> Self
    where
        F: for<'a> Fn(&'a HttpRequest, &'a mut dyn ResponseWriter) -> HandlerFuture<'a> + Send + Sync + 'static,
    {
        self.on(Method::GET, handler)
    }

    /// Register `handler` for POST requests.
    pub fn post<F>(self, handler: F) -> Self
    where
        F: for<'a> Fn(&'a HttpRequest, &'a mut dyn ResponseWriter) -> HandlerFuture<'a> + Send + Sync + 'static,
    {
        self.on(Method::POST, handler)
    }

    /// Register `handler` for PUT requests.
    pub fn put<F>(self, handler: F) -> Self
    where
        F: for<'a> Fn(&'a HttpRequest, &'a mut dyn ResponseWriter) -> HandlerFuture<'a> + Send + Sync + 'static,
    {
        self.on(Method::PUT, handler)
    }

    /// Register `handler` for PATCH requests.
    pub fn patch<F>(self, handler: F) -> Self
    where
        F: for<'a> Fn(&'a HttpRequest, &'a mut dyn ResponseWriter) -> HandlerFuture<'a> + Send + Sync + 'static,
    {
        self.on(Method::PATCH, handler)
    }

    /// Register `handler` for DELETE requests.
    pub fn delete<F>(self, handler: F) -> Self
    where
        F: for<'a> Fn(&'a HttpRequest, &'a mut dyn ResponseWriter) -> HandlerFuture<'a> + Send + Sync + 'static,
    {
        self.on(Method::DELETE, handler)
    }

    /// Attach host-framework configuration. The dispatcher never reads it.
    pub fn with_config(mut self, config: Value) -> Self {
        self.config = Some(config);
        self
    }

    /// The handler registered for `method`, if any.
    pub fn handler(&self, method: Method) -> Option<&HandlerFn> {
        match method {
            Method::GET => self.get.as_ref(),
            Method::POST => self.post.as_ref(),
            Method::PUT => self.put.as_ref(),
            Method::PATCH => self.patch.as_ref(),
            Method::DELETE => self.delete.as_ref(),
        }
    }

    /// The methods that have a handler, in table order.
    pub fn methods(&self) -> Vec<Method> {
        Method::ALL
            .into_iter()
            .filter(|method| self.handler(*method).is_some())
            .collect()
    }

    /// The host-framework configuration, if any.
    pub fn config(&self) -> Option<&Value> {
        self.config.as_ref()
    }

    fn slot_mut(&mut self, method: Method) -> &mut Option<HandlerFn> {
        match method {
            Method::GET => &mut self.get,
            Method::POST => &mut self.post,
            Method::PUT => &mut self.put,
            Method::PATCH => &mut self.patch,
            Method::DELETE => &mut self.delete,
        }
    }
}

impl fmt::Debug for MethodHandlers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MethodHandlers")
            .field("methods", &self.methods())
            .field("config", &self.config)
            .finish()
    }
}
