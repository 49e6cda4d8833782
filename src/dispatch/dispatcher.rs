//! The dispatcher and the routes it builds.

use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use futures::FutureExt;
use serde_json::Value;

use crate::dispatch::config::DispatcherOptions;
use crate::dispatch::error::Error;
use crate::dispatch::handler::{HandlerFn, MethodHandlers};
use crate::dispatch::logger::{log_guarded, panic_message, LogLevel};
use crate::dispatch::outcome::Outcome;
use crate::http::{HttpRequest, Method, ResponseWriter};

const MISSING_METHOD: &str = "No method was provided in the request";

/// Builds request-handling [`Route`]s from handler tables.
///
/// A dispatcher is created once at startup and shared by every route it builds.
#[derive(Debug, Clone, Default)]
pub struct Dispatcher {
    options: Arc<DispatcherOptions>,
}

impl Dispatcher {
    /// Create a dispatcher with the given options.
    pub fn new(options: DispatcherOptions) -> Self {
        Self {
            options: Arc::new(options),
        }
    }

    /// The options this dispatcher was created with.
    pub fn options(&self) -> &DispatcherOptions {
        &self.options
    }

    /// Build the request-handling route for one endpoint.
    pub fn build_route(&self, handlers: MethodHandlers) -> Route {
        Route {
            dispatcher: self.clone(),
            handlers: Arc::new(handlers),
        }
    }

    /// Log through the configured logger. Never fails and never panics.
    pub fn log(&self, level: LogLevel, message: &str) {
        log_guarded(self.options.logger.as_deref(), level, message);
    }
}

/// A request-handling function for one endpoint.
///
/// Cloning is cheap; clones share the handler table.
#[derive(Debug, Clone)]
pub struct Route {
    dispatcher: Dispatcher,
    handlers: Arc<MethodHandlers>,
}

impl Route {
    /// Handle one request, writing to `response` at most once.
    ///
    /// Always returns normally: unroutable methods become a 400, handler
    /// errors and panics become a 500.
    pub async fn handle(&self, request: &HttpRequest, response: &mut dyn ResponseWriter) {
        let body = serde_json::to_string(&request.body).unwrap_or_else(|e| format!("<unserializable: {e}>"));
        self.dispatcher.log(
            LogLevel::Debug,
            &format!("Request received: {} {} | Body: {body}", request.method_label(), request.url),
        );

        let Some(token) = request.normalized_method() else {
            self.dispatcher.log(LogLevel::Warn, MISSING_METHOD);
            return self.respond(request, response, &Outcome::bad_request(MISSING_METHOD));
        };

        let Some(handler) = self.resolve(&token) else {
            let message = format!("No handler was provided for the method: {token}");
            self.dispatcher.log(LogLevel::Warn, &message);
            return self.respond(request, response, &Outcome::bad_request(message));
        };

        let outcome = match invoke(handler, request, &mut *response).await {
            Ok(outcome) => outcome,
            Err(detail) => {
                self.dispatcher
                    .log(LogLevel::Error, &format!("Error while handling request: {detail}"));
                Some(Outcome::internal_server_error())
            }
        };

        // The handler wrote the response itself.
        let Some(outcome) = outcome else {
            return;
        };

        self.respond(request, response, &outcome);
    }

    /// The handler table's host-framework configuration.
    pub fn config(&self) -> Option<&Value> {
        self.handlers.config()
    }

    /// The methods this route serves.
    pub fn methods(&self) -> Vec<Method> {
        self.handlers.methods()
    }

    fn resolve(&self, token: &str) -> Option<&HandlerFn> {
        let method = token.parse::<Method>().ok()?;
        self.handlers.handler(method)
    }

    fn respond(&self, request: &HttpRequest, response: &mut dyn ResponseWriter, outcome: &Outcome) {
        let status = outcome.status_code();
        if outcome.is_success() {
            self.dispatcher.log(
                LogLevel::Debug,
                &format!(
                    "Request ({} {}) successfully resolved with status code: {status}",
                    request.method_label(),
                    request.url
                ),
            );
        } else {
            self.dispatcher.log(
                LogLevel::Warn,
                &format!("Request ({} {}) failed with status code: {status}", request.method_label(), request.url),
            );
        }

        let body = match outcome_body(outcome) {
            Ok(body) => body,
            Err(e) => {
                self.dispatcher
                    .log(LogLevel::Error, &format!("Failed to serialize response body: {e}"));
                serde_json::json!({
                    "success": false,
                    "statusCode": status.as_u16(),
                })
            }
        };

        response.status(status);
        response.json(body);
    }
}

/// Run the handler, turning an `Err` or a panic (while calling it or while
/// polling its future) into a description of what went wrong.
async fn invoke(
    handler: &HandlerFn,
    request: &HttpRequest,
    response: &mut dyn ResponseWriter,
) -> Result<Option<Outcome>, String> {
    // The call happens on first poll, so one catch covers both panic sites.
    let future = async move { handler(request, response).await };

    match AssertUnwindSafe(future).catch_unwind().await {
        Ok(Ok(outcome)) => Ok(outcome),
        Ok(Err(e)) => Err(e.to_string()),
        Err(payload) => Err(panic_message(payload.as_ref())),
    }
}

fn outcome_body(outcome: &Outcome) -> Result<Value, Error> {
    Ok(serde_json::to_value(outcome)?)
}
