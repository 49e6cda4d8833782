//! A minimal per-method request dispatcher for HTTP handlers.
//!
//! Given one incoming request, a [`Route`] picks the handler registered for the
//! request's method, runs it, and writes its [`Outcome`] back as a JSON body
//! with the matching status code. Path routing, connections and middleware are
//! left to the host server.
//!
//! # Features
//!
//! - Closed set of routable methods (GET, POST, PUT, PATCH, DELETE)
//! - 400 responses for requests with a missing or unregistered method
//! - Handler errors and panics contained as a generic 500 response
//! - Handlers may write the response themselves and return `None`
//! - Pluggable, best-effort logging that can never break a request
//!
//! # Examples
//!
//! ## Building a route
//!
//! ```
//! use microdispatch_rs::{
//!     Dispatcher, DispatcherOptions, HttpRequest, HttpResponse, LogFacade, MethodHandlers, Outcome,
//!     StatusCode,
//! };
//! use serde_json::json;
//!
//! let dispatcher = Dispatcher::new(DispatcherOptions::default().with_logger(LogFacade));
//!
//! let route = dispatcher.build_route(
//!     MethodHandlers::new()
//!         .get(|_req, _res| Box::pin(async move { Ok(Some(Outcome::ok(json!({"items": []})))) }))
//!         .post(|req, _res| {
//!             Box::pin(async move {
//!                 if req.body.get("name").is_none() {
//!                     return Ok(Some(Outcome::bad_request("name is required")));
//!                 }
//!                 Ok(Some(Outcome::created(req.body.clone())))
//!             })
//!         }),
//! );
//!
//! let request = HttpRequest::new("POST", "/items").with_body(json!({"name": "lamp"}));
//! let mut response = HttpResponse::default();
//! futures::executor::block_on(route.handle(&request, &mut response));
//!
//! assert_eq!(response.status, StatusCode::CREATED);
//! assert_eq!(
//!     response.json_body().unwrap(),
//!     json!({"success": true, "statusCode": 201, "data": {"name": "lamp"}})
//! );
//! ```
//!
//! ## Unregistered methods
//!
//! ```
//! use microdispatch_rs::{Dispatcher, HttpRequest, HttpResponse, MethodHandlers, StatusCode};
//!
//! let route = Dispatcher::default().build_route(MethodHandlers::new());
//! let mut response = HttpResponse::default();
//! futures::executor::block_on(route.handle(&HttpRequest::new("GET", "/"), &mut response));
//!
//! assert_eq!(response.status, StatusCode::BAD_REQUEST);
//! ```
//!
//! See the `demos` directory for a runnable example.

// Export the host HTTP primitives
pub mod http;

// Export the dispatcher
pub mod dispatch;

// Re-export commonly used items for convenience
pub use dispatch::{
    Dispatcher, DispatcherOptions, Error as DispatchError, HandlerError, HandlerFn, HandlerFuture,
    HandlerResult, LogFacade, LogLevel, Logger, MethodHandlers, Outcome, Route,
};
pub use http::{Error as HttpError, HttpRequest, HttpResponse, Method, ResponseWriter, StatusCode};
