//! Host-side HTTP primitives.
//!
//! The dispatcher does no protocol parsing of its own. This module models the
//! small surface it needs from a host web server: the request method token,
//! URL and JSON body on the way in, and a status plus JSON body on the way out.

mod error;
mod method;
mod request;
mod response;

// Re-export public items
pub use error::Error;
pub use method::Method;
pub use request::HttpRequest;
pub use response::{HttpResponse, ResponseWriter, StatusCode};
