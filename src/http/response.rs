//! HTTP response types and utilities.

use std::fmt;
use log::error;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::http::error::Error;

/// An HTTP status code in the 100..=599 range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StatusCode(u16);

impl StatusCode {
    pub const OK: StatusCode = StatusCode(200);
    pub const CREATED: StatusCode = StatusCode(201);
    pub const ACCEPTED: StatusCode = StatusCode(202);
    pub const NO_CONTENT: StatusCode = StatusCode(204);
    pub const BAD_REQUEST: StatusCode = StatusCode(400);
    pub const UNAUTHORIZED: StatusCode = StatusCode(401);
    pub const FORBIDDEN: StatusCode = StatusCode(403);
    pub const NOT_FOUND: StatusCode = StatusCode(404);
    pub const METHOD_NOT_ALLOWED: StatusCode = StatusCode(405);
    pub const CONFLICT: StatusCode = StatusCode(409);
    pub const UNPROCESSABLE_ENTITY: StatusCode = StatusCode(422);
    pub const INTERNAL_SERVER_ERROR: StatusCode = StatusCode(500);
    pub const NOT_IMPLEMENTED: StatusCode = StatusCode(501);
    pub const BAD_GATEWAY: StatusCode = StatusCode(502);
    pub const SERVICE_UNAVAILABLE: StatusCode = StatusCode(503);

    /// Validate a numeric status code.
    pub fn from_u16(code: u16) -> Result<Self, Error> {
        if (100..=599).contains(&code) {
            Ok(StatusCode(code))
        } else {
            Err(Error::InvalidStatusCode(code))
        }
    }

    /// The numeric code.
    pub const fn as_u16(&self) -> u16 {
        self.0
    }

    /// Whether the code is in the 2xx range.
    pub const fn is_success(&self) -> bool {
        self.0 >= 200 && self.0 < 300
    }
}

impl TryFrom<u16> for StatusCode {
    type Error = Error;

    fn try_from(code: u16) -> Result<Self, Self::Error> {
        StatusCode::from_u16(code)
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for StatusCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u16(self.0)
    }
}

impl<'de> Deserialize<'de> for StatusCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = u16::deserialize(deserializer)?;
        StatusCode::from_u16(code).map_err(serde::de::Error::custom)
    }
}

/// The response primitives a host must offer the dispatcher.
///
/// Handlers receive the same writer, so a handler that needs a non-JSON
/// response can write to it directly and return `None`.
pub trait ResponseWriter: Send {
    /// Set the response status.
    fn status(&mut self, status: StatusCode);

    /// Write `body` as the JSON response body.
    fn json(&mut self, body: Value);
}

/// A buffered response, for hosts (and tests) that collect the dispatcher's output.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// The HTTP status code
    pub status: StatusCode,
    /// The content type of the body, once one was written
    pub content_type: Option<String>,
    /// The response body
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Create a new HTTP response with the given status code.
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            content_type: None,
            body: Vec::new(),
        }
    }

    /// Parse the body back into a JSON value.
    pub fn json_body(&self) -> Result<Value, Error> {
        Ok(serde_json::from_slice(&self.body)?)
    }
}

impl Default for HttpResponse {
    fn default() -> Self {
        Self::new(StatusCode::OK)
    }
}

impl ResponseWriter for HttpResponse {
    fn status(&mut self, status: StatusCode) {
        self.status = status;
    }

    fn json(&mut self, body: Value) {
        match serde_json::to_vec(&body) {
            Ok(json) => {
                self.content_type = Some("application/json".to_string());
                self.body = json;
            }
            Err(e) => error!("Failed to serialize response body: {e}"),
        }
    }
}
