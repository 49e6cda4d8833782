//! The host request view handed to the dispatcher.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::http::error::Error;

/// Represents an HTTP request as delivered by the host server.
///
/// The method is kept as the raw token the host saw (it may be absent), since
/// deciding whether it is routable is the dispatcher's job.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// The raw HTTP method token, if the host provided one
    pub method: Option<String>,
    /// The request target
    pub url: String,
    /// The request body, already decoded by the host
    pub body: Value,
}

impl HttpRequest {
    /// Create a new request with the given method token and URL.
    ///
    /// # Arguments
    ///
    /// * `method` - The method token as sent by the client
    /// * `url` - The request target
    ///
    /// # Returns
    ///
    /// A new request with a `null` body
    pub fn new(method: impl Into<String>, url: impl Into<String>) -> Self {
        let mut request = Self::without_method(url);
        request.method = Some(method.into());
        request
    }

    /// Create a request for which the host reported no method token.
    pub fn without_method(url: impl Into<String>) -> Self {
        Self {
            method: None,
            url: url.into(),
            body: Value::Null,
        }
    }

    /// Set the request body.
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = body;
        self
    }

    /// The method token lowercased, or `None` when it is absent or empty.
    ///
    /// Surrounding whitespace is kept, so a padded token never matches a verb.
    pub fn normalized_method(&self) -> Option<String> {
        self.method
            .as_deref()
            .filter(|token| !token.is_empty())
            .map(str::to_lowercase)
    }

    /// The method token as the host reported it, for log lines.
    pub fn method_label(&self) -> &str {
        self.method.as_deref().unwrap_or("<none>")
    }

    /// Deserialize the request body into a typed value.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, Error> {
        let value = T::deserialize(&self.body)?;
        Ok(value)
    }
}
