//! HTTP request methods.

use std::fmt;
use std::str::FromStr;

use crate::http::error::Error;

/// The closed set of HTTP methods a handler table can serve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// GET method: Requests a representation of the specified resource.
    GET,
    /// POST method: Submits data to be processed to the identified resource.
    POST,
    /// PUT method: Replaces all current representations of the target resource with the request payload.
    PUT,
    /// PATCH method: Applies partial modifications to a resource.
    PATCH,
    /// DELETE method: Deletes the specified resource.
    DELETE,
}

impl Method {
    /// All routable methods, in handler table order.
    pub const ALL: [Method; 5] = [
        Method::GET,
        Method::POST,
        Method::PUT,
        Method::PATCH,
        Method::DELETE,
    ];

    /// The lowercase token used as the handler table key.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::GET => "get",
            Method::POST => "post",
            Method::PUT => "put",
            Method::PATCH => "patch",
            Method::DELETE => "delete",
        }
    }
}

// Tokens are matched case-insensitively; hosts are not consistent about casing.
impl FromStr for Method {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Method::ALL
            .into_iter()
            .find(|method| method.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::InvalidMethod(s.to_string()))
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}
