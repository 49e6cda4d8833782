//! The value a handler resolves to.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::http::StatusCode;

/// What a handler produced, written to the client as
/// `{"success": .., "statusCode": .., "message"?: .., "data"?: ..}`.
///
/// The variant decides whether the dispatcher takes the success or the failure
/// path. It is not checked against the status code, so a `Success` carrying a
/// 500 is written as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "OutcomeBody", from = "OutcomeBody")]
pub enum Outcome {
    /// The request was handled.
    Success {
        status_code: StatusCode,
        data: Option<Value>,
        message: Option<String>,
    },
    /// The request was refused or could not be completed.
    Failure {
        status_code: StatusCode,
        message: Option<String>,
        data: Option<Value>,
    },
}

impl Outcome {
    /// A successful outcome with no payload.
    pub fn success(status_code: StatusCode) -> Self {
        Outcome::Success {
            status_code,
            data: None,
            message: None,
        }
    }

    /// A 200 carrying `data`.
    pub fn ok(data: Value) -> Self {
        Self::success(StatusCode::OK).with_data(data)
    }

    /// A 201 carrying `data`.
    pub fn created(data: Value) -> Self {
        Self::success(StatusCode::CREATED).with_data(data)
    }

    /// A failed outcome with a message for the client.
    pub fn failure(status_code: StatusCode, message: impl Into<String>) -> Self {
        Outcome::Failure {
            status_code,
            message: Some(message.into()),
            data: None,
        }
    }

    /// A 400 with a message for the client.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::failure(StatusCode::BAD_REQUEST, message)
    }

    /// The generic 500 written when a handler fails.
    pub fn internal_server_error() -> Self {
        Self::failure(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
    }

    /// Attach a message.
    pub fn with_message(mut self, text: impl Into<String>) -> Self {
        match &mut self {
            Outcome::Success { message, .. } | Outcome::Failure { message, .. } => {
                *message = Some(text.into());
            }
        }
        self
    }

    /// Attach a payload.
    pub fn with_data(mut self, payload: Value) -> Self {
        match &mut self {
            Outcome::Success { data, .. } | Outcome::Failure { data, .. } => {
                *data = Some(payload);
            }
        }
        self
    }

    /// Whether the dispatcher takes the success path for this outcome.
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success { .. })
    }

    /// The status the response is written with.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Outcome::Success { status_code, .. } | Outcome::Failure { status_code, .. } => *status_code,
        }
    }

    /// The message for the client, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            Outcome::Success { message, .. } | Outcome::Failure { message, .. } => message.as_deref(),
        }
    }

    /// The payload, if any. An explicit JSON `null` payload is `Some(&Value::Null)`.
    pub fn data(&self) -> Option<&Value> {
        match self {
            Outcome::Success { data, .. } | Outcome::Failure { data, .. } => data.as_ref(),
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct OutcomeBody {
    success: bool,
    status_code: StatusCode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    // A present `null` stays `Some(Value::Null)`; only an absent key is `None`.
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    data: Option<Value>,
}

fn present<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Value>, D::Error> {
    Value::deserialize(deserializer).map(Some)
}

impl From<Outcome> for OutcomeBody {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Success { status_code, data, message } => OutcomeBody {
                success: true,
                status_code,
                message,
                data,
            },
            Outcome::Failure { status_code, message, data } => OutcomeBody {
                success: false,
                status_code,
                message,
                data,
            },
        }
    }
}

impl From<OutcomeBody> for Outcome {
    fn from(body: OutcomeBody) -> Self {
        let OutcomeBody { success, status_code, message, data } = body;
        if success {
            Outcome::Success { status_code, data, message }
        } else {
            Outcome::Failure { status_code, message, data }
        }
    }
}
