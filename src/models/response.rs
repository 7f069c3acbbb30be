//! Response envelope shared by every endpoint.

use serde::Serialize;
use serde_json::Value;

use crate::errors::ErrorCode;

/// `{ "code": ..., "data": ..., "message": ... }`
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Response {
    pub code: ErrorCode,
    pub data: Value,
    pub message: String,
}

impl Response {
    /// Success envelope carrying `data`.
    pub fn success(data: impl Serialize) -> Self {
        Self {
            code: ErrorCode::Success,
            data: serde_json::to_value(data).unwrap_or(Value::Null),
            message: ErrorCode::Success.message().to_string(),
        }
    }

    /// Error envelope with the code's predefined message.
    pub fn error(code: ErrorCode) -> Self {
        Self {
            code,
            data: Value::Null,
            message: code.message().to_string(),
        }
    }

    /// Error envelope with a custom message.
    pub fn error_with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            data: Value::Null,
            message: message.into(),
        }
    }
}
