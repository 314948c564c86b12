use serde::Serialize;
use serde_json::Value;

use crate::error::ApiError;

/// Uniform response envelope. The body stays a JSON value here; encoding to
/// the transport wire format happens in the invocation shell.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: Value,
}

impl ApiResponse {
    /// 200 with the payload as the body.
    pub fn ok<T: Serialize>(payload: T) -> Result<Self, ApiError> {
        let body = serde_json::to_value(payload)
            .map_err(|e| ApiError::Upstream(format!("response encoding failed: {e}")))?;
        Ok(Self {
            status_code: 200,
            body,
        })
    }

    /// Plain message body with an explicit status code.
    pub fn message(status_code: u16, message: impl Into<String>) -> Self {
        Self {
            status_code,
            body: Value::String(message.into()),
        }
    }
}

impl From<&ApiError> for ApiResponse {
    fn from(err: &ApiError) -> Self {
        Self::message(err.status_code(), err.to_string())
    }
}
