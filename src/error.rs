//! SDK error type — one shape for HTTP and transport failures.

use serde_json::Value;
use thiserror::Error;

/// Fallback message when an error payload carries no `message` field.
pub const GENERIC_FAILURE: &str = "API request failed";

/// Error raised for any failed backend interaction.
///
/// HTTP failures (non-success status) carry the status code and the decoded
/// error payload. Transport failures (connection error, a body that is not
/// JSON) carry neither, only a message derived from the underlying error.
/// Callers get the same shape either way and branch on [`ApiError::status`].
#[derive(Error, Debug)]
#[error("{message}")]
pub struct ApiError {
    /// The payload's `message` field, the underlying transport error, or
    /// [`GENERIC_FAILURE`].
    pub message: String,
    /// HTTP status code; `None` for transport failures.
    pub status: Option<u16>,
    /// Full decoded error payload; `None` for transport failures.
    pub payload: Option<Value>,
}

impl ApiError {
    /// Build from a non-success response, taking the message from the
    /// payload's `message` field when present.
    pub fn http(status: u16, payload: Value) -> Self {
        let message = payload
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or(GENERIC_FAILURE)
            .to_string();
        Self {
            message,
            status: Some(status),
            payload: Some(payload),
        }
    }

    /// Build from a failure that produced no usable response.
    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: None,
            payload: None,
        }
    }

    /// The backend answered with a non-success status.
    pub fn is_http(&self) -> bool {
        self.status.is_some()
    }

    /// The request never produced a decodable response.
    pub fn is_transport(&self) -> bool {
        self.status.is_none()
    }
}

#[cfg(feature = "http")]
impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        Self::transport(e.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        Self::transport(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_http_error_takes_payload_message() {
        let err = ApiError::http(403, json!({"message": "Yetkisiz erişim", "code": 7}));
        assert_eq!(err.message, "Yetkisiz erişim");
        assert_eq!(err.status, Some(403));
        assert_eq!(err.payload, Some(json!({"message": "Yetkisiz erişim", "code": 7})));
        assert!(err.is_http());
    }

    #[test]
    fn test_http_error_without_message_uses_fallback() {
        let err = ApiError::http(500, json!({"error": "internal"}));
        assert_eq!(err.message, GENERIC_FAILURE);
        assert_eq!(err.status, Some(500));
    }

    #[test]
    fn test_non_string_message_uses_fallback() {
        let err = ApiError::http(400, json!({"message": 42}));
        assert_eq!(err.message, GENERIC_FAILURE);
    }

    #[test]
    fn test_transport_error_has_no_status_or_payload() {
        let err = ApiError::transport("connection refused");
        assert_eq!(err.message, "connection refused");
        assert_eq!(err.status, None);
        assert_eq!(err.payload, None);
        assert!(err.is_transport());
    }

    #[test]
    fn test_display_is_the_message() {
        let err = ApiError::http(404, json!({"message": "not found"}));
        assert_eq!(err.to_string(), "not found");
    }
}
