//! Wire envelope and normalized error shape for the admin API.
//!
//! Every failure that reaches caller code, whether it came from a local
//! validation check, the transport, or the backend, is an [`ApiError`] with a
//! readable `message`. UI-facing code only ever needs to read that field.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

pub const SESSION_EXPIRED_MESSAGE: &str = "Session expired. Please login again.";
pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please check your connection.";
pub const TIMEOUT_MESSAGE: &str = "Request timeout. Please try again.";
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred";

/// Response envelope used by the backend and the simulators alike.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    #[serde(default)]
    pub error: bool,
    pub data: Option<T>,
    #[serde(default)]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default)]
    pub errors: Vec<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
}

impl<T> ApiResponse<T> {
    /// A successful response carrying `data`.
    pub fn success(data: T, message: impl Into<String>, status: u16) -> Self {
        Self {
            error: false,
            data: Some(data),
            message: message.into(),
            token: None,
            errors: Vec::new(),
            status: Some(status),
            total: None,
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }
}

/// Classification of a normalized failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiErrorKind {
    /// Input rejected locally or by a simulator before any state changed.
    Validation,
    /// The backend answered 401/403 and the session was torn down.
    SessionExpired,
    /// No response was received.
    Network,
    /// The connection was aborted or timed out.
    Timeout,
    /// The backend answered with an error status and (maybe) a body.
    Rejected,
    /// A success response whose body did not match the expected shape.
    Decode,
}

/// The single failure shape handed to callers.
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct ApiError {
    pub kind: ApiErrorKind,
    /// HTTP status, `None` when no response was received.
    pub status: Option<u16>,
    pub message: String,
    pub data: Option<Value>,
    pub errors: Vec<Value>,
}

impl ApiError {
    pub fn new(kind: ApiErrorKind, status: Option<u16>, message: impl Into<String>) -> Self {
        Self {
            kind,
            status,
            message: message.into(),
            data: None,
            errors: Vec::new(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::Validation, Some(400), message)
    }

    pub fn session_expired(status: u16) -> Self {
        Self::new(ApiErrorKind::SessionExpired, Some(status), SESSION_EXPIRED_MESSAGE)
            .with_errors(vec![Value::from("Session expired")])
    }

    pub fn network(detail: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::Network, None, NETWORK_ERROR_MESSAGE)
            .with_errors(vec![Value::from(detail.into())])
    }

    pub fn timeout(detail: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::Timeout, None, TIMEOUT_MESSAGE)
            .with_errors(vec![Value::from(detail.into())])
    }

    pub fn rejected(status: u16, message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::Rejected, Some(status), message)
    }

    pub fn not_found(entity: &str, id: &str) -> Self {
        Self::rejected(404, format!("{} '{}' not found", entity, id))
    }

    /// Builds a `Rejected` error from a backend error body.
    ///
    /// `message` and `errors` are read from the JSON body when present;
    /// otherwise the generic text is used.
    pub fn from_body(status: u16, body: Option<Value>) -> Self {
        let message = body
            .as_ref()
            .and_then(|b| b.get("message"))
            .and_then(Value::as_str)
            .filter(|m| !m.is_empty())
            .unwrap_or(GENERIC_ERROR_MESSAGE)
            .to_string();
        let errors = body
            .as_ref()
            .and_then(|b| b.get("errors"))
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_else(|| vec![Value::from(GENERIC_ERROR_MESSAGE)]);

        Self {
            kind: ApiErrorKind::Rejected,
            status: Some(status),
            message,
            data: body,
            errors,
        }
    }

    pub fn with_errors(mut self, errors: Vec<Value>) -> Self {
        self.errors = errors;
        self
    }

    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    /// True when no response was received from the backend.
    pub fn is_no_response(&self) -> bool {
        self.status.is_none()
    }

    pub fn is_session_expired(&self) -> bool {
        self.kind == ApiErrorKind::SessionExpired
    }
}

/// A type alias for `Result<T, ApiError>`.
pub type ApiResult<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_body_reads_message_and_errors() {
        let body = json!({"message": "KYC already approved", "errors": ["duplicate"]});
        let err = ApiError::from_body(409, Some(body.clone()));

        assert_eq!(err.kind, ApiErrorKind::Rejected);
        assert_eq!(err.status, Some(409));
        assert_eq!(err.message, "KYC already approved");
        assert_eq!(err.errors, vec![json!("duplicate")]);
        assert_eq!(err.data, Some(body));
    }

    #[test]
    fn test_from_body_falls_back_to_generic_text() {
        let err = ApiError::from_body(500, None);
        assert_eq!(err.message, GENERIC_ERROR_MESSAGE);
        assert_eq!(err.errors, vec![json!(GENERIC_ERROR_MESSAGE)]);
        assert!(err.data.is_none());

        let err = ApiError::from_body(500, Some(json!({"message": ""})));
        assert_eq!(err.message, GENERIC_ERROR_MESSAGE);
    }

    #[test]
    fn test_network_error_has_no_status() {
        let err = ApiError::network("dns failure");
        assert!(err.is_no_response());
        assert_eq!(err.to_string(), NETWORK_ERROR_MESSAGE);
    }

    #[test]
    fn test_envelope_accepts_missing_optional_fields() {
        let parsed: ApiResponse<Vec<u32>> =
            serde_json::from_value(json!({"data": [1, 2, 3]})).unwrap();
        assert!(!parsed.error);
        assert_eq!(parsed.data, Some(vec![1, 2, 3]));
        assert!(parsed.token.is_none());
    }
}
