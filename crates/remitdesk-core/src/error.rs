//! Error types for the remitdesk workspace.

use thiserror::Error;

/// A shared error type for local (non-HTTP) failures.
///
/// Storage, configuration and file format problems surface here. Failures that
/// cross the backend boundary are normalized into [`crate::ApiError`] instead.
#[derive(Error, Debug, Clone)]
pub enum RemitError {
    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON", etc.
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Session storage could not be read or written
    #[error("Storage error: {0}")]
    Storage(String),
}

impl RemitError {
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage(message.into())
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for RemitError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for RemitError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for RemitError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::ser::Error> for RemitError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion_keeps_kind() {
        let err: RemitError =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied").into();
        match err {
            RemitError::Io { message } => assert!(message.contains("PermissionDenied")),
            other => panic!("Expected Io error, got {:?}", other),
        }
    }

    #[test]
    fn test_toml_error_is_reported_as_serialization() {
        let err: RemitError = toml::from_str::<toml::Value>("api_url = ").unwrap_err().into();
        match &err {
            RemitError::Serialization { format, .. } => assert_eq!(format, "TOML"),
            other => panic!("Expected Serialization error, got {:?}", other),
        }
        assert!(err.to_string().starts_with("Serialization error: TOML"));
    }
}
