//! Shared Error Types
//!
//! Errors raised while turning untrusted request input into typed values.
//! They carry a client-safe message; the backend maps every variant to
//! `400 Bad Request`.
//!
//! # Error Categories
//!
//! - `SerializationError` - the body was not valid JSON for the expected shape
//! - `ValidationError` - a field was missing, blank, or violated a rule
//!
//! # Usage
//!
//! ```rust
//! use recordbook::shared::error::SharedError;
//!
//! let error = SharedError::validation("password", "Password must be at least 6 characters");
//! assert_eq!(error.client_message(), "Password must be at least 6 characters");
//! ```
use thiserror::Error;

/// Input errors shared by every request schema
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// JSON serialization or deserialization error
    #[error("Serialization error: {message}")]
    SerializationError {
        /// Human-readable error message
        message: String,
    },

    /// Data validation error
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::SerializationError {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// The message that is safe to show to API callers.
    ///
    /// Unlike `Display`, this omits the field prefix and any parser detail.
    pub fn client_message(&self) -> &str {
        match self {
            Self::SerializationError { .. } => "Invalid request body",
            Self::ValidationError { message, .. } => message,
        }
    }
}

impl From<serde_json::Error> for SharedError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(format!("JSON error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let error = SharedError::validation("email", "Please provide a valid email");
        match error {
            SharedError::ValidationError { field, message } => {
                assert_eq!(field, "email");
                assert_eq!(message, "Please provide a valid email");
            }
            _ => panic!("Expected ValidationError"),
        }
    }

    #[test]
    fn test_client_message_hides_field_prefix() {
        let error = SharedError::validation("title", "Please provide title and description");
        assert_eq!(error.client_message(), "Please provide title and description");
        assert!(error.to_string().contains("'title'"));
    }

    #[test]
    fn test_from_serde_error_hides_parser_detail() {
        let result: Result<serde_json::Value, _> = serde_json::from_str("{ invalid json }");
        let shared_error: SharedError = result.unwrap_err().into();

        assert!(matches!(shared_error, SharedError::SerializationError { .. }));
        assert_eq!(shared_error.client_message(), "Invalid request body");
    }
}
