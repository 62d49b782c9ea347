//! Shared Error Types
//!
//! Errors that can occur independently of any backend: validating form input.
//!
//! # Usage
//!
//! ```rust
//! use userdesk::shared::error::SharedError;
//!
//! let error = SharedError::validation("phone", "Please enter a valid 10-digit phone number.");
//! assert!(error.to_string().contains("phone"));
//! ```
use thiserror::Error;

/// Shared error types
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// Field validation error
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Name of the field that failed
    pub fn field(&self) -> &str {
        match self {
            Self::ValidationError { field, .. } => field,
        }
    }

    /// Message shown next to the field
    pub fn message(&self) -> &str {
        match self {
            Self::ValidationError { message, .. } => message,
        }
    }
}
