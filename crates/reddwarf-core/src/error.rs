//! Unified error handling for reddwarf-core
//!
//! Every fallible operation in the core (building value objects, converting a
//! parameter bag into a typed request, binding a payload) reports a
//! [`CoreError`]. Callers can classify an error with the `is_*` helpers
//! instead of matching on variants.
//!
//! # Example
//!
//! ```rust
//! use reddwarf_core::{CoreError, Database};
//!
//! let err = Database::builder().build().unwrap_err();
//! assert!(err.is_bad_request());
//! assert!(!err.is_invalid_usage());
//! ```

use derive_builder::UninitializedFieldError;
use thiserror::Error;

/// Core error type for the binding layer
#[derive(Error, Debug)]
pub enum CoreError {
    /// A binder was asked to bind something other than a parameter bag
    #[error("{operation} is a {method} operation and only binds a parameter bag")]
    UnsupportedBinding {
        operation: &'static str,
        method: &'static str,
    },

    /// A required field was never set on a builder
    #[error("{0} required")]
    MissingField(String),

    /// A field was set to a value the model rejects
    #[error("Validation error: {0}")]
    Validation(String),

    /// A parameter bag selected a request shape but lacks one of its keys
    #[error("Missing parameter '{0}'")]
    MissingParameter(String),

    /// A parameter bag entry holds the wrong kind of value
    #[error("Parameter '{key}' must be {expected}")]
    InvalidParameter { key: String, expected: &'static str },

    /// Payload could not be serialized
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, CoreError>;

impl From<UninitializedFieldError> for CoreError {
    fn from(err: UninitializedFieldError) -> Self {
        CoreError::MissingField(err.field_name().to_string())
    }
}

impl From<validator::ValidationErrors> for CoreError {
    fn from(err: validator::ValidationErrors) -> Self {
        CoreError::Validation(err.to_string())
    }
}

impl CoreError {
    /// Returns true if the caller violated a binder contract
    pub fn is_invalid_usage(&self) -> bool {
        matches!(self, CoreError::UnsupportedBinding { .. })
    }

    /// Returns true if the input itself was unacceptable
    pub fn is_bad_request(&self) -> bool {
        matches!(
            self,
            CoreError::MissingField(_)
                | CoreError::Validation(_)
                | CoreError::MissingParameter(_)
                | CoreError::InvalidParameter { .. }
        )
    }
}
