//! Error handling for the binding layer.
//!
//! Native calls themselves never report failure; every error here is raised
//! on the Rust side of the boundary before or after the native call.

use thiserror::Error;

/// Errors returned by wrapper operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SdkError {
    /// The wrapper's native handle has already been released.
    #[error("cannot access a disposed {type_name}")]
    Disposed {
        /// Entity name, e.g. `GuildChannel`.
        type_name: &'static str,
    },

    /// A required pointer argument was null.
    #[error("null pointer passed for argument: {name}")]
    NullArgument {
        /// Parameter name.
        name: &'static str,
    },

    /// Native returned text that is not valid UTF-8.
    #[error("invalid UTF-8 in {context}")]
    InvalidUtf8 {
        /// The field or call that produced the text.
        context: &'static str,
    },

    /// Native returned a discriminant this crate does not know.
    #[error("unknown {type_name} value: {value}")]
    UnknownEnumValue {
        /// Enum name.
        type_name: &'static str,
        /// Raw discriminant.
        value: i32,
    },

    /// Client configuration could not be read or parsed.
    #[error("invalid client configuration: {message}")]
    InvalidConfig {
        /// Underlying parse or I/O error.
        message: String,
    },
}

impl SdkError {
    /// Create a disposed-object error.
    pub fn disposed(type_name: &'static str) -> Self {
        Self::Disposed { type_name }
    }

    /// Create a null argument error.
    pub fn null_argument(name: &'static str) -> Self {
        Self::NullArgument { name }
    }

    /// Create an invalid UTF-8 error.
    pub fn invalid_utf8(context: &'static str) -> Self {
        Self::InvalidUtf8 { context }
    }

    /// Create a JSON parse error.
    pub fn json_parse(e: serde_json::Error) -> Self {
        Self::InvalidConfig {
            message: format!("JSON parse error: {e}"),
        }
    }

    /// Create a JSON serialization error.
    pub fn json_serialize(e: serde_json::Error) -> Self {
        Self::InvalidConfig {
            message: format!("JSON serialize error: {e}"),
        }
    }

    /// Create a configuration I/O error.
    pub fn config_io(e: std::io::Error) -> Self {
        Self::InvalidConfig {
            message: e.to_string(),
        }
    }

    /// Returns `true` for use-after-disposal errors.
    pub fn is_disposed(&self) -> bool {
        matches!(self, Self::Disposed { .. })
    }
}

/// Result alias used throughout the crate.
pub type Result<T, E = SdkError> = std::result::Result<T, E>;
