//! Error types for the registry client

use aws_sdk_ecr::error::{DisplayErrorContext, ProvideErrorMetadata};
use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when talking to the registry
#[derive(Debug, Error)]
pub enum ClientError {
    /// A registry API call failed (transport, permissions, throttling...)
    #[error("{operation} failed: {message}")]
    RequestFailed {
        /// Registry API operation name
        operation: &'static str,
        /// Service error code, when the registry returned one
        code: Option<String>,
        /// Full error chain as reported by the SDK
        message: String,
    },

    /// The request could not be built from the given arguments
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl ClientError {
    /// Wrap an SDK error raised by `operation`
    pub fn request_failed<E>(operation: &'static str, err: E) -> Self
    where
        E: ProvideErrorMetadata + std::error::Error,
    {
        Self::RequestFailed {
            operation,
            code: err.code().map(str::to_string),
            message: DisplayErrorContext(&err).to_string(),
        }
    }

    /// Service error code, if any
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::RequestFailed { code, .. } => code.as_deref(),
            Self::InvalidRequest(_) => None,
        }
    }

    /// Check if the registry rejected the call for lack of permissions
    pub fn is_access_denied(&self) -> bool {
        matches!(self.code(), Some("AccessDeniedException"))
    }
}
