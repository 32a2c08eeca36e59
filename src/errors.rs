//! Error types for the paylane-rs library.
//!
//! Every fatal outcome of a PayLane call is one of the variants below. A response
//! body that cannot be decoded is not an error; see [`crate::types::PaymentResponse`].

use thiserror::Error;

/// Main error type for PayLane operations.
#[derive(Error, Debug)]
pub enum PayLaneError {
    /// The client could not be constructed (missing credentials, HTTP backend unavailable)
    #[error("Precondition failed: {0}")]
    PreconditionFailed(String),

    /// Bad operation name or HTTP verb passed to the dispatcher
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// Request parameters could not be serialized to JSON
    #[error("Encoding error: {0}")]
    EncodingError(#[from] serde_json::Error),

    /// The request never produced an HTTP response
    #[error("Unable to connect to {url} Error: {message}")]
    TransportError {
        /// Target URL of the failed request
        url: String,
        /// Diagnostic from the transport layer
        message: String,
    },

    /// The server answered with one of the recognized error statuses
    #[error("Response Http Error - {phrase}")]
    RemoteHttpError {
        /// Numeric HTTP status
        code: u16,
        /// Canonical phrase, e.g. "401 Unauthorized"
        phrase: &'static str,
    },
}

impl PayLaneError {
    /// Returns the HTTP status code for [`PayLaneError::RemoteHttpError`].
    pub fn status_code(&self) -> Option<u16> {
        match self {
            PayLaneError::RemoteHttpError { code, .. } => Some(*code),
            _ => None,
        }
    }
}

/// Result type alias for PayLane operations.
pub type Result<T> = std::result::Result<T, PayLaneError>;
