//! Network-related error types.

use std::error::Error as StdError;
use thiserror::Error;

/// Transport failures, without leaking `reqwest` types into the public API.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum NetworkError {
    /// Request failed with HTTP status code.
    #[error("Request failed with status {status}: {message}")]
    RequestFailed {
        /// HTTP status code
        status: u16,
        /// Error message
        message: String,
    },

    /// Request timed out.
    #[error("Request timeout")]
    Timeout,

    /// Connection failed.
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Response body exceeded the configured size limit.
    #[error("Response too large: {size} bytes (limit {limit})")]
    ResponseTooLarge {
        /// Bytes received so far
        size: usize,
        /// Configured limit
        limit: usize,
    },

    /// Opaque transport error for anything else.
    #[error("Transport error")]
    Transport(#[source] Box<dyn StdError + Send + Sync + 'static>),
}
