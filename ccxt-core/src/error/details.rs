//! Vendor error envelope details.

use serde_json::Value;

/// Code and message from a vendor error envelope.
///
/// Boxed inside [`Error::Exchange`](super::Error::Exchange).
#[derive(Debug)]
#[non_exhaustive]
pub struct ExchangeErrorDetails {
    /// Error code as returned by the vendor (numeric codes are stringified).
    pub code: String,
    /// Descriptive message from the vendor.
    pub message: String,
    /// Raw envelope, kept for debugging.
    pub data: Option<Value>,
}

impl ExchangeErrorDetails {
    /// Creates details from a code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            data: None,
        }
    }

    /// Creates details that also carry the raw response.
    pub fn with_data(code: impl Into<String>, message: impl Into<String>, data: Value) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            data: Some(data),
        }
    }
}

impl std::fmt::Display for ExchangeErrorDetails {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)
    }
}
