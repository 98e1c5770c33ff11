//! Errors raised while reading vendor payloads.

use std::borrow::Cow;
use thiserror::Error;

/// A FameEX payload did not have the shape the adapter reads.
///
/// ```rust
/// use ccxt_core::error::{Error, ParseError, Result};
///
/// fn orders(envelope: &serde_json::Value) -> Result<&Vec<serde_json::Value>> {
///     envelope["data"]["orders"]
///         .as_array()
///         .ok_or_else(|| Error::from(ParseError::unexpected_shape("data.orders", "an array")))
/// }
///
/// assert!(orders(&serde_json::json!({"data": {}})).is_err());
/// ```
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ParseError {
    /// The response body is not JSON at all.
    #[error("Body is not JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A field the adapter needs is absent or null.
    #[error("Missing field '{0}'")]
    MissingField(Cow<'static, str>),

    /// A field is present but its value is unusable.
    #[error("Bad value in '{field}': {message}")]
    InvalidValue {
        /// Field name
        field: Cow<'static, str>,
        /// What was wrong with it
        message: Cow<'static, str>,
    },

    /// A section of the envelope has the wrong JSON type.
    #[error("Expected {expected} at '{path}'")]
    UnexpectedShape {
        /// Dotted path into the envelope
        path: Cow<'static, str>,
        /// Description of the expected JSON type
        expected: &'static str,
    },
}

impl ParseError {
    /// `MissingField` for a key known at compile time.
    #[must_use]
    pub fn missing_field(field: &'static str) -> Self {
        Self::MissingField(Cow::Borrowed(field))
    }

    /// `MissingField` for a path built at runtime.
    #[must_use]
    pub fn missing_field_owned(field: String) -> Self {
        Self::MissingField(Cow::Owned(field))
    }

    /// `InvalidValue` for `field`.
    pub fn invalid_value(
        field: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::InvalidValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// `UnexpectedShape` at `path`, e.g. `("data", "an array of markets")`.
    pub fn unexpected_shape(path: impl Into<Cow<'static, str>>, expected: &'static str) -> Self {
        Self::UnexpectedShape {
            path: path.into(),
            expected,
        }
    }
}
