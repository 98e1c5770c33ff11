//! Context attachment for `Result` and `Option`.

use crate::error::{Error, Result};
use std::fmt;

/// Extension trait for attaching context to failures.
///
/// ```rust
/// use ccxt_core::error::{ContextExt, Result};
///
/// fn total(envelope: &serde_json::Value) -> Result<u64> {
///     envelope["data"]["total"]
///         .as_u64()
///         .context("transaction details without a total")
/// }
///
/// assert!(total(&serde_json::json!({"data": {"total": 3}})).is_ok());
/// ```
pub trait ContextExt<T, E> {
    /// Adds context to an error.
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;

    /// Adds lazily built context to an error.
    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C;
}

impl<T, E> ContextExt<T, E> for std::result::Result<T, E>
where
    E: Into<Error>,
{
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|e| e.into().context(context.to_string()))
    }

    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C,
    {
        self.map_err(|e| e.into().context(f().to_string()))
    }
}

// A missing value in a vendor payload is a shape problem, so `None`
// becomes a parse error rather than a generic one.
impl<T> ContextExt<T, Error> for Option<T> {
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.ok_or_else(|| {
            Error::from(crate::error::ParseError::missing_field_owned(
                context.to_string(),
            ))
        })
    }

    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C,
    {
        self.ok_or_else(|| {
            Error::from(crate::error::ParseError::missing_field_owned(
                f().to_string(),
            ))
        })
    }
}
