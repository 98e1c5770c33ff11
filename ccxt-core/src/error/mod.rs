//! # Error Handling
//!
//! Every fallible operation in the adapter returns [`Result<T>`]. The public,
//! best-effort operations of an exchange collapse these errors into `None`
//! at their own boundary (after logging), while the `try_*` variants hand the
//! typed error back to the caller.
//!
//! ## Error Hierarchy
//!
//! ```text
//! Error
//! ├── Exchange        - Vendor error envelope (code + message)
//! ├── Network         - Transport failures (via NetworkError)
//! ├── Timeout         - Request exceeded its deadline
//! ├── Parse           - Unexpected payload shape (via ParseError)
//! ├── Symbol          - Pair string that is not exactly two tokens
//! ├── Authentication  - Missing or rejected credentials
//! ├── InvalidRequest  - Invalid parameters
//! ├── NotImplemented  - Operation outside the adapter's capabilities
//! └── Context         - Error with additional context
//! ```
//!
//! The three failure families the adapter distinguishes internally map as:
//!
//! | Family | Variants |
//! |--------|----------|
//! | transport | `Network`, `Timeout`, `Exchange`, `Authentication` |
//! | malformed response | `Parse` |
//! | malformed pair | `Symbol` |
//!
//! ## Example
//!
//! ```rust
//! use ccxt_core::error::{ContextExt, Error, Result};
//!
//! fn load(pair: &str) -> Result<()> {
//!     if pair.is_empty() {
//!         return Err(Error::invalid_request("pair cannot be empty"));
//!     }
//!     Ok(())
//! }
//!
//! let err = load("").context("Failed to load orders").unwrap_err();
//! assert!(err.report().contains("pair cannot be empty"));
//! ```

mod context;
mod convert;
mod details;
mod network;
mod parse;

use std::borrow::Cow;
use std::error::Error as StdError;
use thiserror::Error;

pub(crate) use convert::excerpt;
pub use context::ContextExt;
pub use details::ExchangeErrorDetails;
pub use network::NetworkError;
pub use parse::ParseError;

pub use crate::symbol::SymbolError;

/// Result type alias for all adapter operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The primary error type.
///
/// Large variants are boxed so the enum stays small enough to be moved
/// around cheaply through `?`.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error envelope returned by the exchange API.
    #[error("Exchange error: {0}")]
    Exchange(Box<ExchangeErrorDetails>),

    /// Network-related errors encapsulating transport layer issues.
    #[error("Network error: {0}")]
    Network(Box<NetworkError>),

    /// Operation timeout.
    #[error("Timeout: {0}")]
    Timeout(Cow<'static, str>),

    /// The response did not have the expected shape.
    #[error("Parse error: {0}")]
    Parse(Box<ParseError>),

    /// A trading pair string could not be normalized.
    #[error("Symbol error: {0}")]
    Symbol(#[from] SymbolError),

    /// Authentication errors (missing key, rejected signature).
    #[error("Authentication error: {0}")]
    Authentication(Cow<'static, str>),

    /// Invalid request parameters.
    #[error("Invalid request: {0}")]
    InvalidRequest(Cow<'static, str>),

    /// Feature not supported by this exchange.
    #[error("Not implemented: {0}")]
    NotImplemented(Cow<'static, str>),

    /// Error with additional context, preserving the error chain.
    #[error("{context}")]
    Context {
        /// Context message describing what operation failed
        context: String,
        /// The underlying error
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Creates a new exchange error.
    ///
    /// ```rust
    /// use ccxt_core::error::Error;
    ///
    /// let err = Error::exchange("10001", "Invalid signature");
    /// assert!(err.to_string().contains("10001"));
    /// ```
    pub fn exchange(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Exchange(Box::new(ExchangeErrorDetails::new(code, message)))
    }

    /// Creates a new exchange error with raw response data.
    pub fn exchange_with_data(
        code: impl Into<String>,
        message: impl Into<String>,
        data: serde_json::Value,
    ) -> Self {
        Self::Exchange(Box::new(ExchangeErrorDetails::with_data(
            code, message, data,
        )))
    }

    /// Creates a network error from a message.
    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(Box::new(NetworkError::ConnectionFailed(msg.into())))
    }

    /// Creates a timeout error.
    pub fn timeout(msg: impl Into<Cow<'static, str>>) -> Self {
        Self::Timeout(msg.into())
    }

    /// Creates an authentication error.
    pub fn authentication(msg: impl Into<Cow<'static, str>>) -> Self {
        Self::Authentication(msg.into())
    }

    /// Creates an invalid request error.
    pub fn invalid_request(msg: impl Into<Cow<'static, str>>) -> Self {
        Self::InvalidRequest(msg.into())
    }

    /// Creates a not implemented error.
    pub fn not_implemented(feature: impl Into<Cow<'static, str>>) -> Self {
        Self::NotImplemented(feature.into())
    }

    /// Creates a malformed pair error for the given raw input.
    pub fn malformed_pair(raw: impl Into<String>) -> Self {
        Self::Symbol(SymbolError::MalformedPair(raw.into()))
    }

    /// Attaches context to an existing error.
    #[must_use]
    pub fn context(self, context: impl Into<String>) -> Self {
        Self::Context {
            context: context.into(),
            source: Box::new(self),
        }
    }

    fn iter_chain(&self) -> impl Iterator<Item = &Error> {
        std::iter::successors(Some(self), |err| match err {
            Error::Context { source, .. } => Some(source.as_ref()),
            _ => None,
        })
    }

    /// Returns the root cause of the error, skipping Context layers.
    #[must_use]
    pub fn root_cause(&self) -> &Error {
        self.iter_chain().last().unwrap_or(self)
    }

    /// Generates a report with the full `Caused by:` chain.
    #[must_use]
    pub fn report(&self) -> String {
        use std::fmt::Write;
        let mut report = self.to_string();

        let mut current: Option<&(dyn StdError + 'static)> = self.source();
        while let Some(err) = current {
            let _ = write!(report, "\nCaused by: {err}");
            current = err.source();
        }
        report
    }

    /// Returns `true` when the root cause is a transport-level failure.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(
            self.root_cause(),
            Error::Network(_) | Error::Timeout(_) | Error::Exchange(_) | Error::Authentication(_)
        )
    }

    /// Returns `true` when the root cause is an unexpected payload shape.
    #[must_use]
    pub fn is_malformed_response(&self) -> bool {
        matches!(self.root_cause(), Error::Parse(_))
    }

    /// Returns `true` when the root cause is a pair that failed to normalize.
    #[must_use]
    pub fn is_malformed_pair(&self) -> bool {
        matches!(self.root_cause(), Error::Symbol(_))
    }
}
