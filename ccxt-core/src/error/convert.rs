//! Conversions into [`Error`].

use crate::error::{Error, NetworkError, ParseError};

/// Longest text, in characters, carried into an error message.
pub(crate) const MAX_EXCERPT_CHARS: usize = 512;

/// One-line excerpt of `text` for error messages.
///
/// Gateway failure pages in front of the API are multi-line HTML, so
/// whitespace runs collapse to a single space before the cut.
pub(crate) fn excerpt(text: &str) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    match collapsed.char_indices().nth(MAX_EXCERPT_CHARS) {
        Some((cut, _)) => format!("{}...", &collapsed[..cut]),
        None => collapsed,
    }
}

impl From<NetworkError> for Error {
    fn from(e: NetworkError) -> Self {
        Error::Network(Box::new(e))
    }
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Error::Parse(Box::new(e))
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        ParseError::Json(e).into()
    }
}

impl From<reqwest::Error> for NetworkError {
    fn from(e: reqwest::Error) -> Self {
        match e.status() {
            Some(status) => NetworkError::RequestFailed {
                status: status.as_u16(),
                message: excerpt(&e.to_string()),
            },
            None if e.is_timeout() => NetworkError::Timeout,
            None if e.is_connect() => NetworkError::ConnectionFailed(excerpt(&e.to_string())),
            None => NetworkError::Transport(Box::new(e)),
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        NetworkError::from(e).into()
    }
}
