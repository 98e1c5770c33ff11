//! Symbol error types.

use std::fmt;

/// Symbol-related errors.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SymbolError {
    /// The pair did not split into exactly two non-empty tokens.
    MalformedPair(String),

    /// Empty pair string.
    EmptySymbol,
}

impl fmt::Display for SymbolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedPair(raw) => {
                write!(f, "Malformed pair '{raw}': expected two coins joined by '-', '_' or '/'")
            }
            Self::EmptySymbol => write!(f, "Symbol string is empty"),
        }
    }
}

impl std::error::Error for SymbolError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert!(
            SymbolError::MalformedPair("BTC".to_string())
                .to_string()
                .contains("'BTC'")
        );
        assert_eq!(SymbolError::EmptySymbol.to_string(), "Symbol string is empty");
    }
}
