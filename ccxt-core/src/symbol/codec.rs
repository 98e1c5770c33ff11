//! Pair codec implementation
//!
//! Converts user supplied pair strings into the canonical representations
//! the rest of the crate works with.

use super::error::SymbolError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Separators accepted between the two coins of a pair.
pub const PAIR_SEPARATORS: [char; 3] = ['-', '_', '/'];

/// A normalized trading pair.
///
/// All spellings of the same two coins (`btc-usdt`, `BTC_USDT`, `Btc/Usdt`)
/// normalize to an identical value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalPair {
    /// Vendor spelling, lowercase and underscore joined (`btc_usdt`).
    pub pair: String,
    /// Human readable form (`BTC/USDT`). Key of the market catalog.
    pub pair_readable: String,
    /// Plain form (`BTC_USDT`).
    pub pair_plain: String,
    /// First coin, uppercase.
    pub coin1: String,
    /// Second coin, uppercase.
    pub coin2: String,
}

impl CanonicalPair {
    /// Builds the canonical pair from two already uppercased coins.
    fn from_coins(coin1: String, coin2: String) -> Self {
        Self {
            pair: format!("{}_{}", coin1.to_lowercase(), coin2.to_lowercase()),
            pair_readable: format!("{coin1}/{coin2}"),
            pair_plain: format!("{coin1}_{coin2}"),
            coin1,
            coin2,
        }
    }
}

impl fmt::Display for CanonicalPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pair_readable)
    }
}

impl FromStr for CanonicalPair {
    type Err = SymbolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PairCodec::normalize(s)
    }
}

/// Pair codec.
///
/// Stateless; every method is a pure function.
pub struct PairCodec;

impl PairCodec {
    /// Normalizes a raw pair string.
    ///
    /// The input is uppercased and split on `-`, `_` or `/`. Exactly two
    /// non-empty tokens must result.
    ///
    /// # Errors
    ///
    /// Returns [`SymbolError::EmptySymbol`] for blank input and
    /// [`SymbolError::MalformedPair`] for anything that is not two tokens.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ccxt_core::symbol::PairCodec;
    ///
    /// let pair = PairCodec::normalize("btc-usdt").unwrap();
    /// assert_eq!(pair.pair_readable, "BTC/USDT");
    /// assert_eq!(pair.pair_plain, "BTC_USDT");
    /// assert_eq!(pair.pair, "btc_usdt");
    /// ```
    pub fn normalize(raw: &str) -> Result<CanonicalPair, SymbolError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(SymbolError::EmptySymbol);
        }

        let upper = trimmed.to_uppercase();
        let mut tokens = upper.split(PAIR_SEPARATORS);
        match (tokens.next(), tokens.next(), tokens.next()) {
            (Some(coin1), Some(coin2), None) if !coin1.is_empty() && !coin2.is_empty() => Ok(
                CanonicalPair::from_coins(coin1.to_string(), coin2.to_string()),
            ),
            _ => Err(SymbolError::MalformedPair(raw.to_string())),
        }
    }

    /// Normalizes a pair and returns only its readable form.
    ///
    /// # Errors
    ///
    /// Same as [`PairCodec::normalize`].
    pub fn readable(raw: &str) -> Result<String, SymbolError> {
        Self::normalize(raw).map(|p| p.pair_readable)
    }

    /// Returns `true` if the string normalizes.
    pub fn is_valid(raw: &str) -> bool {
        Self::normalize(raw).is_ok()
    }
}
