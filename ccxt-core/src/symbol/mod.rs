//! Trading pair normalization.
//!
//! Users spell pairs in several ways (`btc-usdt`, `BTC_USDT`, `Btc/Usdt`).
//! [`PairCodec`] folds all of them into a single [`CanonicalPair`] carrying
//! every representation the adapter needs:
//!
//! | Field | Example | Used for |
//! |-------|---------|----------|
//! | `pair` | `btc_usdt` | vendor requests |
//! | `pair_readable` | `BTC/USDT` | market catalog key, order symbol |
//! | `pair_plain` | `BTC_USDT` | order `symbol_plain` |
//! | `coin1` / `coin2` | `BTC` / `USDT` | per-coin query parameters |
//!
//! ```rust
//! use ccxt_core::symbol::{CanonicalPair, PairCodec};
//!
//! let a = PairCodec::normalize("btc-usdt").unwrap();
//! let b: CanonicalPair = "Btc/Usdt".parse().unwrap();
//! assert_eq!(a, b);
//! ```

mod codec;
mod error;

pub use codec::{CanonicalPair, PAIR_SEPARATORS, PairCodec};
pub use error::SymbolError;
