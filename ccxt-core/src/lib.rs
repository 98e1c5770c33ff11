//! CCXT Core Library
//!
//! Vendor-neutral building blocks for exchange adapters: canonical records,
//! the trading pair codec, catalog caching, error types, HTTP transport and
//! the exchange trait hierarchy.
//!
//! # Features
//!
//! - **Precision**: Uses `rust_decimal::Decimal` for all amounts and prices
//! - **Async/Await**: Built on tokio
//! - **Error Handling**: Structured error types with `thiserror`
//!
//! # Example
//!
//! ```rust
//! use ccxt_core::prelude::*;
//!
//! # fn example() -> Result<()> {
//! let pair = PairCodec::normalize("btc-usdt")?;
//! assert_eq!(pair.pair_readable, "BTC/USDT");
//! assert_eq!(pair.pair_plain, "BTC_USDT");
//!
//! let market = MarketMetadata::new("BTC", "USDT", 6, 2);
//! assert_eq!(market.coin2_precision, rust_decimal_macros::dec!(0.01));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
// =============================================================================
// Global Clippy Lint Suppressions
// =============================================================================
// - module_name_repetitions: Common pattern in Rust libraries (e.g., OrderType in order module)
// - missing_errors_doc: Too verbose to document every Result-returning function
// - missing_panics_doc: Too verbose to document every potential panic
// - must_use_candidate: Not all return values need #[must_use]
// - doc_markdown: Technical terms in docs don't need backticks (e.g., HMAC)
// - similar_names: Trading terminology requires similar names (coin1/coin2, buy/sell)
// - cast_sign_loss / cast_possible_wrap: Common in timestamp operations (i64 <-> u64)
// - return_self_not_must_use: Builder pattern methods return Self without must_use
// =============================================================================
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::similar_names)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::return_self_not_must_use)]

// Re-exports of external dependencies
pub use rust_decimal;
pub use serde;
pub use serde_json;

// Core modules
pub mod auth;
pub mod base_exchange;
pub mod capability;
pub mod config;
pub mod credentials;
pub mod error;
pub mod http_client;
pub mod logging;
pub mod parser_utils;
pub mod symbol;
/// Exchange trait hierarchy
pub mod traits;
pub mod types;

// Re-exports of core types for convenience
pub use base_exchange::{
    BaseExchange, Catalog, CatalogLoad, ExchangeConfig, ExchangeConfigBuilder, MetadataCache,
    RefreshPolicy,
};
pub use capability::{Capabilities, Capability};
pub use credentials::SecretString;
pub use error::{ContextExt, Error, ExchangeErrorDetails, NetworkError, ParseError, Result};
pub use symbol::{CanonicalPair, PairCodec, SymbolError};
pub use traits::{Account, FullExchange, MarketData, PublicExchange, Trading};
pub use types::{
    BalanceEntry, CurrencyMap, CurrencyMetadata, MarketMap, MarketMetadata, Order, OrderSide,
    OrderStatus, OrderType, Snapshot, Timestamp,
};

/// Prelude module for convenient imports
///
/// Import everything you need with:
/// ```rust
/// use ccxt_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::auth::{hmac_sign, signing_payload};
    pub use crate::base_exchange::{
        BaseExchange, CatalogLoad, ExchangeConfig, ExchangeConfigBuilder, MetadataCache,
        RefreshPolicy,
    };
    pub use crate::capability::{Capabilities, Capability};
    pub use crate::config::ProxyConfig;
    pub use crate::credentials::SecretString;
    pub use crate::error::{ContextExt, Error, Result};
    pub use crate::http_client::{HttpClient, HttpConfig};
    pub use crate::logging::{LogConfig, LogFormat, LogLevel, init_logging, try_init_logging};
    pub use crate::symbol::{CanonicalPair, PairCodec, SymbolError};
    pub use crate::traits::{
        Account, ArcFullExchange, BoxedFullExchange, FullExchange, MarketData, PublicExchange,
        Trading,
    };
    pub use crate::types::{
        BalanceEntry, CurrencyMetadata, MarketMetadata, Order, OrderSide, OrderStatus, OrderType,
        Snapshot, Timestamp,
    };
    pub use rust_decimal::Decimal;
    pub use serde::{Deserialize, Serialize};
}

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
