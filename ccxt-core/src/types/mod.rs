//! Core type definitions
//!
//! Canonical, vendor-neutral records the adapter hands to callers: currency
//! and market metadata, wallet balances and orders.

use std::collections::HashMap;
use std::sync::Arc;

pub mod balance;
pub mod currency;
pub mod market;
pub mod order;

pub use balance::BalanceEntry;
pub use currency::CurrencyMetadata;
pub use market::{MarketMetadata, precision_step};
pub use order::{Order, OrderSide, OrderStatus, OrderType};

/// Type alias for timestamps (milliseconds since Unix epoch)
pub type Timestamp = i64;

/// Currency catalog keyed by uppercase ticker.
pub type CurrencyMap = HashMap<String, CurrencyMetadata>;

/// Market catalog keyed by readable pair (`BTC/USDT`).
pub type MarketMap = HashMap<String, MarketMetadata>;

/// Shared, immutable catalog snapshot.
pub type Snapshot<V> = Arc<HashMap<String, V>>;
