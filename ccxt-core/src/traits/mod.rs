//! Exchange trait hierarchy.
//!
//! ```text
//! PublicExchange (identity, capabilities)
//!     │
//!     ├── MarketData (currency and market catalogs)
//!     ├── Account    (balances)
//!     └── Trading    (order history)
//!
//! FullExchange = PublicExchange + MarketData + Account + Trading
//! ```
//!
//! All traits are object safe and `Send + Sync`, so adapters can be held as
//! `Box<dyn ...>` or `Arc<dyn ...>`.

use std::sync::Arc;

mod account;
mod market_data;
mod public_exchange;
mod trading;

pub use account::Account;
pub use market_data::MarketData;
pub use public_exchange::PublicExchange;
pub use trading::Trading;

/// Combined trait for adapters implementing every component trait.
pub trait FullExchange: PublicExchange + MarketData + Account + Trading {}

impl<T> FullExchange for T where T: PublicExchange + MarketData + Account + Trading {}

/// Boxed [`FullExchange`] trait object.
pub type BoxedFullExchange = Box<dyn FullExchange>;

/// Shared [`FullExchange`] trait object.
pub type ArcFullExchange = Arc<dyn FullExchange>;

/// Shared [`MarketData`] trait object.
pub type ArcMarketData = Arc<dyn MarketData>;

/// Shared [`Account`] trait object.
pub type ArcAccount = Arc<dyn Account>;

/// Shared [`Trading`] trait object.
pub type ArcTrading = Arc<dyn Trading>;
