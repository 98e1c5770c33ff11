//! Exchange capabilities
//!
//! A static descriptor of which operations an exchange adapter supports,
//! stored as bitflags and queried by camelCase operation name.
//!
//! ```rust
//! use ccxt_core::capability::{Capabilities, Capability};
//!
//! let caps: Capabilities = [Capability::FetchMarkets, Capability::FetchBalance]
//!     .into_iter()
//!     .collect();
//! assert!(caps.has("fetchBalance"));
//! assert!(!caps.has("cancelOrder"));
//! ```

// bitflags-generated constants are documented by name
#![allow(missing_docs)]

use std::fmt;

mod flags;
mod macros;

pub use flags::Capabilities;

/// Individual capability identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Capability {
    FetchMarkets = 0,
    FetchCurrencies = 1,
    FetchBalance = 2,
    FetchOrders = 3,
    FetchOpenOrders = 4,
    FetchClosedOrders = 5,
    FetchMyTrades = 6,
    CreateOrder = 7,
    CancelOrder = 8,
    Websocket = 9,
}

impl Capability {
    /// Every capability, in bit order.
    pub const ALL: [Self; 10] = [
        Self::FetchMarkets,
        Self::FetchCurrencies,
        Self::FetchBalance,
        Self::FetchOrders,
        Self::FetchOpenOrders,
        Self::FetchClosedOrders,
        Self::FetchMyTrades,
        Self::CreateOrder,
        Self::CancelOrder,
        Self::Websocket,
    ];

    /// camelCase operation name
    pub const fn as_name(&self) -> &'static str {
        match self {
            Self::FetchMarkets => "fetchMarkets",
            Self::FetchCurrencies => "fetchCurrencies",
            Self::FetchBalance => "fetchBalance",
            Self::FetchOrders => "fetchOrders",
            Self::FetchOpenOrders => "fetchOpenOrders",
            Self::FetchClosedOrders => "fetchClosedOrders",
            Self::FetchMyTrades => "fetchMyTrades",
            Self::CreateOrder => "createOrder",
            Self::CancelOrder => "cancelOrder",
            Self::Websocket => "websocket",
        }
    }

    /// Parses a camelCase operation name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|cap| cap.as_name() == name)
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_name())
    }
}
