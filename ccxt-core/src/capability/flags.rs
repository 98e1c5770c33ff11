//! Capability bitflags definitions

use bitflags::bitflags;
use std::fmt;

use super::Capability;

bitflags! {
    /// Set of supported operations.
    ///
    /// ```rust
    /// use ccxt_core::capability::Capabilities;
    ///
    /// let caps = Capabilities::METADATA | Capabilities::FETCH_OPEN_ORDERS;
    /// assert!(caps.contains(Capabilities::FETCH_CURRENCIES));
    /// assert!(!caps.contains(Capabilities::CREATE_ORDER));
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Capabilities: u32 {
        const FETCH_MARKETS       = 1 << 0;
        const FETCH_CURRENCIES    = 1 << 1;
        const FETCH_BALANCE       = 1 << 2;
        const FETCH_ORDERS        = 1 << 3;
        const FETCH_OPEN_ORDERS   = 1 << 4;
        const FETCH_CLOSED_ORDERS = 1 << 5;
        const FETCH_MY_TRADES     = 1 << 6;
        const CREATE_ORDER        = 1 << 7;
        const CANCEL_ORDER        = 1 << 8;
        const WEBSOCKET           = 1 << 9;

        /// Catalog endpoints
        const METADATA = Self::FETCH_MARKETS.bits() | Self::FETCH_CURRENCIES.bits();

        /// Read-only order history
        const ORDER_HISTORY = Self::FETCH_ORDERS.bits()
            | Self::FETCH_OPEN_ORDERS.bits()
            | Self::FETCH_CLOSED_ORDERS.bits()
            | Self::FETCH_MY_TRADES.bits();

        /// Order placement and cancellation
        const TRADING = Self::CREATE_ORDER.bits() | Self::CANCEL_ORDER.bits();
    }
}

impl Capabilities {
    /// Check if a capability is supported by its camelCase name
    ///
    /// ```rust
    /// use ccxt_core::capability::Capabilities;
    ///
    /// let caps = Capabilities::METADATA;
    /// assert!(caps.has("fetchMarkets"));
    /// assert!(!caps.has("createOrder"));
    /// assert!(!caps.has("noSuchThing"));
    /// ```
    pub fn has(&self, capability: &str) -> bool {
        Capability::from_name(capability).is_some_and(|cap| self.contains(Self::from(cap)))
    }

    /// Names of all enabled capabilities, in declaration order
    pub fn supported_capabilities(&self) -> Vec<&'static str> {
        Capability::ALL
            .iter()
            .filter(|cap| self.contains(Self::from(**cap)))
            .map(Capability::as_name)
            .collect()
    }
}

impl From<Capability> for Capabilities {
    fn from(cap: Capability) -> Self {
        Self::from_bits_truncate(1 << (cap as u8))
    }
}

impl FromIterator<Capability> for Capabilities {
    fn from_iter<I: IntoIterator<Item = Capability>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::empty(), |caps, cap| caps | Self::from(cap))
    }
}

impl fmt::Display for Capabilities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.supported_capabilities().join(", "))
    }
}
