//! Capability-related macros

/// Builds a [`Capabilities`](crate::capability::Capabilities) set from flag names.
///
/// ```rust
/// use ccxt_core::{capabilities, capability::Capabilities};
///
/// let caps = capabilities!(METADATA | FETCH_BALANCE);
/// assert_eq!(caps, Capabilities::METADATA | Capabilities::FETCH_BALANCE);
///
/// let caps = capabilities!(FETCH_ORDERS, FETCH_OPEN_ORDERS);
/// assert!(caps.has("fetchOpenOrders"));
/// ```
#[macro_export]
macro_rules! capabilities {
    ($cap:ident) => {
        $crate::capability::Capabilities::$cap
    };
    ($cap:ident | $($rest:tt)+) => {
        $crate::capability::Capabilities::$cap | $crate::capabilities!($($rest)+)
    };
    ($cap:ident, $($rest:tt)+) => {
        $crate::capability::Capabilities::$cap | $crate::capabilities!($($rest)+)
    };
}
