//! FameEX order code tables.
//!
//! Vendor order types and order states are small integer codes. Each table
//! is an enum with an `Unrecognized` arm so translation is total: a code the
//! vendor adds later maps to the canonical `Unknown` instead of failing.

use ccxt_core::types::{OrderSide, OrderStatus, OrderType};
use serde_json::Value;

/// FameEX order type codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VendorOrderType {
    /// Limit order (1)
    Limit,
    /// Market order (2)
    Market,
    /// Take-profit / stop-loss order (3)
    TakeProfitAndStopLoss,
    /// Trailing order (4)
    TrackingOrder,
    /// Post-only order (5)
    MakerOnly,
    /// Any other code
    Unrecognized(i64),
}

impl VendorOrderType {
    /// Every documented order type, in code order.
    pub const ALL: [Self; 5] = [
        Self::Limit,
        Self::Market,
        Self::TakeProfitAndStopLoss,
        Self::TrackingOrder,
        Self::MakerOnly,
    ];

    /// Parses a vendor code.
    pub fn from_code(code: i64) -> Self {
        match code {
            1 => Self::Limit,
            2 => Self::Market,
            3 => Self::TakeProfitAndStopLoss,
            4 => Self::TrackingOrder,
            5 => Self::MakerOnly,
            n => Self::Unrecognized(n),
        }
    }

    /// Returns the vendor code.
    pub fn code(self) -> i64 {
        match self {
            Self::Limit => 1,
            Self::Market => 2,
            Self::TakeProfitAndStopLoss => 3,
            Self::TrackingOrder => 4,
            Self::MakerOnly => 5,
            Self::Unrecognized(n) => n,
        }
    }

    /// Canonical order type.
    pub fn canonical(self) -> OrderType {
        match self {
            Self::Limit => OrderType::Limit,
            Self::Market => OrderType::Market,
            Self::TakeProfitAndStopLoss => OrderType::TakeProfitAndStopLoss,
            Self::TrackingOrder => OrderType::TrackingOrder,
            Self::MakerOnly => OrderType::MakerOnly,
            Self::Unrecognized(_) => OrderType::Unknown,
        }
    }
}

/// FameEX order state codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VendorOrderState {
    /// Waiting to be filled (1)
    Pending,
    /// Partially filled (2)
    PartiallyFilled,
    /// Fully filled (3)
    Filled,
    /// Cancel requested (4)
    Cancelling,
    /// Cancelled (5)
    Cancelled,
    /// Partially filled, remainder cancelled (6)
    PartiallyCancelled,
    /// Conditional order waiting for its trigger (7)
    Untriggered,
    /// Any other code
    Unrecognized(i64),
}

impl VendorOrderState {
    /// Every documented state, in code order.
    pub const ALL: [Self; 7] = [
        Self::Pending,
        Self::PartiallyFilled,
        Self::Filled,
        Self::Cancelling,
        Self::Cancelled,
        Self::PartiallyCancelled,
        Self::Untriggered,
    ];

    /// Parses a vendor code.
    pub fn from_code(code: i64) -> Self {
        match code {
            1 => Self::Pending,
            2 => Self::PartiallyFilled,
            3 => Self::Filled,
            4 => Self::Cancelling,
            5 => Self::Cancelled,
            6 => Self::PartiallyCancelled,
            7 => Self::Untriggered,
            n => Self::Unrecognized(n),
        }
    }

    /// Returns the vendor code.
    pub fn code(self) -> i64 {
        match self {
            Self::Pending => 1,
            Self::PartiallyFilled => 2,
            Self::Filled => 3,
            Self::Cancelling => 4,
            Self::Cancelled => 5,
            Self::PartiallyCancelled => 6,
            Self::Untriggered => 7,
            Self::Unrecognized(n) => n,
        }
    }

    /// Canonical status.
    pub fn canonical(self) -> OrderStatus {
        match self {
            Self::Pending | Self::Untriggered => OrderStatus::New,
            Self::PartiallyFilled => OrderStatus::PartiallyFilled,
            Self::Filled => OrderStatus::Filled,
            Self::Cancelling | Self::Cancelled | Self::PartiallyCancelled => OrderStatus::Cancelled,
            Self::Unrecognized(_) => OrderStatus::Unknown,
        }
    }
}

/// Coarse open/closed partition used by the order listing endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LifecycleBucket {
    /// Orders that can still trade (1)
    Uncompleted,
    /// Filled or cancelled orders (2)
    CompletedOrCancelled,
}

impl LifecycleBucket {
    /// Query order of the buckets.
    pub const ALL: [Self; 2] = [Self::Uncompleted, Self::CompletedOrCancelled];

    /// Returns the vendor code.
    pub fn code(self) -> i64 {
        match self {
            Self::Uncompleted => 1,
            Self::CompletedOrCancelled => 2,
        }
    }
}

/// Translates a vendor state code into a canonical status.
///
/// ```rust
/// use ccxt_core::types::OrderStatus;
/// use ccxt_exchanges::fameex::codes::map_status;
///
/// assert_eq!(map_status(6), OrderStatus::Cancelled);
/// assert_eq!(map_status(42), OrderStatus::Unknown);
/// ```
pub fn map_status(code: i64) -> OrderStatus {
    VendorOrderState::from_code(code).canonical()
}

/// Translates a vendor order type code into a canonical type.
pub fn map_type(code: i64) -> OrderType {
    VendorOrderType::from_code(code).canonical()
}

/// Parses an order side, spelled `buy`/`sell` or `1`/`2`.
pub fn parse_side(value: &Value) -> Option<OrderSide> {
    match value {
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "buy" | "1" => Some(OrderSide::Buy),
            "sell" | "2" => Some(OrderSide::Sell),
            _ => None,
        },
        Value::Number(n) => match n.as_i64()? {
            1 => Some(OrderSide::Buy),
            2 => Some(OrderSide::Sell),
            _ => None,
        },
        _ => None,
    }
}
