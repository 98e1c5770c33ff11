//! Order type definitions

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Timestamp;

/// Order side (buy or sell)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderSide {
    /// Buy order
    Buy,
    /// Sell order
    Sell,
}

impl OrderSide {
    /// Lowercase name, as used in requests.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Buy => "buy",
            Self::Sell => "sell",
        }
    }
}

impl std::fmt::Display for OrderSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonical order type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderType {
    /// Limit order
    Limit,
    /// Market order
    Market,
    /// Combined take-profit / stop-loss order
    TakeProfitAndStopLoss,
    /// Trailing order
    TrackingOrder,
    /// Post-only limit order
    MakerOnly,
    /// Anything the vendor reports that has no canonical counterpart
    Unknown,
}

impl std::fmt::Display for OrderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Limit => "limit",
            Self::Market => "market",
            Self::TakeProfitAndStopLoss => "take_profit_and_stop_loss",
            Self::TrackingOrder => "tracking_order",
            Self::MakerOnly => "maker_only",
            Self::Unknown => "unknown",
        };
        f.write_str(s)
    }
}

/// Canonical order status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OrderStatus {
    /// Accepted, nothing filled yet
    New,
    /// Some of the amount has been filled
    PartiallyFilled,
    /// Completely filled
    Filled,
    /// Cancelled, with or without partial fills
    Cancelled,
    /// Code not recognized
    Unknown,
}

impl OrderStatus {
    /// Returns `true` while the order can still trade.
    pub fn is_open(self) -> bool {
        matches!(self, Self::New | Self::PartiallyFilled)
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::New => "new",
            Self::PartiallyFilled => "partiallyFilled",
            Self::Filled => "filled",
            Self::Cancelled => "cancelled",
            Self::Unknown => "unknown",
        };
        f.write_str(s)
    }
}

/// Order as reconstructed from the vendor's order and trade listings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Vendor order id
    pub order_id: String,

    /// Readable pair (`BTC/USDT`)
    pub symbol: String,

    /// Plain pair (`BTC_USDT`)
    pub symbol_plain: String,

    /// Execution price from the trade listing; `None` when nothing traded.
    pub price: Option<Decimal>,

    /// Side
    pub side: OrderSide,

    /// Canonical type
    pub order_type: OrderType,

    /// Creation time in milliseconds
    pub timestamp: Timestamp,

    /// ISO 8601 rendering of `timestamp`
    pub datetime: Option<String>,

    /// Ordered amount
    pub amount: Decimal,

    /// Filled amount
    pub amount_executed: Decimal,

    /// `amount_executed - amount` as the vendor defines it. Negative while
    /// the order is not completely filled.
    pub amount_left: Decimal,

    /// Canonical status
    pub status: OrderStatus,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::disallowed_methods)]
    use super::*;

    #[test]
    fn test_display_names() {
        assert_eq!(OrderSide::Sell.to_string(), "sell");
        assert_eq!(
            OrderType::TakeProfitAndStopLoss.to_string(),
            "take_profit_and_stop_loss"
        );
        assert_eq!(OrderStatus::PartiallyFilled.to_string(), "partiallyFilled");
    }

    #[test]
    fn test_serde_names_match_display() {
        let json = serde_json::to_string(&OrderType::MakerOnly).unwrap();
        assert_eq!(json, "\"maker_only\"");
        let json = serde_json::to_string(&OrderStatus::PartiallyFilled).unwrap();
        assert_eq!(json, "\"partiallyFilled\"");
    }

    #[test]
    fn test_status_is_open() {
        assert!(OrderStatus::New.is_open());
        assert!(OrderStatus::PartiallyFilled.is_open());
        assert!(!OrderStatus::Cancelled.is_open());
    }
}
