//! Balance type definitions

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Balance of a single asset in one wallet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BalanceEntry {
    /// Asset code, uppercase.
    pub code: String,

    /// Free balance available for trading
    pub free: Decimal,

    /// Held or frozen balance
    pub used: Decimal,

    /// Total balance as reported by the vendor
    pub total: Decimal,
}

impl BalanceEntry {
    /// Create a new balance entry
    pub fn new(code: impl Into<String>, free: Decimal, used: Decimal, total: Decimal) -> Self {
        Self {
            code: code.into(),
            free,
            used,
            total,
        }
    }

    /// Returns `true` if every amount is zero.
    pub fn is_zero(&self) -> bool {
        self.free.is_zero() && self.used.is_zero() && self.total.is_zero()
    }
}
