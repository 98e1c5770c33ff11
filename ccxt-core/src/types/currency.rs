//! Currency type definitions

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Metadata for one asset listed by the exchange.
///
/// Fields the vendor does not report (`precision`, `fee`, `confirmations`)
/// are left as `None` instead of being guessed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyMetadata {
    /// Canonical uppercase ticker; also the key in the currency catalog.
    pub symbol: String,

    /// Display name as reported by the vendor.
    pub name: String,

    /// Whether withdrawals are enabled.
    pub withdraw_enabled: bool,

    /// Whether deposits are enabled.
    pub deposit_enabled: bool,

    /// Minimum withdrawal amount.
    pub min_withdraw: Decimal,

    /// Maximum withdrawal amount.
    pub max_withdraw: Decimal,

    /// Canonical network codes the asset can move over.
    pub networks: Vec<String>,

    /// Vendor-independent asset id (`unified_cryptoasset_id`).
    pub id: Option<i64>,

    /// Not reported by the vendor.
    pub precision: Option<Decimal>,

    /// Not reported by the vendor.
    pub fee: Option<Decimal>,

    /// Not reported by the vendor.
    pub confirmations: Option<u32>,
}

impl CurrencyMetadata {
    /// Creates an entry with no networks and no optional fields.
    pub fn new(symbol: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            name: name.into(),
            withdraw_enabled: false,
            deposit_enabled: false,
            min_withdraw: Decimal::ZERO,
            max_withdraw: Decimal::ZERO,
            networks: Vec::new(),
            id: None,
            precision: None,
            fee: None,
            confirmations: None,
        }
    }

    /// Returns `true` when the asset can move over the given network code.
    pub fn supports_network(&self, code: &str) -> bool {
        self.networks.iter().any(|n| n.eq_ignore_ascii_case(code))
    }
}
