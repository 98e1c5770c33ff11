//! Market type definitions

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A spot market listed by the exchange.
///
/// Keyed by `pair_readable` in the market catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MarketMetadata {
    /// `BTC/USDT`
    pub pair_readable: String,
    /// `BTC_USDT`
    pub pair_plain: String,
    /// Base coin.
    pub coin1: String,
    /// Quote coin.
    pub coin2: String,
    /// Number of decimals allowed for amounts in `coin1`.
    pub coin1_decimals: u32,
    /// Number of decimals allowed for prices in `coin2`.
    pub coin2_decimals: u32,
    /// Smallest step in `coin1` (`10^-coin1_decimals`).
    pub coin1_precision: Decimal,
    /// Smallest step in `coin2` (`10^-coin2_decimals`).
    pub coin2_precision: Decimal,
}

impl MarketMetadata {
    /// Creates a market from its coins and per-side decimal counts.
    pub fn new(
        coin1: impl Into<String>,
        coin2: impl Into<String>,
        coin1_decimals: u32,
        coin2_decimals: u32,
    ) -> Self {
        let coin1 = coin1.into();
        let coin2 = coin2.into();
        Self {
            pair_readable: format!("{coin1}/{coin2}"),
            pair_plain: format!("{coin1}_{coin2}"),
            coin1_precision: precision_step(coin1_decimals),
            coin2_precision: precision_step(coin2_decimals),
            coin1,
            coin2,
            coin1_decimals,
            coin2_decimals,
        }
    }
}

/// Converts a decimal count into its step size, e.g. `4` into `0.0001`.
///
/// Counts beyond `Decimal`'s scale limit are clamped to 28.
pub fn precision_step(decimals: u32) -> Decimal {
    Decimal::new(1, decimals.min(28))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_market_new() {
        let m = MarketMetadata::new("BTC", "USDT", 6, 2);
        assert_eq!(m.pair_readable, "BTC/USDT");
        assert_eq!(m.pair_plain, "BTC_USDT");
        assert_eq!(m.coin1_precision, dec!(0.000001));
        assert_eq!(m.coin2_precision, dec!(0.01));
    }

    #[test]
    fn test_precision_step() {
        assert_eq!(precision_step(0), dec!(1));
        assert_eq!(precision_step(8), dec!(0.00000001));
        assert_eq!(precision_step(40), Decimal::new(1, 28));
    }
}
