//! Account operations for FameEX.

use ccxt_core::Result;
use ccxt_core::types::BalanceEntry;
use tracing::warn;

use super::{Fameex, parser};

impl Fameex {
    /// Balances of the configured wallet, returning the underlying error on failure.
    pub async fn try_get_balances(&self, nonzero: bool) -> Result<Vec<BalanceEntry>> {
        let response = self.api.balances().await?;
        let mut balances = parser::parse_balances(&response, &self.options.wallet_type)?;
        if nonzero {
            balances.retain(|b| !b.is_zero());
        }
        Ok(balances)
    }

    /// Balances of the spot wallet.
    ///
    /// With `nonzero`, assets whose amounts are all zero are dropped.
    pub async fn get_balances(&self, nonzero: bool) -> Option<Vec<BalanceEntry>> {
        match self.try_get_balances(nonzero).await {
            Ok(balances) => Some(balances),
            Err(e) => {
                warn!(nonzero, error = %e, "Failed to fetch balances");
                None
            }
        }
    }
}
