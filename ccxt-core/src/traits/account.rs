//! Account trait definition.

use async_trait::async_trait;

use super::PublicExchange;
use crate::types::BalanceEntry;

/// Private account data.
#[async_trait]
pub trait Account: PublicExchange {
    /// Balances of the spot wallet.
    ///
    /// With `nonzero`, assets whose amounts are all zero are dropped.
    /// `None` on any failure.
    async fn get_balances(&self, nonzero: bool) -> Option<Vec<BalanceEntry>>;

    /// Balance of one asset.
    async fn balance_of(&self, code: &str) -> Option<BalanceEntry> {
        let code = code.trim().to_uppercase();
        self.get_balances(false)
            .await?
            .into_iter()
            .find(|entry| entry.code == code)
    }
}
