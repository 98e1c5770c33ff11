//! Unified trait implementations for FameEX.

use async_trait::async_trait;
use ccxt_core::capability::Capabilities;
use ccxt_core::symbol::CanonicalPair;
use ccxt_core::traits::{Account, MarketData, PublicExchange, Trading};
use ccxt_core::types::{BalanceEntry, CurrencyMetadata, MarketMetadata, Order, Snapshot};

use super::Fameex;

impl PublicExchange for Fameex {
    fn id(&self) -> &str {
        "fameex"
    }

    fn name(&self) -> &str {
        "FameEX"
    }

    fn version(&self) -> &'static str {
        "v2"
    }

    fn capabilities(&self) -> Capabilities {
        self.features()
    }

    fn is_sandbox(&self) -> bool {
        self.base().config.sandbox
    }
}

#[async_trait]
impl MarketData for Fameex {
    async fn get_currencies(
        &self,
        coin: Option<&str>,
        force_update: bool,
    ) -> Option<Snapshot<CurrencyMetadata>> {
        Fameex::get_currencies(self, coin, force_update).await
    }

    async fn get_markets(
        &self,
        pair: Option<&str>,
        force_update: bool,
    ) -> Option<Snapshot<MarketMetadata>> {
        Fameex::get_markets(self, pair, force_update).await
    }

    async fn currencies(&self) -> Option<Snapshot<CurrencyMetadata>> {
        Fameex::currencies(self).await
    }

    async fn markets(&self) -> Option<Snapshot<MarketMetadata>> {
        Fameex::markets(self).await
    }

    async fn market_info(&self, pair: &str) -> Option<MarketMetadata> {
        Fameex::market_info(self, pair).await
    }

    async fn currency_info(&self, coin: &str) -> Option<CurrencyMetadata> {
        Fameex::currency_info(self, coin).await
    }
}

#[async_trait]
impl Account for Fameex {
    async fn get_balances(&self, nonzero: bool) -> Option<Vec<BalanceEntry>> {
        Fameex::get_balances(self, nonzero).await
    }
}

#[async_trait]
impl Trading for Fameex {
    async fn get_open_orders_page(
        &self,
        pair: &CanonicalPair,
        page_num: u32,
    ) -> Option<Vec<Order>> {
        Fameex::get_open_orders_page(self, pair, page_num).await
    }

    async fn get_open_orders(&self, pair: &str) -> Option<Vec<Order>> {
        Fameex::get_open_orders(self, pair).await
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::disallowed_methods)]
    use super::*;
    use ccxt_core::traits::{ArcFullExchange, BoxedFullExchange};
    use std::sync::Arc;

    #[test]
    fn test_trait_objects() {
        let fameex = Fameex::builder().build().unwrap();
        let exchange: BoxedFullExchange = Box::new(fameex);
        assert_eq!(exchange.id(), "fameex");
        assert_eq!(exchange.name(), "FameEX");
        assert!(!exchange.is_sandbox());
        assert!(exchange.capabilities().has("fetchBalance"));

        let shared: ArcFullExchange = Arc::new(Fameex::builder().build().unwrap());
        assert_eq!(Arc::clone(&shared).version(), "v2");
    }

    #[tokio::test]
    async fn test_snapshots_start_empty() {
        let fameex = Fameex::builder().build().unwrap();
        let exchange: &dyn MarketData = &fameex;
        assert!(exchange.markets().await.is_none());
        assert!(exchange.currencies().await.is_none());
    }
}
