//! MarketData trait definition.
//!
//! Currency and market catalogs. Every method is best effort: failures are
//! logged by the implementation and surface as `None`.

use async_trait::async_trait;

use super::PublicExchange;
use crate::symbol::PairCodec;
use crate::types::{CurrencyMetadata, MarketMetadata, Snapshot};

/// Catalog access.
#[async_trait]
pub trait MarketData: PublicExchange {
    /// Currency catalog.
    ///
    /// `None` when a refresh is already in flight or the refresh failed.
    /// A cached catalog is narrowed to `coin`; a freshly fetched one is
    /// returned whole.
    async fn get_currencies(
        &self,
        coin: Option<&str>,
        force_update: bool,
    ) -> Option<Snapshot<CurrencyMetadata>>;

    /// Market catalog, with the same contract as [`get_currencies`](Self::get_currencies).
    async fn get_markets(
        &self,
        pair: Option<&str>,
        force_update: bool,
    ) -> Option<Snapshot<MarketMetadata>>;

    /// Current currency snapshot without touching the network.
    async fn currencies(&self) -> Option<Snapshot<CurrencyMetadata>>;

    /// Current market snapshot without touching the network.
    async fn markets(&self) -> Option<Snapshot<MarketMetadata>>;

    /// Metadata of one market, loading the catalog if needed.
    async fn market_info(&self, pair: &str) -> Option<MarketMetadata> {
        let readable = PairCodec::readable(pair).ok()?;
        self.get_markets(None, false).await?.get(&readable).cloned()
    }

    /// Metadata of one currency, loading the catalog if needed.
    async fn currency_info(&self, coin: &str) -> Option<CurrencyMetadata> {
        let symbol = coin.trim().to_uppercase();
        self.get_currencies(None, false)
            .await?
            .get(&symbol)
            .cloned()
    }
}
