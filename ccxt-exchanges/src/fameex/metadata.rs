//! Currency and market catalogs for FameEX.

use ccxt_core::base_exchange::CatalogLoad;
use ccxt_core::symbol::PairCodec;
use ccxt_core::types::{CurrencyMap, CurrencyMetadata, MarketMap, MarketMetadata, Snapshot};
use ccxt_core::Result;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::warn;

use super::{Fameex, parser};

/// Copy of `snapshot` holding at most the entry under `key`.
fn narrow<V: Clone>(snapshot: &Snapshot<V>, key: &str) -> Snapshot<V> {
    Arc::new(
        snapshot
            .get(key)
            .map(|v| HashMap::from([(key.to_string(), v.clone())]))
            .unwrap_or_default(),
    )
}

/// Narrows a cache hit; refreshed snapshots are returned whole.
fn narrow_cached<V: Clone>(load: CatalogLoad<V>, key: Option<&str>) -> CatalogLoad<V> {
    match (load, key) {
        (CatalogLoad::Cached(snapshot), Some(key)) => CatalogLoad::Cached(narrow(&snapshot, key)),
        (load, _) => load,
    }
}

impl Fameex {
    async fn fetch_currencies(&self) -> Result<CurrencyMap> {
        let (currencies, networks) = futures::try_join!(
            self.api.currencies(),
            self.api.currencies_with_network()
        )?;
        parser::parse_currencies(&currencies, &networks)
    }

    async fn fetch_markets(&self) -> Result<MarketMap> {
        let markets = self.api.markets().await?;
        parser::parse_markets(&markets)
    }

    /// Loads the currency catalog, returning the underlying error on failure.
    ///
    /// [`CatalogLoad::Busy`] means another refresh was in flight.
    pub async fn try_get_currencies(
        &self,
        coin: Option<&str>,
        force_update: bool,
    ) -> Result<CatalogLoad<CurrencyMetadata>> {
        let key = coin.map(|c| c.trim().to_uppercase());
        let catalog = &self.base.metadata.currencies;
        let load = catalog
            .load_with(force_update, self.options.refresh_policy, || {
                self.fetch_currencies()
            })
            .await?;
        Ok(narrow_cached(load, key.as_deref()))
    }

    /// Currency catalog keyed by uppercase ticker.
    ///
    /// Returns `None` while another refresh is in flight and when the
    /// refresh fails. A cache hit is narrowed to `coin`; a fresh fetch
    /// returns the full catalog.
    pub async fn get_currencies(
        &self,
        coin: Option<&str>,
        force_update: bool,
    ) -> Option<Snapshot<CurrencyMetadata>> {
        match self.try_get_currencies(coin, force_update).await {
            Ok(load) => load.into_snapshot(),
            Err(e) => {
                warn!(coin = ?coin, force_update, error = %e, "Failed to load currencies");
                None
            }
        }
    }

    /// Loads the market catalog, returning the underlying error on failure.
    pub async fn try_get_markets(
        &self,
        pair: Option<&str>,
        force_update: bool,
    ) -> Result<CatalogLoad<MarketMetadata>> {
        let key = pair.map(PairCodec::readable).transpose()?;
        let catalog = &self.base.metadata.markets;
        let load = catalog
            .load_with(force_update, self.options.refresh_policy, || {
                self.fetch_markets()
            })
            .await?;
        Ok(narrow_cached(load, key.as_deref()))
    }

    /// Market catalog keyed by readable pair, with the same contract as
    /// [`get_currencies`](Self::get_currencies).
    pub async fn get_markets(
        &self,
        pair: Option<&str>,
        force_update: bool,
    ) -> Option<Snapshot<MarketMetadata>> {
        match self.try_get_markets(pair, force_update).await {
            Ok(load) => load.into_snapshot(),
            Err(e) => {
                warn!(pair = ?pair, force_update, error = %e, "Failed to load markets");
                None
            }
        }
    }

    /// Metadata of one market.
    pub async fn market_info(&self, pair: &str) -> Option<MarketMetadata> {
        let readable = match PairCodec::readable(pair) {
            Ok(readable) => readable,
            Err(e) => {
                warn!(pair, error = %e, "Invalid pair");
                return None;
            }
        };
        self.get_markets(Some(&readable), false)
            .await?
            .get(&readable)
            .cloned()
    }

    /// Metadata of one currency.
    pub async fn currency_info(&self, coin: &str) -> Option<CurrencyMetadata> {
        let symbol = coin.trim().to_uppercase();
        self.get_currencies(Some(&symbol), false)
            .await?
            .get(&symbol)
            .cloned()
    }

    /// Current market snapshot, without touching the network.
    pub async fn markets(&self) -> Option<Snapshot<MarketMetadata>> {
        self.base.metadata.markets.snapshot().await
    }

    /// Current currency snapshot, without touching the network.
    pub async fn currencies(&self) -> Option<Snapshot<CurrencyMetadata>> {
        self.base.metadata.currencies.snapshot().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> Snapshot<u32> {
        Arc::new(HashMap::from([("A".to_string(), 1), ("B".to_string(), 2)]))
    }

    #[test]
    fn test_narrow() {
        let narrowed = narrow(&snapshot(), "B");
        assert_eq!(narrowed.len(), 1);
        assert_eq!(narrowed.get("B"), Some(&2));
        assert!(narrow(&snapshot(), "C").is_empty());
    }

    #[test]
    fn test_only_cache_hits_are_narrowed() {
        let refreshed = narrow_cached(CatalogLoad::Refreshed(snapshot()), Some("A"));
        assert_eq!(refreshed.into_snapshot().map(|s| s.len()), Some(2));

        let cached = narrow_cached(CatalogLoad::Cached(snapshot()), Some("A"));
        assert_eq!(cached.into_snapshot().map(|s| s.len()), Some(1));

        let whole = narrow_cached(CatalogLoad::Cached(snapshot()), None);
        assert_eq!(whole.into_snapshot().map(|s| s.len()), Some(2));
    }
}
