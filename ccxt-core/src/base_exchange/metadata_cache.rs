//! Currency and market catalog caching
//!
//! Each catalog is one [`Catalog`]: a snapshot that is only ever replaced
//! wholesale plus an in-flight flag that admits a single refresh at a time.

use crate::error::Result;
use crate::types::{CurrencyMetadata, MarketMetadata, Snapshot};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::{Notify, RwLock};
use tracing::{debug, info, warn};

/// What a caller gets when it arrives while a refresh is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RefreshPolicy {
    /// Return immediately with nothing.
    #[default]
    ReturnNothing,
    /// Wait for the in-flight refresh to finish and serve its snapshot.
    AwaitInFlight,
}

/// Result of a catalog load.
#[derive(Debug, Clone)]
pub enum CatalogLoad<V> {
    /// Another refresh was in flight and nothing was served.
    Busy,
    /// Served from the existing snapshot.
    Cached(Snapshot<V>),
    /// A fresh snapshot was fetched and installed.
    Refreshed(Snapshot<V>),
}

impl<V> CatalogLoad<V> {
    /// Returns the served snapshot, if any.
    pub fn into_snapshot(self) -> Option<Snapshot<V>> {
        match self {
            Self::Busy => None,
            Self::Cached(s) | Self::Refreshed(s) => Some(s),
        }
    }

    /// Returns `true` for [`CatalogLoad::Cached`].
    pub fn is_cached(&self) -> bool {
        matches!(self, Self::Cached(_))
    }
}

/// One cached catalog with single-flight refresh.
#[derive(Debug)]
pub struct Catalog<V> {
    name: &'static str,
    snapshot: RwLock<Option<Snapshot<V>>>,
    in_flight: AtomicBool,
    refreshed: Notify,
}

impl<V> Catalog<V> {
    /// Creates an empty catalog. `name` is only used in log output.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            snapshot: RwLock::new(None),
            in_flight: AtomicBool::new(false),
            refreshed: Notify::new(),
        }
    }

    /// Current snapshot, if the catalog has been populated.
    pub async fn snapshot(&self) -> Option<Snapshot<V>> {
        self.snapshot.read().await.clone()
    }

    /// Returns `true` when a refresh is running.
    pub fn is_refreshing(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Claims the refresh slot. Returns `None` if another refresh holds it.
    ///
    /// The slot is released when the returned guard is dropped, whatever
    /// the outcome of the refresh.
    pub fn try_begin_refresh(&self) -> Option<RefreshGuard<'_, V>> {
        self.in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| RefreshGuard { catalog: self })
    }

    /// Waits until the current refresh, if any, releases its slot.
    pub async fn wait_for_refresh(&self) {
        let notified = self.refreshed.notified();
        let mut notified = std::pin::pin!(notified);
        // register before checking the flag so a release in between is not missed
        notified.as_mut().enable();
        if !self.is_refreshing() {
            return;
        }
        notified.await;
    }

    /// Serves the catalog under the single-flight rules.
    ///
    /// 1. A refresh in flight yields [`CatalogLoad::Busy`], or under
    ///    [`RefreshPolicy::AwaitInFlight`] whatever snapshot it leaves behind.
    /// 2. A populated snapshot without `force` yields [`CatalogLoad::Cached`].
    /// 3. Otherwise `loader` runs once and its map replaces the snapshot.
    ///    An empty map is served as is but never installed, so the old
    ///    snapshot stays in place.
    ///
    /// # Errors
    ///
    /// Returns the loader's error.
    pub async fn load_with<F, Fut>(
        &self,
        force: bool,
        policy: RefreshPolicy,
        loader: F,
    ) -> Result<CatalogLoad<V>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<HashMap<String, V>>>,
    {
        if self.is_refreshing() {
            return Ok(self.on_busy(policy).await);
        }

        if !force && let Some(snapshot) = self.snapshot().await {
            debug!(catalog = self.name, entries = snapshot.len(), "Serving cached catalog");
            return Ok(CatalogLoad::Cached(snapshot));
        }

        let Some(guard) = self.try_begin_refresh() else {
            return Ok(self.on_busy(policy).await);
        };
        // a refresh may have completed between the snapshot check and the claim
        if !force && let Some(snapshot) = self.snapshot().await {
            return Ok(CatalogLoad::Cached(snapshot));
        }

        let entries = loader().await?;
        if entries.is_empty() {
            warn!(catalog = self.name, "Upstream returned an empty catalog, keeping snapshot");
            drop(guard);
            return Ok(CatalogLoad::Refreshed(Arc::new(entries)));
        }
        Ok(CatalogLoad::Refreshed(guard.commit(entries).await))
    }

    async fn on_busy(&self, policy: RefreshPolicy) -> CatalogLoad<V> {
        match policy {
            RefreshPolicy::ReturnNothing => {
                debug!(catalog = self.name, "Refresh in flight, returning nothing");
                CatalogLoad::Busy
            }
            RefreshPolicy::AwaitInFlight => {
                debug!(catalog = self.name, "Refresh in flight, waiting");
                self.wait_for_refresh().await;
                self.snapshot()
                    .await
                    .map_or(CatalogLoad::Busy, CatalogLoad::Cached)
            }
        }
    }
}

/// Exclusive right to refresh one catalog.
///
/// Dropping the guard clears the in-flight flag and wakes waiters.
#[derive(Debug)]
pub struct RefreshGuard<'a, V> {
    catalog: &'a Catalog<V>,
}

impl<V> RefreshGuard<'_, V> {
    /// Installs `entries` as the new snapshot and releases the slot.
    pub async fn commit(self, entries: HashMap<String, V>) -> Snapshot<V> {
        let snapshot = Arc::new(entries);
        *self.catalog.snapshot.write().await = Some(Arc::clone(&snapshot));
        info!(
            catalog = self.catalog.name,
            entries = snapshot.len(),
            "Catalog refreshed"
        );
        snapshot
    }
}

impl<V> Drop for RefreshGuard<'_, V> {
    fn drop(&mut self) {
        self.catalog.in_flight.store(false, Ordering::Release);
        self.catalog.refreshed.notify_waiters();
    }
}

/// Currency and market catalogs of one exchange instance.
#[derive(Debug)]
pub struct MetadataCache {
    /// Currencies keyed by uppercase ticker.
    pub currencies: Catalog<CurrencyMetadata>,
    /// Markets keyed by readable pair.
    pub markets: Catalog<MarketMetadata>,
    /// Behavior for callers arriving during a refresh.
    pub policy: RefreshPolicy,
}

impl Default for MetadataCache {
    fn default() -> Self {
        Self::new(RefreshPolicy::default())
    }
}

impl MetadataCache {
    /// Creates empty catalogs.
    pub fn new(policy: RefreshPolicy) -> Self {
        Self {
            currencies: Catalog::new("currencies"),
            markets: Catalog::new("markets"),
            policy,
        }
    }

    /// Returns `true` once both catalogs hold a snapshot.
    pub async fn is_loaded(&self) -> bool {
        self.currencies.snapshot().await.is_some() && self.markets.snapshot().await.is_some()
    }
}
