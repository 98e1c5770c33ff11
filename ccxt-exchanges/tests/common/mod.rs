//! Counting in-memory FameEX API shared by the integration tests.

#![allow(dead_code)]
#![allow(clippy::disallowed_methods)]

use async_trait::async_trait;
use ccxt_core::{Error, Result};
use ccxt_exchanges::fameex::{Fameex, FameexApi, LifecycleBucket, OrderQuery, TradeQuery};
use serde_json::{Value, json};
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Mock API that records every call it receives.
#[derive(Debug, Default)]
pub struct MockApi {
    pub currencies_calls: AtomicUsize,
    pub networks_calls: AtomicUsize,
    pub markets_calls: AtomicUsize,
    pub balances_calls: AtomicUsize,
    pub orders_calls: AtomicUsize,
    pub lookup_calls: AtomicUsize,
    pub total_calls: AtomicUsize,
    /// Records returned by every order listing query.
    pub orders_per_query: AtomicUsize,
    /// Total reported by the pair-wide trade listing.
    pub total: AtomicU64,
    pub catalog_delay: Mutex<Duration>,
    pub lookup_delay: Mutex<Duration>,
    pub fail_currencies: AtomicBool,
    /// Makes the market listing come back with no entries.
    pub empty_markets: AtomicBool,
    pub fail_lookups: AtomicBool,
    /// Page number from which order listings come back empty.
    pub empty_from_page: Mutex<Option<u32>>,
    lookups_in_flight: AtomicUsize,
    pub max_lookups_in_flight: AtomicUsize,
    pub order_queries: Mutex<Vec<OrderQuery>>,
}

impl MockApi {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn with_orders(per_query: usize, total: u64) -> Arc<Self> {
        let api = Self::default();
        api.orders_per_query.store(per_query, Ordering::SeqCst);
        api.total.store(total, Ordering::SeqCst);
        Arc::new(api)
    }

    pub fn set_catalog_delay(&self, delay: Duration) {
        *self.catalog_delay.lock().unwrap() = delay;
    }

    pub fn set_lookup_delay(&self, delay: Duration) {
        *self.lookup_delay.lock().unwrap() = delay;
    }

    pub fn count(counter: &AtomicUsize) -> usize {
        counter.load(Ordering::SeqCst)
    }

    pub fn pages_requested(&self) -> Vec<u32> {
        let mut pages: Vec<u32> = self
            .order_queries
            .lock()
            .unwrap()
            .iter()
            .map(|q| q.page_num)
            .collect();
        pages.dedup();
        pages
    }

    async fn catalog_pause(&self) {
        let delay = *self.catalog_delay.lock().unwrap();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}

/// Order id the mock hands out for the `index`-th record of `query`.
pub fn order_id(query: &OrderQuery, index: usize) -> String {
    let bucket = match query.state {
        LifecycleBucket::Uncompleted => "open",
        LifecycleBucket::CompletedOrCancelled => "closed",
    };
    format!("{}-{}-{}-{}", bucket, query.side, query.page_num, index)
}

/// Adapter wired to `api` with the given lookup concurrency.
pub fn fameex_with(api: &Arc<MockApi>, lookup_concurrency: usize) -> Fameex {
    Fameex::builder()
        .lookup_concurrency(lookup_concurrency)
        .api(Arc::clone(api) as Arc<dyn FameexApi>)
        .build()
        .unwrap()
}

#[async_trait]
impl FameexApi for MockApi {
    async fn currencies(&self) -> Result<Value> {
        self.currencies_calls.fetch_add(1, Ordering::SeqCst);
        self.catalog_pause().await;
        if self.fail_currencies.load(Ordering::SeqCst) {
            return Err(Error::network("connection reset"));
        }
        Ok(json!({"code": 0, "data": {
            "btc": {
                "name": "btc",
                "min_withdraw": "0.001",
                "max_withdraw": "100",
                "can_withdraw": true,
                "can_deposit": true,
                "unified_cryptoasset_id": 1
            },
            "usdt": {
                "name": "Tether USD",
                "min_withdraw": "10",
                "max_withdraw": "1000000",
                "can_withdraw": true,
                "can_deposit": false,
                "unified_cryptoasset_id": 825
            }
        }}))
    }

    async fn currencies_with_network(&self) -> Result<Value> {
        self.networks_calls.fetch_add(1, Ordering::SeqCst);
        self.catalog_pause().await;
        Ok(json!({"code": 0, "data": {"list": [
            {"currency": "BTC", "currencyDetail": {"BTC": {"chain": "BTC"}}},
            {"currency": "usdt", "currencyDetail": {"ETH": {}, "TRX": {}, "Kava": {}}}
        ]}}))
    }

    async fn markets(&self) -> Result<Value> {
        self.markets_calls.fetch_add(1, Ordering::SeqCst);
        self.catalog_pause().await;
        if self.empty_markets.load(Ordering::SeqCst) {
            return Ok(json!({"code": 0, "data": []}));
        }
        Ok(json!({"code": 0, "data": [
            {"pair": "BTC_USDT", "amountPrecision": 6, "pricePrecision": 2},
            {"pair": "ETH_USDT", "amountPrecision": 4, "pricePrecision": 2}
        ]}))
    }

    async fn balances(&self) -> Result<Value> {
        self.balances_calls.fetch_add(1, Ordering::SeqCst);
        Ok(json!({"code": 0, "data": [
            {"walletType": "spot", "list": [
                {"currency": "BTC", "available": "0", "hold": "0", "total": "0"},
                {"currency": "USDT", "available": "150.5", "hold": "49.5", "total": "200"}
            ]},
            {"walletType": "futures", "list": [
                {"currency": "USDT", "available": "1", "hold": "0", "total": "1"}
            ]}
        ]}))
    }

    async fn orders(&self, query: &OrderQuery) -> Result<Value> {
        self.orders_calls.fetch_add(1, Ordering::SeqCst);
        self.order_queries.lock().unwrap().push(query.clone());

        let empty_from = *self.empty_from_page.lock().unwrap();
        let per_query = match empty_from {
            Some(page) if query.page_num >= page => 0,
            _ => self.orders_per_query.load(Ordering::SeqCst),
        };
        let state = match query.state {
            LifecycleBucket::Uncompleted => 1,
            LifecycleBucket::CompletedOrCancelled => 3,
        };
        let orders: Vec<Value> = (0..per_query)
            .map(|i| {
                json!({
                    "orderId": order_id(query, i),
                    "side": query.side.as_str(),
                    "orderType": 1,
                    "state": state,
                    "createTime": 1_700_000_000_000_i64,
                    "money": "2",
                    "filledAmount": "0.5"
                })
            })
            .collect();
        Ok(json!({"code": 0, "data": {"orders": orders}}))
    }

    async fn transaction_details(&self, query: &TradeQuery) -> Result<Value> {
        if query.order_id.is_none() {
            self.total_calls.fetch_add(1, Ordering::SeqCst);
            return Ok(json!({"code": 0, "data": {
                "total": self.total.load(Ordering::SeqCst),
                "trades": []
            }}));
        }

        self.lookup_calls.fetch_add(1, Ordering::SeqCst);
        let now = self.lookups_in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_lookups_in_flight.fetch_max(now, Ordering::SeqCst);
        let delay = *self.lookup_delay.lock().unwrap();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        self.lookups_in_flight.fetch_sub(1, Ordering::SeqCst);

        if self.fail_lookups.load(Ordering::SeqCst) {
            return Err(Error::timeout("trade lookup timed out"));
        }
        Ok(json!({"code": 0, "data": {"total": 1, "trades": [{"price": "42000.5"}]}}))
    }
}
