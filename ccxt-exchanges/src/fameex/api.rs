//! FameEX API surface consumed by the adapter.
//!
//! Every method returns the raw vendor envelope (`{"code": .., "data": ..}`)
//! with vendor error envelopes already turned into errors. The adapter
//! logic only ever talks to this trait, so tests can swap in a mock.

use async_trait::async_trait;
use ccxt_core::Result;
use ccxt_core::types::OrderSide;
use serde_json::Value;

use super::codes::{LifecycleBucket, VendorOrderType};

/// Parameters of one order listing request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderQuery {
    /// Base coin, uppercase
    pub coin1: String,
    /// Quote coin, uppercase
    pub coin2: String,
    /// Side filter
    pub side: OrderSide,
    /// Order types to include
    pub order_types: Vec<VendorOrderType>,
    /// Lifecycle bucket filter
    pub state: LifecycleBucket,
    /// 1-based page number
    pub page_num: u32,
    /// Page size
    pub page_size: u32,
}

/// Parameters of one transaction details request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TradeQuery {
    /// Base coin, uppercase
    pub coin1: String,
    /// Quote coin, uppercase
    pub coin2: String,
    /// 1-based page number
    pub page_num: u32,
    /// Page size
    pub page_size: u32,
    /// Restricts the listing to trades of one order
    pub order_id: Option<String>,
}

/// Raw FameEX endpoints.
#[async_trait]
pub trait FameexApi: Send + Sync {
    /// Base currency list keyed by vendor coin id.
    async fn currencies(&self) -> Result<Value>;

    /// Currency to supported network list.
    async fn currencies_with_network(&self) -> Result<Value>;

    /// Spot market list.
    async fn markets(&self) -> Result<Value>;

    /// Balances of every wallet.
    async fn balances(&self) -> Result<Value>;

    /// One page of orders matching `query`.
    async fn orders(&self, query: &OrderQuery) -> Result<Value>;

    /// Trade listing with the vendor-reported total.
    async fn transaction_details(&self, query: &TradeQuery) -> Result<Value>;
}
