//! Order reconstruction for FameEX.
//!
//! The order listing endpoint filters by side and by lifecycle bucket, and
//! does not carry execution prices. One page of a pair's orders is
//! therefore four listing queries plus one trade lookup per order.

use ccxt_core::Result;
use ccxt_core::error::ContextExt;
use ccxt_core::parser_utils::parse_string;
use ccxt_core::symbol::{CanonicalPair, PairCodec};
use ccxt_core::types::{Order, OrderSide};
use futures::{StreamExt, TryStreamExt, stream};
use serde_json::Value;
use tracing::{debug, warn};

use super::api::{OrderQuery, TradeQuery};
use super::codes::{LifecycleBucket, VendorOrderType};
use super::parser::{self, TradeSummary};
use super::Fameex;

impl Fameex {
    async fn list_orders(
        &self,
        pair: &CanonicalPair,
        side: OrderSide,
        state: LifecycleBucket,
        page_num: u32,
    ) -> Result<Vec<(OrderSide, Value)>> {
        let query = OrderQuery {
            coin1: pair.coin1.clone(),
            coin2: pair.coin2.clone(),
            side,
            order_types: VendorOrderType::ALL.to_vec(),
            state,
            page_num,
            page_size: self.options.order_page_size,
        };
        let response = self.api.orders(&query).await?;
        Ok(parser::parse_order_list(&response)?
            .into_iter()
            .map(|record| (side, record))
            .collect())
    }

    async fn trade_summary(
        &self,
        pair: &CanonicalPair,
        order_id: Option<String>,
    ) -> Result<TradeSummary> {
        let query = TradeQuery {
            coin1: pair.coin1.clone(),
            coin2: pair.coin2.clone(),
            page_num: 1,
            page_size: 1,
            order_id,
        };
        let response = self.api.transaction_details(&query).await?;
        parser::parse_trade_summary(&response)
    }

    async fn build_order(
        &self,
        pair: &CanonicalPair,
        side: OrderSide,
        record: Value,
    ) -> Result<Order> {
        let order_id = parse_string(&record, "orderId").context("orderId")?;
        let summary = self
            .trade_summary(pair, Some(order_id.clone()))
            .await
            .with_context(|| format!("price lookup for order {order_id}"))?;
        parser::parse_order(&record, pair, side, summary.price)
    }

    /// One page of a pair's orders, returning the underlying error on failure.
    ///
    /// Orders come back as uncompleted buys, uncompleted sells, completed
    /// buys, then completed sells, each in vendor order. Price lookups run
    /// with at most `lookup_concurrency` requests in flight and keep that
    /// order.
    pub async fn try_get_open_orders_page(
        &self,
        pair: &CanonicalPair,
        page_num: u32,
    ) -> Result<Vec<Order>> {
        let list = move |side, state| self.list_orders(pair, side, state, page_num);
        let (open_buys, open_sells, closed_buys, closed_sells) = futures::try_join!(
            list(OrderSide::Buy, LifecycleBucket::Uncompleted),
            list(OrderSide::Sell, LifecycleBucket::Uncompleted),
            list(OrderSide::Buy, LifecycleBucket::CompletedOrCancelled),
            list(OrderSide::Sell, LifecycleBucket::CompletedOrCancelled)
        )?;

        let records: Vec<(OrderSide, Value)> = open_buys
            .into_iter()
            .chain(open_sells)
            .chain(closed_buys)
            .chain(closed_sells)
            .collect();
        debug!(pair = %pair, page_num, records = records.len(), "Resolving order prices");

        stream::iter(records)
            .map(move |(side, record)| self.build_order(pair, side, record))
            .buffered(self.options.lookup_concurrency.max(1))
            .try_collect()
            .await
    }

    /// One page of a pair's orders across all sides and lifecycle states.
    ///
    /// Any failed query or price lookup fails the whole page.
    pub async fn get_open_orders_page(
        &self,
        pair: &CanonicalPair,
        page_num: u32,
    ) -> Option<Vec<Order>> {
        match self.try_get_open_orders_page(pair, page_num).await {
            Ok(orders) => Some(orders),
            Err(e) => {
                warn!(pair = %pair, page_num, error = %e, "Failed to fetch order page");
                None
            }
        }
    }

    /// All orders of a pair, returning the underlying error on failure.
    ///
    /// Pages are fetched one after another until at least the vendor-reported
    /// total has been collected. Collection also stops on an empty page and
    /// after `max_order_pages` pages. Orders are not deduplicated, so the
    /// result can exceed the total.
    pub async fn try_get_open_orders(&self, pair: &str) -> Result<Vec<Order>> {
        let pair = PairCodec::normalize(pair)?;
        let total = self.trade_summary(&pair, None).await?.total;
        let total = usize::try_from(total).unwrap_or(usize::MAX);

        let mut orders = Vec::new();
        let mut page_num = 1;
        while orders.len() < total {
            if page_num > self.options.max_order_pages {
                warn!(
                    pair = %pair,
                    max_pages = self.options.max_order_pages,
                    collected = orders.len(),
                    total,
                    "Order page limit reached"
                );
                break;
            }
            let page = self.try_get_open_orders_page(&pair, page_num).await?;
            if page.is_empty() {
                debug!(pair = %pair, page_num, collected = orders.len(), total, "Empty order page");
                break;
            }
            orders.extend(page);
            page_num += 1;
        }
        Ok(orders)
    }

    /// All orders of a pair.
    pub async fn get_open_orders(&self, pair: &str) -> Option<Vec<Order>> {
        match self.try_get_open_orders(pair).await {
            Ok(orders) => Some(orders),
            Err(e) => {
                warn!(pair, error = %e, "Failed to fetch orders");
                None
            }
        }
    }
}
