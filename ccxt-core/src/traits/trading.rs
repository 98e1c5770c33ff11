//! Trading trait definition.
//!
//! Read side of order management: reconstruction of a pair's order list.

use async_trait::async_trait;

use super::PublicExchange;
use crate::symbol::CanonicalPair;
use crate::types::Order;

/// Order history.
#[async_trait]
pub trait Trading: PublicExchange {
    /// One page of orders across all sides and lifecycle states.
    ///
    /// The page either arrives complete or not at all.
    async fn get_open_orders_page(&self, pair: &CanonicalPair, page_num: u32)
    -> Option<Vec<Order>>;

    /// All orders of a pair, page by page until the reported total is reached.
    async fn get_open_orders(&self, pair: &str) -> Option<Vec<Order>>;
}
