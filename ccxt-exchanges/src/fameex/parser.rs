//! FameEX data parser module.
//!
//! Converts FameEX envelopes into the canonical records of `ccxt-core`.

use ccxt_core::{
    Result,
    error::{ContextExt, Error, ParseError},
    parser_utils::{
        parse_bool, parse_decimal, parse_integer, parse_string, parse_timestamp, require_decimal,
        timestamp_to_datetime,
    },
    symbol::{CanonicalPair, PairCodec},
    types::{
        BalanceEntry, CurrencyMap, CurrencyMetadata, MarketMap, MarketMetadata, Order, OrderSide,
    },
};
use rust_decimal::Decimal;
use serde_json::Value;
use std::collections::HashMap;
use tracing::warn;

use super::codes::{map_status, map_type, parse_side};
use super::networks::network_code;

/// Returns the `data` member of an envelope.
pub fn envelope_data(response: &Value) -> Result<&Value> {
    match response.get("data") {
        None | Some(Value::Null) => Err(Error::from(ParseError::missing_field("data"))),
        Some(data) => Ok(data),
    }
}

// ============================================================================
// Currencies
// ============================================================================

/// Parses one entry of the currency list.
///
/// `key` is the vendor coin id; its uppercase form becomes the symbol.
pub fn parse_currency(key: &str, data: &Value) -> Result<CurrencyMetadata> {
    let symbol = key.trim().to_uppercase();
    if symbol.is_empty() {
        return Err(Error::from(ParseError::invalid_value(
            "currency",
            "empty coin id",
        )));
    }

    let name = parse_string(data, "name").unwrap_or_else(|| symbol.clone());
    let mut currency = CurrencyMetadata::new(symbol, name);
    currency.withdraw_enabled = parse_bool(data, "can_withdraw").unwrap_or(false);
    currency.deposit_enabled = parse_bool(data, "can_deposit").unwrap_or(false);
    currency.min_withdraw = require_decimal(data, "min_withdraw")?;
    currency.max_withdraw = require_decimal(data, "max_withdraw")?;
    currency.id = parse_integer(data, "unified_cryptoasset_id");
    Ok(currency)
}

/// Parses the currency to network list into uppercase symbol -> network codes.
///
/// Network ids are translated through [`network_code`]; the resulting codes
/// are sorted and deduplicated.
pub fn parse_currency_networks(data: &Value) -> Result<HashMap<String, Vec<String>>> {
    let list = data
        .get("list")
        .and_then(Value::as_array)
        .context("list")?;

    let mut networks = HashMap::with_capacity(list.len());
    for entry in list {
        let Some(symbol) = parse_string(entry, "currency") else {
            warn!(entry = %entry, "Skipping network entry without currency");
            continue;
        };
        let mut codes: Vec<String> = entry
            .get("currencyDetail")
            .and_then(Value::as_object)
            .map(|detail| detail.keys().map(|id| network_code(id)).collect())
            .unwrap_or_default();
        // several vendor ids can share one canonical code
        codes.sort();
        codes.dedup();
        networks.insert(symbol.trim().to_uppercase(), codes);
    }
    Ok(networks)
}

/// Merges the currency list with the network list.
///
/// Records are matched on the uppercase symbol. A currency without network
/// information gets an empty network list; network entries for coins the
/// currency list does not know are dropped.
pub fn parse_currencies(currencies: &Value, networks: &Value) -> Result<CurrencyMap> {
    let entries = envelope_data(currencies)?
        .as_object()
        .ok_or_else(|| {
            Error::from(ParseError::unexpected_shape(
                "data",
                "an object of currencies",
            ))
        })?;
    let mut networks = parse_currency_networks(envelope_data(networks)?)?;

    let mut result = CurrencyMap::with_capacity(entries.len());
    for (key, data) in entries {
        match parse_currency(key, data) {
            Ok(mut currency) => {
                currency.networks = networks.remove(&currency.symbol).unwrap_or_default();
                result.insert(currency.symbol.clone(), currency);
            }
            Err(e) => {
                warn!(coin = %key, error = %e, "Failed to parse currency");
            }
        }
    }
    Ok(result)
}

// ============================================================================
// Markets
// ============================================================================

fn parse_decimals(data: &Value, key: &'static str) -> Result<u32> {
    let value = parse_integer(data, key).context(key)?;
    u32::try_from(value).map_err(|_| {
        Error::from(ParseError::invalid_value(
            key,
            format!("negative precision: {value}"),
        ))
    })
}

/// Parses one market entry.
///
/// `amountPrecision` gives the decimals of coin1, `pricePrecision` those of
/// coin2.
pub fn parse_market(data: &Value) -> Result<MarketMetadata> {
    let raw = parse_string(data, "pair").context("pair")?;
    let pair = PairCodec::normalize(&raw)?;
    let coin1_decimals = parse_decimals(data, "amountPrecision")?;
    let coin2_decimals = parse_decimals(data, "pricePrecision")?;
    Ok(MarketMetadata::new(
        pair.coin1,
        pair.coin2,
        coin1_decimals,
        coin2_decimals,
    ))
}

/// Parses the market list, keyed by readable pair.
pub fn parse_markets(response: &Value) -> Result<MarketMap> {
    let list = envelope_data(response)?.as_array().ok_or_else(|| {
        Error::from(ParseError::unexpected_shape("data", "an array of markets"))
    })?;

    let mut markets = MarketMap::with_capacity(list.len());
    for entry in list {
        match parse_market(entry) {
            Ok(market) => {
                markets.insert(market.pair_readable.clone(), market);
            }
            Err(e) => {
                warn!(entry = %entry, error = %e, "Failed to parse market");
            }
        }
    }
    Ok(markets)
}

// ============================================================================
// Balances
// ============================================================================

/// Parses the balances of one wallet partition.
///
/// The vendor reports every wallet; only the one whose `walletType`
/// equals `wallet_type` is read.
pub fn parse_balances(response: &Value, wallet_type: &str) -> Result<Vec<BalanceEntry>> {
    let wallets = envelope_data(response)?.as_array().ok_or_else(|| {
        Error::from(ParseError::unexpected_shape("data", "an array of wallets"))
    })?;

    let wallet = wallets
        .iter()
        .find(|w| {
            parse_string(w, "walletType").is_some_and(|t| t.eq_ignore_ascii_case(wallet_type))
        })
        .ok_or_else(|| {
            Error::from(ParseError::invalid_value(
                "walletType",
                format!("no {wallet_type} wallet in response"),
            ))
        })?;

    let list = wallet
        .get("list")
        .and_then(Value::as_array)
        .context("list")?;

    list.iter()
        .map(|entry| {
            let code = parse_string(entry, "currency").context("currency")?;
            Ok(BalanceEntry::new(
                code.trim().to_uppercase(),
                require_decimal(entry, "available")?,
                require_decimal(entry, "hold")?,
                require_decimal(entry, "total")?,
            ))
        })
        .collect()
}

// ============================================================================
// Orders and trades
// ============================================================================

/// Order records of one listing page. A `null` list is an empty page.
pub fn parse_order_list(response: &Value) -> Result<Vec<Value>> {
    match envelope_data(response)?.get("orders") {
        None => Err(Error::from(ParseError::missing_field("orders"))),
        Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(orders)) => Ok(orders.clone()),
        Some(_) => Err(Error::from(ParseError::unexpected_shape(
            "data.orders",
            "an array of orders",
        ))),
    }
}

/// Summary of a transaction details listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TradeSummary {
    /// Vendor-reported total number of records
    pub total: u64,
    /// Price of the first trade, if any
    pub price: Option<Decimal>,
}

/// Parses a transaction details listing.
pub fn parse_trade_summary(response: &Value) -> Result<TradeSummary> {
    let data = envelope_data(response)?;
    let total = parse_integer(data, "total").context("total")?;
    let total = u64::try_from(total).map_err(|_| {
        Error::from(ParseError::invalid_value(
            "total",
            format!("negative total: {total}"),
        ))
    })?;

    let price = match data.get("trades") {
        None | Some(Value::Null) => None,
        Some(Value::Array(trades)) => trades.first().and_then(|t| parse_decimal(t, "price")),
        Some(_) => {
            return Err(Error::from(ParseError::unexpected_shape(
                "data.trades",
                "an array of trades",
            )));
        }
    };
    Ok(TradeSummary { total, price })
}

/// Builds a canonical order from a vendor record.
///
/// `fallback_side` is the side the record was queried with, used when the
/// record's own side cannot be read. `price` comes from the trade listing.
pub fn parse_order(
    data: &Value,
    pair: &CanonicalPair,
    fallback_side: OrderSide,
    price: Option<Decimal>,
) -> Result<Order> {
    let order_id = parse_string(data, "orderId").context("orderId")?;
    let side = data
        .get("side")
        .and_then(parse_side)
        .unwrap_or(fallback_side);
    let order_type = map_type(parse_integer(data, "orderType").context("orderType")?);
    let status = map_status(parse_integer(data, "state").context("state")?);
    let timestamp = parse_timestamp(data, "createTime").context("createTime")?;
    let amount = require_decimal(data, "money")?;
    let amount_executed = require_decimal(data, "filledAmount")?;

    Ok(Order {
        order_id,
        symbol: pair.pair_readable.clone(),
        symbol_plain: pair.pair_plain.clone(),
        price,
        side,
        order_type,
        timestamp,
        datetime: timestamp_to_datetime(timestamp),
        amount,
        amount_executed,
        // vendor definition, negative until the order is filled
        amount_left: amount_executed - amount,
        status,
    })
}
