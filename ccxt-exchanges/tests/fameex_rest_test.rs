//! FameEX REST transport against a local mock server.

#![allow(clippy::disallowed_methods)]

use ccxt_core::auth::{hmac_sign, signing_payload};
use ccxt_core::symbol::PairCodec;
use ccxt_core::Error;
use ccxt_exchanges::fameex::rest::endpoints;
use ccxt_exchanges::fameex::Fameex;
use rust_decimal_macros::dec;
use serde_json::json;
use wiremock::matchers::{header_exists, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const API_KEY: &str = "test-key";
const SECRET: &str = "test-secret";

fn public_client(server: &MockServer) -> Fameex {
    Fameex::builder().rest_url(server.uri()).build().unwrap()
}

fn signed_client(server: &MockServer) -> Fameex {
    Fameex::builder()
        .rest_url(server.uri())
        .api_key(API_KEY)
        .secret(SECRET)
        .build()
        .unwrap()
}

async fn mount_catalog(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path(endpoints::CURRENCIES))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 0,
            "msg": "success",
            "data": {
                "btc": {
                    "name": "btc",
                    "min_withdraw": "0.001",
                    "max_withdraw": "100",
                    "can_withdraw": true,
                    "can_deposit": true
                }
            }
        })))
        .expect(1)
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path(endpoints::CURRENCIES_WITH_NETWORK))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": "200",
            "data": {"list": [{"currency": "BTC", "currencyDetail": {"BTC": {}, "BSC": {}}}]}
        })))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_public_catalog_over_http() {
    let server = MockServer::start().await;
    mount_catalog(&server).await;
    let fameex = public_client(&server);

    let currencies = fameex.get_currencies(None, false).await.unwrap();
    let btc = &currencies["BTC"];
    assert_eq!(btc.min_withdraw, dec!(0.001));
    assert_eq!(btc.networks, vec!["BEP20", "BTC"]);

    // served from the cache, the mocks above expect exactly one hit each
    assert!(fameex.get_currencies(Some("BTC"), false).await.is_some());
}

#[tokio::test]
async fn test_markets_over_http() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(endpoints::MARKETS))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 0,
            "data": [{"pair": "ETH_USDT", "amountPrecision": 4, "pricePrecision": 2}]
        })))
        .mount(&server)
        .await;
    let fameex = public_client(&server);

    let eth = fameex.market_info("eth-usdt").await.unwrap();
    assert_eq!(eth.pair_plain, "ETH_USDT");
    assert_eq!(eth.coin2_precision, dec!(0.01));
}

#[tokio::test]
async fn test_error_envelope_becomes_exchange_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(endpoints::MARKETS))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 10010,
            "msg": "service maintenance"
        })))
        .mount(&server)
        .await;
    let fameex = public_client(&server);

    let err = fameex.try_get_markets(None, false).await.unwrap_err();
    match err.root_cause() {
        Error::Exchange(details) => {
            assert_eq!(details.code, "10010");
            assert_eq!(details.message, "service maintenance");
        }
        other => panic!("expected exchange error, got {other:?}"),
    }
    assert!(fameex.get_markets(None, false).await.is_none());
    assert!(fameex.markets().await.is_none());
}

#[tokio::test]
async fn test_http_401_is_authentication_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(endpoints::BALANCES))
        .respond_with(ResponseTemplate::new(401).set_body_string("unauthorized"))
        .mount(&server)
        .await;
    let fameex = signed_client(&server);

    let err = fameex.try_get_balances(false).await.unwrap_err();
    assert!(matches!(err.root_cause(), Error::Authentication(_)));
}

#[tokio::test]
async fn test_signed_request_without_credentials_fails_locally() {
    let server = MockServer::start().await;
    let fameex = public_client(&server);

    let err = fameex.try_get_balances(false).await.unwrap_err();
    assert!(matches!(err.root_cause(), Error::Authentication(_)));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_balances_request_is_signed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(endpoints::BALANCES))
        .and(header_exists("X-ACCESS-KEY"))
        .and(header_exists("X-ACCESS-TIMESTAMP"))
        .and(header_exists("X-ACCESS-SIGN"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 0,
            "data": [{"walletType": "spot", "list": [
                {"currency": "ETH", "available": "1.5", "hold": "0", "total": "1.5"}
            ]}]
        })))
        .expect(1)
        .mount(&server)
        .await;
    let fameex = signed_client(&server);

    let balances = fameex.get_balances(true).await.unwrap();
    assert_eq!(balances.len(), 1);
    assert_eq!(balances[0].free, dec!(1.5));

    let requests = server.received_requests().await.unwrap();
    let request = &requests[0];
    let header = |name: &str| {
        request
            .headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .unwrap()
            .to_string()
    };
    assert_eq!(header("X-ACCESS-KEY"), API_KEY);

    let timestamp: i64 = header("X-ACCESS-TIMESTAMP").parse().unwrap();
    let expected = hmac_sign(
        &signing_payload(timestamp, "GET", request.url.path()),
        SECRET,
    )
    .unwrap();
    assert_eq!(header("X-ACCESS-SIGN"), expected);
}

#[tokio::test]
async fn test_order_page_query_parameters() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(endpoints::ORDERS))
        .and(query_param("base", "BTC"))
        .and(query_param("quote", "USDT"))
        .and(query_param("orderTypes", "1,2,3,4,5"))
        .and(query_param("pageNum", "1"))
        .and(query_param("pageSize", "500"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 0,
            "data": {"orders": null}
        })))
        .expect(4)
        .mount(&server)
        .await;
    let fameex = signed_client(&server);
    let pair = PairCodec::normalize("btc/usdt").unwrap();

    let orders = fameex.get_open_orders_page(&pair, 1).await.unwrap();
    assert!(orders.is_empty());

    let requests = server.received_requests().await.unwrap();
    let mut filters: Vec<(String, String)> = requests
        .iter()
        .map(|r| {
            let param = |key: &str| {
                r.url
                    .query_pairs()
                    .find(|(k, _)| k == key)
                    .map(|(_, v)| v.into_owned())
                    .unwrap()
            };
            (param("side"), param("state"))
        })
        .collect();
    filters.sort();
    assert_eq!(
        filters,
        vec![
            ("buy".to_string(), "1".to_string()),
            ("buy".to_string(), "2".to_string()),
            ("sell".to_string(), "1".to_string()),
            ("sell".to_string(), "2".to_string()),
        ]
    );
}

#[tokio::test]
async fn test_open_orders_over_http() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(endpoints::TRANSACTION_DETAILS))
        .and(query_param("orderId", "42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 0,
            "data": {"total": 1, "trades": [{"price": "3000.25"}]}
        })))
        .with_priority(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(endpoints::TRANSACTION_DETAILS))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 0,
            "data": {"total": 1, "trades": []}
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(endpoints::ORDERS))
        .and(query_param("side", "sell"))
        .and(query_param("state", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 0,
            "data": {"orders": [{
                "orderId": "42",
                "side": 2,
                "orderType": 5,
                "state": 2,
                "createTime": 1_700_000_000_000_i64,
                "money": "1",
                "filledAmount": "0.25"
            }]}
        })))
        .with_priority(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(endpoints::ORDERS))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 0,
            "data": {"orders": []}
        })))
        .mount(&server)
        .await;
    let fameex = signed_client(&server);

    let orders = fameex.get_open_orders("ETH-USDT").await.unwrap();
    assert_eq!(orders.len(), 1);
    let order = &orders[0];
    assert_eq!(order.order_id, "42");
    assert_eq!(order.symbol, "ETH/USDT");
    assert_eq!(order.side, ccxt_core::types::OrderSide::Sell);
    assert_eq!(order.order_type, ccxt_core::types::OrderType::MakerOnly);
    assert_eq!(order.status, ccxt_core::types::OrderStatus::PartiallyFilled);
    assert_eq!(order.price, Some(dec!(3000.25)));
    assert_eq!(order.amount_left, dec!(-0.75));
}
