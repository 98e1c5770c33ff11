//! FameEX REST API client.
//!
//! Public catalog endpoints are plain GETs. Account endpoints are signed:
//!
//! - `X-ACCESS-KEY`: API key
//! - `X-ACCESS-TIMESTAMP`: Unix timestamp in milliseconds
//! - `X-ACCESS-SIGN`: hex HMAC-SHA256 of `timestamp + METHOD + path[?query]`

use async_trait::async_trait;
use ccxt_core::auth::{hmac_sign, signing_payload};
use ccxt_core::http_client::HttpClient;
use ccxt_core::{Error, Result, SecretString};
use reqwest::header::{HeaderMap, HeaderValue};
use serde_json::Value;
use tracing::debug;

use super::api::{FameexApi, OrderQuery, TradeQuery};
use super::{FameexUrls, error};

/// Endpoint paths.
pub mod endpoints {
    /// Currency list
    pub const CURRENCIES: &str = "/api/v2/public/currencies";
    /// Currency to network list
    pub const CURRENCIES_WITH_NETWORK: &str = "/api/v2/public/currencies/networks";
    /// Spot markets
    pub const MARKETS: &str = "/api/v2/public/pairs";
    /// Wallet balances
    pub const BALANCES: &str = "/api/v2/account/balances";
    /// Order listing
    pub const ORDERS: &str = "/api/v2/orders";
    /// Trade listing
    pub const TRANSACTION_DETAILS: &str = "/api/v2/orders/trades";
}

/// [`FameexApi`] over HTTP.
#[derive(Debug, Clone)]
pub struct FameexRestClient {
    http: HttpClient,
    urls: FameexUrls,
    api_key: Option<SecretString>,
    secret: Option<SecretString>,
}

impl FameexRestClient {
    /// Creates a client without credentials; only public endpoints work.
    pub fn new(http: HttpClient, urls: FameexUrls) -> Self {
        Self {
            http,
            urls,
            api_key: None,
            secret: None,
        }
    }

    /// Adds credentials for the signed endpoints.
    pub fn with_credentials(mut self, api_key: SecretString, secret: SecretString) -> Self {
        self.api_key = Some(api_key);
        self.secret = Some(secret);
        self
    }

    /// Builds a query string, keeping parameter order.
    ///
    /// ```rust
    /// use ccxt_exchanges::fameex::FameexRestClient;
    ///
    /// let query = FameexRestClient::build_query(&[
    ///     ("base", "BTC".to_string()),
    ///     ("orderTypes", "1,2".to_string()),
    /// ]);
    /// assert_eq!(query, "base=BTC&orderTypes=1%2C2");
    /// ```
    pub fn build_query(params: &[(&str, String)]) -> String {
        params
            .iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Signs a request with the configured secret.
    pub fn sign(&self, timestamp: i64, method: &str, path_and_query: &str) -> Result<String> {
        let (_, secret) = self.credentials()?;
        hmac_sign(
            &signing_payload(timestamp, method, path_and_query),
            secret.expose_secret(),
        )
    }

    fn credentials(&self) -> Result<(&SecretString, &SecretString)> {
        match (&self.api_key, &self.secret) {
            (Some(key), Some(secret)) => Ok((key, secret)),
            (None, _) => Err(Error::authentication("API key is required")),
            (_, None) => Err(Error::authentication("API secret is required")),
        }
    }

    fn check_envelope(response: Value) -> Result<Value> {
        if error::is_error_response(&response) {
            return Err(error::parse_error(&response));
        }
        Ok(response)
    }

    async fn public_get(&self, path: &str) -> Result<Value> {
        let url = format!("{}{}", self.urls.rest, path);
        debug!("FameEX public request: GET {}", url);
        Self::check_envelope(self.http.get(&url, None).await?)
    }

    async fn signed_get(&self, path: &str, params: &[(&str, String)]) -> Result<Value> {
        let (api_key, _) = self.credentials()?;

        let query = Self::build_query(params);
        let path_and_query = if query.is_empty() {
            path.to_string()
        } else {
            format!("{path}?{query}")
        };

        let timestamp = chrono::Utc::now().timestamp_millis();
        let signature = self.sign(timestamp, "GET", &path_and_query)?;

        let mut headers = HeaderMap::new();
        headers.insert(
            "X-ACCESS-KEY",
            HeaderValue::from_str(api_key.expose_secret())
                .map_err(|_| Error::authentication("API key is not a valid header value"))?,
        );
        headers.insert(
            "X-ACCESS-TIMESTAMP",
            HeaderValue::from(timestamp),
        );
        headers.insert(
            "X-ACCESS-SIGN",
            HeaderValue::from_str(&signature)
                .map_err(|e| Error::invalid_request(format!("Invalid signature header: {e}")))?,
        );

        let url = format!("{}{}", self.urls.rest, path_and_query);
        debug!("FameEX private request: GET {}", url);
        Self::check_envelope(self.http.get(&url, Some(headers)).await?)
    }
}

#[async_trait]
impl FameexApi for FameexRestClient {
    async fn currencies(&self) -> Result<Value> {
        self.public_get(endpoints::CURRENCIES).await
    }

    async fn currencies_with_network(&self) -> Result<Value> {
        self.public_get(endpoints::CURRENCIES_WITH_NETWORK).await
    }

    async fn markets(&self) -> Result<Value> {
        self.public_get(endpoints::MARKETS).await
    }

    async fn balances(&self) -> Result<Value> {
        self.signed_get(endpoints::BALANCES, &[]).await
    }

    async fn orders(&self, query: &OrderQuery) -> Result<Value> {
        let order_types = query
            .order_types
            .iter()
            .map(|t| t.code().to_string())
            .collect::<Vec<_>>()
            .join(",");
        let params = [
            ("base", query.coin1.clone()),
            ("quote", query.coin2.clone()),
            ("side", query.side.as_str().to_string()),
            ("orderTypes", order_types),
            ("state", query.state.code().to_string()),
            ("pageNum", query.page_num.to_string()),
            ("pageSize", query.page_size.to_string()),
        ];
        self.signed_get(endpoints::ORDERS, &params).await
    }

    async fn transaction_details(&self, query: &TradeQuery) -> Result<Value> {
        let mut params = vec![
            ("base", query.coin1.clone()),
            ("quote", query.coin2.clone()),
            ("pageNum", query.page_num.to_string()),
            ("pageSize", query.page_size.to_string()),
        ];
        if let Some(order_id) = &query.order_id {
            params.push(("orderId", order_id.clone()));
        }
        self.signed_get(endpoints::TRANSACTION_DETAILS, &params).await
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::disallowed_methods)]
    use super::*;
    use ccxt_core::http_client::HttpConfig;

    fn client() -> FameexRestClient {
        let http = HttpClient::new(HttpConfig::default()).unwrap();
        FameexRestClient::new(http, FameexUrls::production())
    }

    #[test]
    fn test_build_query_keeps_order() {
        let query = FameexRestClient::build_query(&[
            ("b", "2".to_string()),
            ("a", "x y".to_string()),
        ]);
        assert_eq!(query, "b=2&a=x%20y");
        assert_eq!(FameexRestClient::build_query(&[]), "");
    }

    #[test]
    fn test_sign_requires_secret() {
        let err = client().sign(1, "GET", "/api").unwrap_err();
        assert!(matches!(err, Error::Authentication(_)));
    }

    #[test]
    fn test_sign_is_hex_sha256() {
        let client = client().with_credentials(SecretString::new("key"), SecretString::new("secret"));
        let signature = client
            .sign(1_700_000_000_000, "get", "/api/v2/account/balances")
            .unwrap();
        let expected = hmac_sign("1700000000000GET/api/v2/account/balances", "secret").unwrap();
        assert_eq!(signature, expected);
        assert_eq!(signature.len(), 64);
    }

    #[tokio::test]
    async fn test_signed_endpoint_without_key() {
        let err = client().balances().await.unwrap_err();
        assert!(matches!(err, Error::Authentication(_)));
    }
}
