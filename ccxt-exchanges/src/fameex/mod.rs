//! FameEX exchange implementation.
//!
//! Spot adapter over the FameEX REST API: cached currency and market
//! catalogs, spot wallet balances and reconstruction of a pair's order list.
//!
//! Public operations follow a best effort contract: failures are logged and
//! surface as `None`. The `try_*` variants return the underlying error
//! instead.

use ccxt_core::base_exchange::RefreshPolicy;
use ccxt_core::capability::Capabilities;
use ccxt_core::{BaseExchange, Error, ExchangeConfig, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

mod account;
pub mod api;
pub mod builder;
pub mod codes;
pub mod error;
mod exchange_impl;
mod metadata;
pub mod networks;
mod orders;
pub mod parser;
pub mod rest;

pub use api::{FameexApi, OrderQuery, TradeQuery};
pub use builder::FameexBuilder;
pub use codes::{LifecycleBucket, VendorOrderState, VendorOrderType, map_status, map_type};
pub use networks::network_code;
pub use rest::FameexRestClient;

/// FameEX exchange structure.
pub struct Fameex {
    /// Base exchange instance.
    base: BaseExchange,
    /// FameEX-specific options.
    options: FameexOptions,
    /// Upstream API.
    api: Arc<dyn FameexApi>,
}

impl fmt::Debug for Fameex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fameex")
            .field("base", &self.base)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

/// FameEX-specific options.
///
/// # Example
///
/// ```rust
/// use ccxt_exchanges::fameex::FameexOptions;
///
/// let options = FameexOptions {
///     lookup_concurrency: 4,
///     ..Default::default()
/// };
/// assert_eq!(options.order_page_size, 500);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FameexOptions {
    /// Page size of each order listing query.
    pub order_page_size: u32,
    /// Upper bound on pages fetched by `get_open_orders`.
    pub max_order_pages: u32,
    /// Maximum number of trade lookups in flight while building one page.
    pub lookup_concurrency: usize,
    /// Behavior for catalog requests arriving during a refresh.
    pub refresh_policy: RefreshPolicy,
    /// Wallet partition balances are read from.
    pub wallet_type: String,
}

impl Default for FameexOptions {
    fn default() -> Self {
        Self {
            order_page_size: 500,
            max_order_pages: 50,
            lookup_concurrency: 10,
            refresh_policy: RefreshPolicy::ReturnNothing,
            wallet_type: "spot".to_string(),
        }
    }
}

impl FameexOptions {
    /// Rejects options the adapter cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.order_page_size == 0 {
            return Err(Error::invalid_request("order_page_size cannot be zero"));
        }
        if self.max_order_pages == 0 {
            return Err(Error::invalid_request("max_order_pages cannot be zero"));
        }
        if self.lookup_concurrency == 0 {
            return Err(Error::invalid_request("lookup_concurrency cannot be zero"));
        }
        if self.wallet_type.trim().is_empty() {
            return Err(Error::invalid_request("wallet_type cannot be empty"));
        }
        Ok(())
    }
}

/// FameEX API URLs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FameexUrls {
    /// REST API base URL.
    pub rest: String,
}

impl FameexUrls {
    /// Production URLs.
    pub fn production() -> Self {
        Self {
            rest: "https://api.fameex.com".to_string(),
        }
    }

    /// Production URLs with the `"rest"` override of `config` applied.
    pub fn from_config(config: &ExchangeConfig) -> Self {
        let mut urls = Self::production();
        if let Some(rest) = config.url_overrides.get("rest") {
            urls.rest = rest.trim_end_matches('/').to_string();
        }
        urls
    }
}

impl Fameex {
    /// Operations the adapter supports.
    pub const FEATURES: Capabilities = Capabilities::FETCH_MARKETS
        .union(Capabilities::FETCH_CURRENCIES)
        .union(Capabilities::FETCH_BALANCE)
        .union(Capabilities::FETCH_OPEN_ORDERS)
        .union(Capabilities::FETCH_ORDERS);

    /// Creates a new FameEX instance using the builder pattern.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use ccxt_exchanges::fameex::Fameex;
    ///
    /// let fameex = Fameex::builder()
    ///     .api_key("your-api-key")
    ///     .secret("your-secret")
    ///     .build()
    ///     .unwrap();
    /// ```
    pub fn builder() -> FameexBuilder {
        FameexBuilder::new()
    }

    /// Creates a new FameEX instance talking to the REST API.
    pub fn new(config: ExchangeConfig) -> Result<Self> {
        Self::new_with_options(config, FameexOptions::default())
    }

    /// Creates a new FameEX instance with custom options.
    pub fn new_with_options(config: ExchangeConfig, options: FameexOptions) -> Result<Self> {
        let base = Self::base_exchange(config, &options)?;
        let mut client =
            FameexRestClient::new(base.http_client.clone(), FameexUrls::from_config(&base.config));
        if let (Some(key), Some(secret)) = (&base.config.api_key, &base.config.secret) {
            client = client.with_credentials(key.clone(), secret.clone());
        }
        Ok(Self {
            base,
            options,
            api: Arc::new(client),
        })
    }

    /// Creates a new FameEX instance on top of any [`FameexApi`].
    pub fn with_api(
        config: ExchangeConfig,
        options: FameexOptions,
        api: Arc<dyn FameexApi>,
    ) -> Result<Self> {
        let base = Self::base_exchange(config, &options)?;
        Ok(Self { base, options, api })
    }

    fn base_exchange(config: ExchangeConfig, options: &FameexOptions) -> Result<BaseExchange> {
        options.validate()?;
        if config.sandbox {
            return Err(Error::not_implemented("FameEX has no sandbox environment"));
        }
        Ok(BaseExchange::with_policy(config, options.refresh_policy)?
            .with_capabilities(Self::FEATURES))
    }

    /// Returns a reference to the base exchange.
    pub fn base(&self) -> &BaseExchange {
        &self.base
    }

    /// Returns the FameEX options.
    pub fn options(&self) -> &FameexOptions {
        &self.options
    }

    /// Returns the upstream API.
    pub fn api(&self) -> &Arc<dyn FameexApi> {
        &self.api
    }

    /// Returns the API URLs.
    pub fn urls(&self) -> FameexUrls {
        FameexUrls::from_config(&self.base.config)
    }

    /// Static descriptor of supported operations.
    ///
    /// ```rust
    /// use ccxt_exchanges::fameex::Fameex;
    ///
    /// let fameex = Fameex::builder().build().unwrap();
    /// assert!(fameex.features().has("fetchOpenOrders"));
    /// assert!(!fameex.features().has("createOrder"));
    /// ```
    pub fn features(&self) -> Capabilities {
        self.base.capabilities
    }

    /// Loads both catalogs concurrently.
    ///
    /// A catalog whose refresh is already in flight is left to that refresh.
    pub async fn initialize(&self) -> Result<()> {
        futures::try_join!(
            self.try_get_currencies(None, false),
            self.try_get_markets(None, false)
        )?;
        Ok(())
    }
}
