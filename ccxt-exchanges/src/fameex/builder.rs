//! FameEX exchange builder pattern implementation.
//!
//! Provides a fluent API for constructing FameEX exchange instances.

use super::{Fameex, FameexApi, FameexOptions};
use ccxt_core::base_exchange::RefreshPolicy;
use ccxt_core::config::ProxyConfig;
use ccxt_core::{ExchangeConfig, Result, SecretString};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Builder for creating FameEX exchange instances.
///
/// # Example
///
/// ```no_run
/// use ccxt_exchanges::fameex::FameexBuilder;
///
/// let fameex = FameexBuilder::new()
///     .api_key("your-api-key")
///     .secret("your-secret")
///     .timeout_secs(15)
///     .lookup_concurrency(4)
///     .build()
///     .unwrap();
/// ```
#[derive(Clone)]
pub struct FameexBuilder {
    /// Exchange configuration
    config: ExchangeConfig,
    /// FameEX-specific options
    options: FameexOptions,
    /// Injected upstream API, replacing the REST client
    api: Option<Arc<dyn FameexApi>>,
}

impl fmt::Debug for FameexBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FameexBuilder")
            .field("config", &self.config)
            .field("options", &self.options)
            .field("custom_api", &self.api.is_some())
            .finish()
    }
}

impl Default for FameexBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl FameexBuilder {
    /// Creates a new builder with default configuration.
    pub fn new() -> Self {
        Self {
            config: ExchangeConfig {
                id: "fameex".to_string(),
                name: "FameEX".to_string(),
                ..Default::default()
            },
            options: FameexOptions::default(),
            api: None,
        }
    }

    /// Sets the API key for authentication.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.config.api_key = Some(SecretString::new(key));
        self
    }

    /// Sets the API secret for authentication.
    pub fn secret(mut self, secret: impl Into<String>) -> Self {
        self.config.secret = Some(SecretString::new(secret));
        self
    }

    /// Sets the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Sets the request timeout in seconds.
    pub fn timeout_secs(mut self, seconds: u64) -> Self {
        self.config.timeout = Duration::from_secs(seconds);
        self
    }

    /// Sets the TCP connection timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.config.connect_timeout = timeout;
        self
    }

    /// Sets the HTTP proxy configuration.
    pub fn proxy(mut self, proxy: ProxyConfig) -> Self {
        self.config.proxy = Some(proxy);
        self
    }

    /// Sets the HTTP proxy URL.
    pub fn proxy_url(mut self, url: impl Into<String>) -> Self {
        self.config.proxy = Some(ProxyConfig::new(url));
        self
    }

    /// Sets a custom user agent string.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = Some(user_agent.into());
        self
    }

    /// Enables or disables verbose transport logging.
    pub fn verbose(mut self, enabled: bool) -> Self {
        self.config.verbose = enabled;
        self
    }

    /// Points the REST client at another base URL.
    pub fn rest_url(mut self, url: impl Into<String>) -> Self {
        self.config.url_overrides.insert("rest".to_string(), url.into());
        self
    }

    /// Sets the page size of order listing queries.
    pub fn order_page_size(mut self, size: u32) -> Self {
        self.options.order_page_size = size;
        self
    }

    /// Sets the maximum number of pages `get_open_orders` fetches.
    pub fn max_order_pages(mut self, pages: u32) -> Self {
        self.options.max_order_pages = pages;
        self
    }

    /// Sets how many trade lookups may run at once.
    pub fn lookup_concurrency(mut self, limit: usize) -> Self {
        self.options.lookup_concurrency = limit;
        self
    }

    /// Sets the behavior for catalog requests arriving during a refresh.
    pub fn refresh_policy(mut self, policy: RefreshPolicy) -> Self {
        self.options.refresh_policy = policy;
        self
    }

    /// Sets the wallet partition balances are read from.
    pub fn wallet_type(mut self, wallet_type: impl Into<String>) -> Self {
        self.options.wallet_type = wallet_type.into();
        self
    }

    /// Replaces all FameEX options.
    pub fn options(mut self, options: FameexOptions) -> Self {
        self.options = options;
        self
    }

    /// Uses `api` instead of the REST client.
    pub fn api(mut self, api: Arc<dyn FameexApi>) -> Self {
        self.api = Some(api);
        self
    }

    /// Returns the current configuration.
    pub fn get_config(&self) -> &ExchangeConfig {
        &self.config
    }

    /// Returns the current options.
    pub fn get_options(&self) -> &FameexOptions {
        &self.options
    }

    /// Builds the FameEX exchange instance.
    ///
    /// # Errors
    ///
    /// Returns an error if the options or the transport configuration are
    /// invalid.
    pub fn build(self) -> Result<Fameex> {
        match self.api {
            Some(api) => Fameex::with_api(self.config, self.options, api),
            None => Fameex::new_with_options(self.config, self.options),
        }
    }
}
