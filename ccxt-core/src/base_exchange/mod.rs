//! Base exchange implementation
//!
//! Provides core functionality shared by exchange adapters:
//! - Currency and market catalog caching with single-flight refresh
//! - API configuration and transport setup

mod config;
mod metadata_cache;

pub use config::{ExchangeConfig, ExchangeConfigBuilder};
pub use metadata_cache::{Catalog, CatalogLoad, MetadataCache, RefreshGuard, RefreshPolicy};

use crate::capability::Capabilities;
use crate::error::{Error, Result};
use crate::http_client::{HttpClient, HttpConfig};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// Base exchange implementation
#[derive(Debug)]
pub struct BaseExchange {
    /// Exchange configuration
    pub config: ExchangeConfig,
    /// HTTP client for API requests
    pub http_client: HttpClient,
    /// Currency and market catalogs, shared with clones of the adapter
    pub metadata: Arc<MetadataCache>,
    /// Exchange capability flags
    pub capabilities: Capabilities,
}

impl BaseExchange {
    /// Creates a new exchange instance with the default refresh policy.
    pub fn new(config: ExchangeConfig) -> Result<Self> {
        Self::with_policy(config, RefreshPolicy::default())
    }

    /// Creates a new exchange instance.
    pub fn with_policy(config: ExchangeConfig, policy: RefreshPolicy) -> Result<Self> {
        info!("Initializing exchange: {}", config.id);

        if config.timeout.is_zero() {
            return Err(Error::invalid_request("timeout cannot be zero"));
        }
        if config.connect_timeout.is_zero() {
            return Err(Error::invalid_request("connect_timeout cannot be zero"));
        }

        if config.timeout > Duration::from_secs(300) {
            warn!(
                timeout_secs = config.timeout.as_secs(),
                "Request timeout exceeds 5 minutes"
            );
        }

        let http_client = HttpClient::new(Self::http_config(&config))?;

        Ok(Self {
            config,
            http_client,
            metadata: Arc::new(MetadataCache::new(policy)),
            capabilities: Capabilities::empty(),
        })
    }

    fn http_config(config: &ExchangeConfig) -> HttpConfig {
        let defaults = HttpConfig::default();
        HttpConfig {
            timeout: config.timeout,
            connect_timeout: config.connect_timeout,
            verbose: config.verbose,
            user_agent: config.user_agent.clone().unwrap_or(defaults.user_agent),
            proxy: config.proxy.clone(),
            ..defaults
        }
    }

    /// Sets the capability flags advertised by the adapter.
    pub fn with_capabilities(mut self, capabilities: Capabilities) -> Self {
        self.capabilities = capabilities;
        self
    }
}
