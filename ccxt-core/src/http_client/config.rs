use crate::config::ProxyConfig;
use crate::error::{Error, Result};
use std::time::Duration;

/// Longest request timeout accepted.
const MAX_TIMEOUT: Duration = Duration::from_secs(300);

/// Transport settings for [`HttpClient`](super::HttpClient).
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Bound on one GET, body included
    pub timeout: Duration,
    /// Bound on establishing the TCP/TLS connection
    pub connect_timeout: Duration,
    /// Log a preview of every response body at debug level
    pub verbose: bool,
    /// User-Agent sent with every request
    pub user_agent: String,
    /// Optional outbound proxy
    pub proxy: Option<ProxyConfig>,
    /// Largest response body accepted, in bytes
    pub max_response_size: usize,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            verbose: false,
            user_agent: format!("ccxt-fameex/{}", env!("CARGO_PKG_VERSION")),
            proxy: None,
            // full currency catalogs run to a few hundred KB
            max_response_size: 8 * 1024 * 1024,
        }
    }
}

impl HttpConfig {
    /// Checks the settings, returning warnings for legal but odd values.
    ///
    /// # Errors
    ///
    /// Rejects zero timeouts, a timeout above five minutes and a zero size
    /// limit.
    ///
    /// ```rust
    /// use ccxt_core::http_client::HttpConfig;
    /// use std::time::Duration;
    ///
    /// assert!(HttpConfig::default().validate().is_ok());
    ///
    /// let invalid = HttpConfig {
    ///     timeout: Duration::from_secs(600),
    ///     ..Default::default()
    /// };
    /// assert!(invalid.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<Vec<String>> {
        if self.timeout.is_zero() || self.connect_timeout.is_zero() {
            return Err(Error::invalid_request("timeouts cannot be zero"));
        }
        if self.timeout > MAX_TIMEOUT {
            return Err(Error::invalid_request(format!(
                "timeout {:?} exceeds {:?}",
                self.timeout, MAX_TIMEOUT
            )));
        }
        if self.max_response_size == 0 {
            return Err(Error::invalid_request("max_response_size cannot be zero"));
        }

        let mut warnings = Vec::new();
        if self.timeout < Duration::from_secs(1) {
            warnings.push(format!(
                "timeout {:?} is shorter than a typical catalog fetch",
                self.timeout
            ));
        }
        Ok(warnings)
    }
}
