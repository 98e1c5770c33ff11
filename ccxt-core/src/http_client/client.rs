use crate::error::{Error, Result};
use reqwest::Client;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use serde_json::Value;
use tracing::{instrument, warn};

use super::config::HttpConfig;

/// JSON-over-HTTP client shared by an adapter's REST calls.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    config: HttpConfig,
}

impl HttpClient {
    /// Builds the client.
    ///
    /// # Errors
    ///
    /// Fails when [`HttpConfig::validate`] rejects `config` or the proxy URL
    /// does not parse.
    pub fn new(config: HttpConfig) -> Result<Self> {
        for warning in config.validate()? {
            warn!(%warning, "HTTP configuration warning");
        }

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let mut builder = Client::builder()
            .default_headers(headers)
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .gzip(true);

        if let Some(proxy_config) = &config.proxy {
            let mut proxy = reqwest::Proxy::all(&proxy_config.url)
                .map_err(|e| Error::invalid_request(format!("Invalid proxy URL: {e}")))?;
            if let (Some(user), Some(password)) = (&proxy_config.username, &proxy_config.password)
            {
                proxy = proxy.basic_auth(user, password.expose_secret());
            }
            builder = builder.proxy(proxy);
        }

        let client = builder
            .build()
            .map_err(|e| Error::network(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self { client, config })
    }

    /// Settings the client was built with.
    pub fn config(&self) -> &HttpConfig {
        &self.config
    }

    /// Sends a GET and decodes the JSON body.
    ///
    /// The configured timeout bounds the whole exchange, body included.
    ///
    /// # Errors
    ///
    /// Transport failures and non-2xx statuses map onto [`Error`]. A 2xx
    /// body that is not JSON is a malformed response.
    #[instrument(name = "http_get", skip(self, headers), fields(url = %url))]
    pub async fn get(&self, url: &str, headers: Option<HeaderMap>) -> Result<Value> {
        let limit = self.config.timeout;
        let mut request = self.client.get(url);
        if let Some(headers) = headers {
            request = request.headers(headers);
        }

        let exchange = async {
            let response = request.send().await?;
            self.read_json(response).await
        };

        match tokio::time::timeout(limit, exchange).await {
            Ok(result) => result,
            Err(_) => {
                warn!(timeout_ms = %limit.as_millis(), "GET timed out");
                Err(Error::timeout(format!(
                    "GET {url} timed out after {}ms",
                    limit.as_millis()
                )))
            }
        }
    }
}
