//! Shared transport configuration.

use crate::credentials::SecretString;

/// Outbound HTTP proxy.
#[derive(Debug, Clone)]
pub struct ProxyConfig {
    /// Proxy URL (e.g., "http://127.0.0.1:8080").
    pub url: String,
    /// Optional username for basic auth.
    pub username: Option<String>,
    /// Optional password for basic auth (zeroed on drop).
    pub password: Option<SecretString>,
}

impl ProxyConfig {
    /// Proxy without authentication.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            username: None,
            password: None,
        }
    }

    /// Adds basic-auth credentials.
    #[must_use]
    pub fn with_credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.username = Some(username.into());
        self.password = Some(SecretString::new(password));
        self
    }
}
