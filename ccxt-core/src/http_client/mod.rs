//! HTTP transport for the REST adapters.
//!
//! Every FameEX endpoint the adapters call is a JSON GET, so the client
//! exposes exactly that: [`HttpClient::get`] sends once under the configured
//! timeout, caps the body size while streaming and maps non-2xx statuses
//! onto [`Error`](crate::error::Error). Retries are left to the caller.
//!
//! # Example
//!
//! ```rust,no_run
//! use ccxt_core::http_client::{HttpClient, HttpConfig};
//!
//! # async fn run() -> ccxt_core::Result<()> {
//! let client = HttpClient::new(HttpConfig::default())?;
//! let pairs = client.get("https://api.fameex.com/api/v2/public/pairs", None).await?;
//! # Ok(())
//! # }
//! ```

mod body;
mod client;
mod config;


pub use client::HttpClient;
pub use config::HttpConfig;
