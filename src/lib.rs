//! # CCXT FameEX
//!
//! FameEX spot adapter with a vendor-neutral, ccxt-style interface.
//!
//! ## Features
//!
//! - **Async/Await**: Built on tokio
//! - **Catalog caching**: Currency and market catalogs with single-flight refresh
//! - **Order history**: Paginated reconstruction of a pair's orders with execution prices
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ccxt_fameex::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     init_logging(&LogConfig::default());
//!
//!     let fameex = Fameex::builder()
//!         .api_key("your_api_key")
//!         .secret("your_secret")
//!         .build()?;
//!
//!     if let Some(orders) = fameex.get_open_orders("btc_usdt").await {
//!         println!("{} orders", orders.len());
//!     }
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

// Re-export core types and traits
pub use ccxt_core::{
    error::{Error, Result},
    types::*,
};

// Re-export exchange implementations
pub use ccxt_exchanges::fameex;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use ccxt_exchanges::prelude::*;
}
