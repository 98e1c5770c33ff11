//! CCXT Exchange Implementations
//!
//! Concrete exchange adapters built on top of ccxt-core.
//!
//! # Supported Exchanges
//!
//! - FameEX (spot: catalogs, balances, order history)
//!
//! # Example
//!
//! ```rust,no_run
//! use ccxt_exchanges::fameex::Fameex;
//!
//! # async fn example() -> Result<(), ccxt_core::Error> {
//! let fameex = Fameex::builder()
//!     .api_key("your_api_key")
//!     .secret("your_secret")
//!     .build()?;
//!
//! if let Some(markets) = fameex.get_markets(None, false).await {
//!     println!("Found {} markets", markets.len());
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
// Allow common patterns that are acceptable in this codebase
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::similar_names)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::redundant_closure_for_method_calls)]
#![allow(clippy::redundant_closure)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unused_self)]

// Re-export ccxt-core
pub use ccxt_core;

/// FameEX exchange implementation
pub mod fameex;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::fameex::{Fameex, FameexApi, FameexBuilder, FameexOptions};
    pub use ccxt_core::prelude::*;
}

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
