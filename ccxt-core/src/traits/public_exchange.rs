//! PublicExchange trait definition.
//!
//! Base trait of the hierarchy: identity and the static capability
//! descriptor. Object safe; requires `Send + Sync`.

use crate::capability::Capabilities;

/// Base trait for all exchange implementations.
///
/// ```rust
/// use ccxt_core::capability::Capabilities;
/// use ccxt_core::traits::PublicExchange;
///
/// struct Catalogs;
///
/// impl PublicExchange for Catalogs {
///     fn id(&self) -> &str { "catalogs" }
///     fn name(&self) -> &str { "Catalog only" }
///     fn capabilities(&self) -> Capabilities { Capabilities::METADATA }
/// }
///
/// let exchange: Box<dyn PublicExchange> = Box::new(Catalogs);
/// assert!(exchange.capabilities().has("fetchMarkets"));
/// ```
pub trait PublicExchange: Send + Sync {
    /// Lowercase unique identifier (e.g., "fameex").
    fn id(&self) -> &str;

    /// Human-readable name.
    fn name(&self) -> &str;

    /// Version of the vendor API the adapter speaks.
    fn version(&self) -> &'static str {
        "v2"
    }

    /// Static descriptor of supported operations.
    fn capabilities(&self) -> Capabilities;

    /// Whether the adapter talks to a sandbox environment.
    fn is_sandbox(&self) -> bool {
        false
    }
}
