//! FameEX network identifiers.
//!
//! The currency endpoint names chains the way the vendor's wallet backend
//! does. Common ones are translated to the codes used across the crate;
//! anything else passes through unchanged.

/// Vendor chain id (uppercase) to canonical network code.
const NETWORKS: &[(&str, &str)] = &[
    ("BTC", "BTC"),
    ("BITCOIN", "BTC"),
    ("ETH", "ERC20"),
    ("ERC20", "ERC20"),
    ("ETHEREUM", "ERC20"),
    ("TRX", "TRC20"),
    ("TRC20", "TRC20"),
    ("TRON", "TRC20"),
    ("BSC", "BEP20"),
    ("BEP20", "BEP20"),
    ("BNB SMART CHAIN", "BEP20"),
    ("BEP2", "BEP2"),
    ("SOL", "SOL"),
    ("SOLANA", "SOL"),
    ("MATIC", "MATIC"),
    ("POLYGON", "MATIC"),
    ("ARB", "ARBITRUM"),
    ("ARBITRUM", "ARBITRUM"),
    ("ARBITRUM ONE", "ARBITRUM"),
    ("OP", "OPTIMISM"),
    ("OPTIMISM", "OPTIMISM"),
    ("AVAXC", "AVAXC"),
    ("AVAX-C", "AVAXC"),
    ("AVAX C-CHAIN", "AVAXC"),
    ("TON", "TON"),
    ("LTC", "LTC"),
    ("DOGE", "DOGE"),
    ("XRP", "XRP"),
    ("ADA", "ADA"),
    ("DOT", "DOT"),
];

/// Canonical network code for a vendor chain id.
///
/// Lookup is case-insensitive; an unknown id is returned as given.
///
/// ```rust
/// use ccxt_exchanges::fameex::networks::network_code;
///
/// assert_eq!(network_code("eth"), "ERC20");
/// assert_eq!(network_code("KAVA"), "KAVA");
/// ```
pub fn network_code(id: &str) -> String {
    let key = id.trim().to_uppercase();
    NETWORKS
        .iter()
        .find(|(vendor, _)| *vendor == key)
        .map_or_else(|| id.to_string(), |(_, code)| (*code).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_networks() {
        assert_eq!(network_code("TRX"), "TRC20");
        assert_eq!(network_code("bsc"), "BEP20");
        assert_eq!(network_code(" Polygon "), "MATIC");
    }

    #[test]
    fn test_unknown_network_falls_back_to_raw() {
        assert_eq!(network_code("Hedera-HTS"), "Hedera-HTS");
    }
}
