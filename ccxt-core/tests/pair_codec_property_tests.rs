//! Property-based tests for the pair codec.

use ccxt_core::symbol::{CanonicalPair, PAIR_SEPARATORS, PairCodec, SymbolError};
use proptest::prelude::*;

/// Generator for coin tickers in mixed case
fn arb_coin() -> impl Strategy<Value = String> {
    "[A-Za-z0-9]{1,10}"
}

fn arb_separator() -> impl Strategy<Value = char> {
    prop::sample::select(PAIR_SEPARATORS.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Every separator yields the same canonical pair.
    #[test]
    fn prop_separator_insensitive(coin1 in arb_coin(), coin2 in arb_coin(), a in arb_separator(), b in arb_separator()) {
        let left = PairCodec::normalize(&format!("{coin1}{a}{coin2}")).unwrap();
        let right = PairCodec::normalize(&format!("{coin1}{b}{coin2}")).unwrap();
        prop_assert_eq!(&left, &right);
        prop_assert_eq!(&left.coin1, &coin1.to_uppercase());
        prop_assert_eq!(&left.coin2, &coin2.to_uppercase());
    }

    /// Normalizing the readable form gives back the same pair.
    #[test]
    fn prop_idempotent(coin1 in arb_coin(), coin2 in arb_coin(), sep in arb_separator()) {
        let pair = PairCodec::normalize(&format!("{coin1}{sep}{coin2}")).unwrap();
        prop_assert_eq!(PairCodec::normalize(&pair.pair_readable).unwrap(), pair.clone());
        prop_assert_eq!(PairCodec::normalize(&pair.pair_plain).unwrap(), pair.clone());
        prop_assert_eq!(PairCodec::normalize(&pair.pair).unwrap(), pair);
    }

    /// The four representations agree with each other.
    #[test]
    fn prop_representations_consistent(coin1 in arb_coin(), coin2 in arb_coin()) {
        let pair: CanonicalPair = format!("{coin1}-{coin2}").parse().unwrap();
        prop_assert_eq!(pair.pair_readable.replace('/', "_"), pair.pair_plain.clone());
        prop_assert_eq!(pair.pair_plain.to_lowercase(), pair.pair.clone());
        prop_assert_eq!(pair.to_string(), pair.pair_readable);
    }

    /// Three tokens never normalize.
    #[test]
    fn prop_three_tokens_rejected(a in arb_coin(), b in arb_coin(), c in arb_coin(), sep in arb_separator()) {
        let raw = format!("{a}{sep}{b}{sep}{c}");
        prop_assert_eq!(PairCodec::normalize(&raw), Err(SymbolError::MalformedPair(raw.clone())));
    }

    /// A single token never normalizes.
    #[test]
    fn prop_single_token_rejected(coin in arb_coin()) {
        prop_assert!(!PairCodec::is_valid(&coin));
    }
}

#[test]
fn test_spec_examples() {
    for raw in ["btc-usdt", "BTC_USDT", "Btc/Usdt"] {
        let pair = PairCodec::normalize(raw).unwrap();
        assert_eq!(pair.pair_readable, "BTC/USDT");
        assert_eq!(pair.pair_plain, "BTC_USDT");
        assert_eq!(pair.coin1, "BTC");
        assert_eq!(pair.coin2, "USDT");
    }
}

#[test]
fn test_malformed_inputs() {
    assert_eq!(PairCodec::normalize("  "), Err(SymbolError::EmptySymbol));
    assert!(PairCodec::normalize("_USDT").is_err());
    assert!(PairCodec::normalize("BTC-").is_err());
    assert!(PairCodec::normalize("BTCUSDT").is_err());
}
