//! Property tests for the FameEX order code tables.

#![allow(clippy::disallowed_methods)]

use ccxt_core::types::{OrderStatus, OrderType};
use ccxt_exchanges::fameex::codes::{
    VendorOrderState, VendorOrderType, map_status, map_type, parse_side,
};
use proptest::prelude::*;
use serde_json::json;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn prop_unknown_state_codes_map_to_unknown(code in any::<i64>()) {
        prop_assume!(!(1..=7).contains(&code));
        prop_assert_eq!(map_status(code), OrderStatus::Unknown);
    }

    #[test]
    fn prop_unknown_type_codes_map_to_unknown(code in any::<i64>()) {
        prop_assume!(!(1..=5).contains(&code));
        prop_assert_eq!(map_type(code), OrderType::Unknown);
    }

    #[test]
    fn prop_codes_survive_parsing(code in any::<i64>()) {
        prop_assert_eq!(VendorOrderState::from_code(code).code(), code);
        prop_assert_eq!(VendorOrderType::from_code(code).code(), code);
    }

    #[test]
    fn prop_numeric_sides_outside_range_rejected(code in any::<i64>()) {
        prop_assume!(code != 1 && code != 2);
        prop_assert!(parse_side(&json!(code)).is_none());
    }
}

#[test]
fn test_documented_codes_are_never_unknown() {
    for state in VendorOrderState::ALL {
        assert_ne!(map_status(state.code()), OrderStatus::Unknown);
    }
    for order_type in VendorOrderType::ALL {
        assert_ne!(map_type(order_type.code()), OrderType::Unknown);
    }
}

#[test]
fn test_status_table() {
    let expected = [
        (1, OrderStatus::New),
        (2, OrderStatus::PartiallyFilled),
        (3, OrderStatus::Filled),
        (4, OrderStatus::Cancelled),
        (5, OrderStatus::Cancelled),
        (6, OrderStatus::Cancelled),
        (7, OrderStatus::New),
    ];
    for (code, status) in expected {
        assert_eq!(map_status(code), status, "state code {code}");
    }
}
