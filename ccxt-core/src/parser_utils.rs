//! Common parser utilities for exchange data parsing.
//!
//! Vendor payloads are loose about types: amounts come as strings or
//! numbers, ids as numbers or strings, flags as booleans or `0`/`1`. These
//! helpers accept all of those spellings.

use crate::error::{Error, ParseError, Result};
use rust_decimal::Decimal;
use rust_decimal::prelude::FromStr;
use serde_json::Value;

/// Parse a `Decimal` value from JSON (supports both string and number formats).
///
/// Numbers go through their textual form so `0.001` stays exact. Empty
/// strings are treated as `None`.
pub fn parse_decimal(data: &Value, key: &str) -> Option<Decimal> {
    data.get(key).and_then(value_to_decimal)
}

/// Converts a single JSON value into a `Decimal`.
pub fn value_to_decimal(v: &Value) -> Option<Decimal> {
    match v {
        Value::Number(n) => {
            let text = n.to_string();
            Decimal::from_str(&text)
                .or_else(|_| Decimal::from_scientific(&text))
                .ok()
        }
        Value::String(s) if !s.trim().is_empty() => Decimal::from_str(s.trim())
            .or_else(|_| Decimal::from_scientific(s.trim()))
            .ok(),
        _ => None,
    }
}

/// Like [`parse_decimal`] but a missing or unparsable field is an error.
///
/// # Errors
///
/// Returns [`ParseError::MissingField`] when the key is absent and
/// [`ParseError::InvalidValue`] when it does not hold a number.
pub fn require_decimal(data: &Value, key: &'static str) -> Result<Decimal> {
    match data.get(key) {
        None | Some(Value::Null) => Err(Error::from(ParseError::missing_field(key))),
        Some(v) => value_to_decimal(v).ok_or_else(|| {
            Error::from(ParseError::invalid_value(key, format!("not a number: {v}")))
        }),
    }
}

/// Parse a timestamp from JSON (supports both string and number formats).
pub fn parse_timestamp(data: &Value, key: &str) -> Option<i64> {
    data.get(key).and_then(|v| {
        v.as_i64()
            .or_else(|| v.as_str().and_then(|s| s.trim().parse::<i64>().ok()))
    })
}

/// Parse an integer code from JSON (number or numeric string).
pub fn parse_integer(data: &Value, key: &str) -> Option<i64> {
    parse_timestamp(data, key)
}

/// Parse a string field; numbers are rendered in their JSON form.
pub fn parse_string(data: &Value, key: &str) -> Option<String> {
    match data.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Parse a boolean flag (`true`/`false`, `1`/`0`, `"true"`/`"1"`).
pub fn parse_bool(data: &Value, key: &str) -> Option<bool> {
    match data.get(key)? {
        Value::Bool(b) => Some(*b),
        Value::Number(n) => n.as_i64().map(|i| i != 0),
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "1" => Some(true),
            "false" | "0" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

/// Convert millisecond timestamp to ISO8601 datetime string.
pub fn timestamp_to_datetime(timestamp: i64) -> Option<String> {
    chrono::DateTime::from_timestamp_millis(timestamp)
        .map(|dt| dt.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string())
}
