//! FameEX-specific error handling.
//!
//! FameEX wraps every response in an envelope:
//!
//! ```json
//! { "code": 0, "msg": "success", "data": { ... } }
//! ```
//!
//! `code` is `0` or `200` on success and may be sent as a number or a
//! string. Anything else is an error envelope.

use ccxt_core::error::Error;
use serde_json::Value;

fn envelope_code(response: &Value) -> Option<String> {
    match response.get("code")? {
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => Some(s.trim().to_string()),
        _ => None,
    }
}

/// Checks if a FameEX response is an error envelope.
///
/// A response without a `code` field is not treated as an error.
pub fn is_error_response(response: &Value) -> bool {
    envelope_code(response).is_some_and(|code| code != "0" && code != "200")
}

/// Converts a FameEX error envelope into a ccxt-core error.
///
/// ```rust
/// use ccxt_exchanges::fameex::error::parse_error;
/// use serde_json::json;
///
/// let err = parse_error(&json!({"code": 401, "msg": "invalid sign"}));
/// assert!(matches!(err, ccxt_core::Error::Authentication(_)));
/// ```
pub fn parse_error(response: &Value) -> Error {
    let code = envelope_code(response).unwrap_or_else(|| "unknown".to_string());
    let msg = response
        .get("msg")
        .or_else(|| response.get("message"))
        .and_then(Value::as_str)
        .unwrap_or("Unknown error")
        .to_string();

    match code.as_str() {
        "401" | "403" => Error::authentication(msg),
        "400" => Error::invalid_request(msg),
        _ => match response.get("data") {
            Some(data) if !data.is_null() => Error::exchange_with_data(code, msg, data.clone()),
            _ => Error::exchange(code, msg),
        },
    }
}
