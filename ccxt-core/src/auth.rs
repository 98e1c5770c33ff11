//! Request signing helpers.
//!
//! FameEX signs private requests with HMAC-SHA256 over the canonical
//! request string and expects the digest as lowercase hex.

use crate::error::{Error, Result};
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Signs `message` with `secret`, returning the hex-encoded HMAC-SHA256.
///
/// # Errors
///
/// Returns an authentication error if the key is rejected by the MAC
/// implementation.
///
/// # Example
///
/// ```rust
/// use ccxt_core::auth::hmac_sign;
///
/// let sig = hmac_sign("message", "secret").unwrap();
/// assert_eq!(sig.len(), 64);
/// ```
pub fn hmac_sign(message: &str, secret: &str) -> Result<String> {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .map_err(|e| Error::authentication(format!("Invalid HMAC key: {e}")))?;
    mac.update(message.as_bytes());
    Ok(hex::encode(mac.finalize().into_bytes()))
}

/// Canonical string signed for a request: `timestamp + METHOD + path[?query]`.
pub fn signing_payload(timestamp: i64, method: &str, path_and_query: &str) -> String {
    format!("{}{}{}", timestamp, method.to_uppercase(), path_and_query)
}
