//! Local bearer-token expiry heuristic.
//!
//! Decodes the payload segment of a JWT-shaped token and checks its `exp`
//! claim against the current time plus a refresh margin. This performs no
//! network call and no signature verification; it exists so callers can
//! decide "this token needs a refresh" without a round-trip, never to make
//! authorization decisions.

use base64::Engine;
use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};
use serde_json::Value;

/// Tokens expiring within this margin are treated as already invalid
/// ("expiring soon, needs refresh").
const EXPIRY_MARGIN_MS: i64 = 5 * 60 * 1000;

/// Decodes the payload (middle) segment of a token.
///
/// Returns the decoded JSON object, or None when the token is empty, is not
/// a three-part dot-delimited structure, or its payload is not valid
/// base64/JSON. Intended for inspection and debugging only.
pub fn decode_token(token: &str) -> Option<Value> {
    if token.is_empty() {
        return None;
    }

    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() != 3 {
        return None;
    }

    let bytes = decode_base64(parts[1])?;
    serde_json::from_slice(&bytes).ok()
}

/// JWT payloads are base64url without padding; tolerate standard base64 as
/// well since some issuers pad.
fn decode_base64(segment: &str) -> Option<Vec<u8>> {
    URL_SAFE_NO_PAD
        .decode(segment)
        .or_else(|_| STANDARD.decode(segment))
        .ok()
}

/// Checks whether a token is still usable.
///
/// Malformed tokens are invalid. Tokens without an `exp` claim are assumed
/// non-expiring (e.g. administrative tokens) and count as valid. Otherwise
/// the token is valid only while its expiry lies more than five minutes in
/// the future.
pub fn is_token_valid(token: &str) -> bool {
    is_token_valid_at(token, chrono::Utc::now().timestamp_millis())
}

/// Deterministic variant of [`is_token_valid`] for a given clock reading.
pub fn is_token_valid_at(token: &str, now_ms: i64) -> bool {
    let Some(payload) = decode_token(token) else {
        return false;
    };

    let Some(exp_seconds) = payload.get("exp").and_then(Value::as_i64) else {
        // No expiry claim: assumed non-expiring.
        return true;
    };

    // Saturate on absurd `exp` claims instead of overflowing: a huge
    // positive value pins to the far future (valid), a huge negative one
    // to the far past (invalid).
    let expiry_ms = exp_seconds.saturating_mul(1000);
    now_ms.saturating_add(EXPIRY_MARGIN_MS) <= expiry_ms
}
