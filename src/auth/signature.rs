//! HMAC-SHA384 signature generation for Bitfinex API authentication.
//!
//! Bitfinex private endpoints require a signature computed as:
//! ```text
//! HMAC-SHA384("/api/v2" + path + nonce + body_json, api_secret)
//! ```
//!
//! The hex-encoded signature is sent in the `bfx-signature` header, together
//! with the exact nonce that was signed in `bfx-nonce`. The transmitted body
//! must be byte-identical to the serialization embedded in the payload.

use hmac::{Hmac, Mac};
use sha2::Sha384;

use crate::error::BitfinexError;

type HmacSha384 = Hmac<Sha384>;

/// The API version prefix embedded in every signed payload.
const SIG_PREFIX: &str = "/api/v2";

/// The result of signing a request.
///
/// One signature is computed fresh for every private call and never reused:
/// the `nonce` here is the nonce embedded in `payload` and the one the
/// server must receive in the `bfx-nonce` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthSignature {
    /// The exact string the HMAC was computed over.
    pub payload: String,
    /// Hex-encoded HMAC-SHA384 digest of the payload.
    pub sig: String,
    /// The nonce embedded in the payload.
    pub nonce: u64,
}

/// Sign a private REST request.
///
/// # Arguments
///
/// * `secret` - The API secret
/// * `path` - The endpoint path (e.g., "/auth/r/wallets")
/// * `nonce` - The nonce value for this request
/// * `body_json` - The JSON-serialized request body; an empty body must be
///   serialized as `"{}"`, never as an empty string
///
/// # Example
///
/// ```rust
/// use bitfinex_api_client::auth::sign_request;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let signature = sign_request("api_secret", "/auth/r/wallets", 1234567890, "{}")?;
/// assert_eq!(signature.payload, "/api/v2/auth/r/wallets1234567890{}");
/// # Ok(())
/// # }
/// ```
pub fn sign_request(
    secret: &str,
    path: &str,
    nonce: u64,
    body_json: &str,
) -> Result<AuthSignature, BitfinexError> {
    let payload = format!("{SIG_PREFIX}{path}{nonce}{body_json}");
    let sig = hmac_sha384_hex(secret, &payload)?;
    Ok(AuthSignature {
        payload,
        sig,
        nonce,
    })
}

/// Sign an endpoint-less authentication challenge.
///
/// Used where a caller needs a verifiable signature without a concrete
/// path or body (keep-alive and handshake messages). The payload is the
/// literal `AUTH` followed by the nonce twice.
pub fn sign_handshake(secret: &str, nonce: u64) -> Result<AuthSignature, BitfinexError> {
    let payload = format!("AUTH{nonce}{nonce}");
    let sig = hmac_sha384_hex(secret, &payload)?;
    Ok(AuthSignature {
        payload,
        sig,
        nonce,
    })
}

fn hmac_sha384_hex(secret: &str, payload: &str) -> Result<String, BitfinexError> {
    let mut hmac = HmacSha384::new_from_slice(secret.as_bytes())
        .map_err(|e| BitfinexError::Auth(format!("Invalid HMAC key: {e}")))?;
    hmac.update(payload.as_bytes());
    Ok(hex::encode(hmac.finalize().into_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signature_matches_rfc4231_vector() {
        // RFC 4231 test case 2 for HMAC-SHA-384.
        let sig = hmac_sha384_hex("Jefe", "what do ya want for nothing?").unwrap();
        assert_eq!(
            sig,
            "af45d2e376484031617f78d2b58a6b1b9c7ef464f5a01b47e42ec3736322445e\
             8e2240ca5e69e2c78b3239ecfab21649"
        );
    }

    #[test]
    fn test_payload_construction() {
        let signature = sign_request("secret", "/order/new", 1616492376594000, "{}").unwrap();
        assert_eq!(signature.payload, "/api/v2/order/new1616492376594000{}");
        assert_eq!(signature.nonce, 1616492376594000);
    }

    #[test]
    fn test_empty_body_payload_ends_in_braces() {
        // An empty body canonicalizes to the empty-object literal, never "".
        let body = serde_json::to_string(&serde_json::json!({})).unwrap();
        let signature = sign_request("secret", "/order/new", 1, &body).unwrap();
        assert!(signature.payload.ends_with("{}"));
    }

    #[test]
    fn test_signature_consistency() {
        // Same inputs should produce same signature.
        let sig1 = sign_request("my_secret", "/auth/r/wallets", 12345, "{}").unwrap();
        let sig2 = sign_request("my_secret", "/auth/r/wallets", 12345, "{}").unwrap();
        assert_eq!(sig1.sig, sig2.sig);
    }

    #[test]
    fn test_signature_changes_with_nonce() {
        let sig1 = sign_request("my_secret", "/auth/r/wallets", 12345, "{}").unwrap();
        let sig2 = sign_request("my_secret", "/auth/r/wallets", 12346, "{}").unwrap();
        assert_ne!(sig1.sig, sig2.sig);
    }

    #[test]
    fn test_signature_changes_with_body() {
        let sig1 = sign_request("my_secret", "/order/new", 12345, "{}").unwrap();
        let sig2 = sign_request("my_secret", "/order/new", 12345, r#"{"type":"LIMIT"}"#).unwrap();
        assert_ne!(sig1.sig, sig2.sig);
    }

    #[test]
    fn test_handshake_payload() {
        let signature = sign_handshake("my_secret", 777).unwrap();
        assert_eq!(signature.payload, "AUTH777777");
        assert_eq!(signature.nonce, 777);

        // The handshake digest is the plain HMAC of that payload.
        let expected = hmac_sha384_hex("my_secret", "AUTH777777").unwrap();
        assert_eq!(signature.sig, expected);
    }

    #[test]
    fn test_signature_is_hex_sha384() {
        let signature = sign_request("key", "/auth/r/wallets", 1, "{}").unwrap();
        // SHA-384 digests are 48 bytes, 96 hex characters.
        assert_eq!(signature.sig.len(), 96);
        assert!(signature.sig.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
