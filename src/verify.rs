//! Token verification: structural parsing, header inspection, and
//! constant-time signature comparison.

use ring::hmac;
use serde_json::Value;

use crate::algorithm::{Algorithm, HashFunction};
use crate::base64url;
use crate::error::JotError;
use crate::JsonObject;

/// Decoded contents of a structurally valid token.
///
/// `header` and `payload` are populated even when the signature does not
/// match, so callers can inspect claims. Nothing in them may be trusted
/// unless `is_verified` is true.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Verification {
    pub is_verified: bool,
    pub header: JsonObject,
    pub payload: JsonObject,
}

/// Verify a compact token against a shared secret.
///
/// Returns `is_verified = false` rather than an error when the token is
/// structurally valid but untrustworthy: a signature that does not match
/// (or does not even decode), a header without an `alg` field, or `alg`
/// set to `"none"` (unsigned tokens are never trusted). Errors are
/// reserved for tokens that cannot be decoded at all and for algorithm
/// names outside the registry.
pub fn verify(token: &str, secret: &[u8]) -> Result<Verification, JotError> {
    let (header_segment, payload_segment, signature_segment) = split_token(token)?;

    let header = base64url::decode_json(header_segment)?;
    let payload = base64url::decode_json(payload_segment)?;

    let mut is_verified = false;

    match header.get("alg") {
        // Tokens with no usable algorithm label stay unverified.
        None | Some(Value::Null) => {}
        Some(Value::String(name)) if name == "none" => {}
        Some(Value::String(name)) => {
            let algorithm = Algorithm::from_name(name)?;
            if let Some(hash) = algorithm.hash() {
                // The strict decode is canonical, so a signature segment
                // that does not decode cannot match any computed tag:
                // that is a mismatch, not a malformed token.
                if let Ok(tag) = base64url::decode_bytes(signature_segment) {
                    let signing_input = format!("{header_segment}.{payload_segment}");
                    is_verified = hmac_verify(hash, secret, signing_input.as_bytes(), &tag);
                }
            } else if algorithm.uses_asymmetric_key() {
                return Err(JotError::AsymmetricUnsupported(algorithm.name()));
            }
        }
        Some(other) => {
            return Err(JotError::UnsupportedAlgorithm(other.to_string()));
        }
    }

    Ok(Verification {
        is_verified,
        header,
        payload,
    })
}

/// Decode a token's header and payload without checking anything.
///
/// No algorithm resolution and no signature comparison happen, so even a
/// token naming an unregistered algorithm decodes. `is_verified` is
/// always false.
pub fn decode_unverified(token: &str) -> Result<Verification, JotError> {
    let (header_segment, payload_segment, _) = split_token(token)?;
    Ok(Verification {
        is_verified: false,
        header: base64url::decode_json(header_segment)?,
        payload: base64url::decode_json(payload_segment)?,
    })
}

/// Split a token into its three dot-separated segments.
///
/// The signature segment may be empty; the header and payload segments
/// may not.
fn split_token(token: &str) -> Result<(&str, &str, &str), JotError> {
    let segments: Vec<&str> = token.split('.').collect();
    match segments.as_slice() {
        &[header, payload, signature] => {
            if header.is_empty() {
                return Err(JotError::MalformedToken("header segment is empty".into()));
            }
            if payload.is_empty() {
                return Err(JotError::MalformedToken("payload segment is empty".into()));
            }
            Ok((header, payload, signature))
        }
        parts => Err(JotError::MalformedToken(format!(
            "expected 3 dot-separated segments, got {}",
            parts.len()
        ))),
    }
}

/// Constant-time check of `tag` against the HMAC of `message` under
/// `secret`.
fn hmac_verify(hash: HashFunction, secret: &[u8], message: &[u8], tag: &[u8]) -> bool {
    let mac = match hash {
        HashFunction::Sha256 => hmac::HMAC_SHA256,
        HashFunction::Sha384 => hmac::HMAC_SHA384,
        HashFunction::Sha512 => hmac::HMAC_SHA512,
    };
    hmac::verify(&hmac::Key::new(mac, secret), message, tag).is_ok()
}
