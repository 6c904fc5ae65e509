//! Token signing for the shared-secret algorithm family.

use hmac::{Hmac, Mac};
use serde_json::Value;
use sha2::{Sha256, Sha384, Sha512};

use crate::algorithm::{Algorithm, HashFunction};
use crate::base64url;
use crate::error::JotError;
use crate::JsonObject;

type HmacSha256 = Hmac<Sha256>;
type HmacSha384 = Hmac<Sha384>;
type HmacSha512 = Hmac<Sha512>;

/// Sign `payload` into a compact three-segment token.
///
/// The header is built from the algorithm name: `{"alg": ..., "type":
/// "JWT"}`. For the HMAC family the signature segment is the encoded raw
/// tag over `header.payload`; for [`Algorithm::None`] it is empty. The
/// same payload, secret, and algorithm always produce the same token.
pub fn sign(payload: &JsonObject, secret: &[u8], algorithm: Algorithm) -> Result<String, JotError> {
    let header = build_header(algorithm);

    let mut token = base64url::encode_json(&header)?;
    token.push('.');
    token.push_str(&base64url::encode_json(payload)?);

    // The signing input is the first two segments, dot included.
    if let Some(hash) = algorithm.hash() {
        let tag = hmac_tag(hash, secret, token.as_bytes())?;
        token.push('.');
        token.push_str(&base64url::encode_bytes(&tag));
    } else if algorithm.uses_asymmetric_key() {
        return Err(JotError::AsymmetricUnsupported(algorithm.name()));
    } else {
        token.push('.');
    }

    Ok(token)
}

fn build_header(algorithm: Algorithm) -> JsonObject {
    let mut header = JsonObject::new();
    header.insert(
        "alg".to_string(),
        Value::String(algorithm.name().to_string()),
    );
    header.insert("type".to_string(), Value::String("JWT".to_string()));
    header
}

/// Raw HMAC tag over `message`, keyed with `secret`.
fn hmac_tag(hash: HashFunction, secret: &[u8], message: &[u8]) -> Result<Vec<u8>, JotError> {
    match hash {
        HashFunction::Sha256 => {
            let mut mac = HmacSha256::new_from_slice(secret)
                .map_err(|e| JotError::SigningFailed(format!("invalid HMAC key: {e}")))?;
            mac.update(message);
            Ok(mac.finalize().into_bytes().to_vec())
        }
        HashFunction::Sha384 => {
            let mut mac = HmacSha384::new_from_slice(secret)
                .map_err(|e| JotError::SigningFailed(format!("invalid HMAC key: {e}")))?;
            mac.update(message);
            Ok(mac.finalize().into_bytes().to_vec())
        }
        HashFunction::Sha512 => {
            let mut mac = HmacSha512::new_from_slice(secret)
                .map_err(|e| JotError::SigningFailed(format!("invalid HMAC key: {e}")))?;
            mac.update(message);
            Ok(mac.finalize().into_bytes().to_vec())
        }
    }
}
